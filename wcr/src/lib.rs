// src/lib.rs
pub mod cli;
pub mod core;
pub mod models;
pub mod utils;

pub use crate::cli::{Args, run};
pub use crate::core::count::{tally_file, tally_reader};
pub use crate::core::order::ordered_keys;
pub use crate::core::report::{render_report, write_report};
pub use crate::core::separators::Separators;
pub use crate::core::tokenize::tokenize_line;
pub use crate::models::{FrequencyTable, TallySummary};
