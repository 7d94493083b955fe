// src/core.rs
pub mod count;
pub mod order;
pub mod report;
pub mod separators;
pub mod tokenize;
