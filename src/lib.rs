pub mod aggregate;
pub mod analyzer;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod output;
pub mod scanner;
pub mod task;
pub mod ui;

pub use error::{Result, ScannerError};
