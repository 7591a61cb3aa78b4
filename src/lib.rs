//! Sizewise - an interactive disk usage browser
//!
//! This crate provides functionality for:
//! - Scanning a directory tree into files and folders ranked by size
//! - An interactive TUI to browse both rankings, mark entries and delete them

pub mod cli;
pub mod config;
pub mod error;
pub mod scanner;
pub mod tui;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, SweepError};
