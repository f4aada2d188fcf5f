// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod core;
pub mod io;
pub mod ranking;
pub mod registry;

// Re-export commonly used types
pub use crate::core::{
    CodeArea, DebtError, DebtReport, InterestFigure, RatioEntry, DEFAULT_INTEREST_RATE,
};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

pub use crate::ranking::{sort_by_ratio, take_top};

pub use crate::registry::DebtRegistry;
