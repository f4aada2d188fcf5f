//! CLI command implementations for debtledger operations.
//!
//! Each submodule handles a specific command with its configuration and
//! execution logic.
//!
//! Available commands:
//! - **demo**: Run the fixed two-area demonstration
//! - **report**: Estimate interest and rank the example areas for refactoring

pub mod demo;
pub mod report;

pub use demo::run_demo;
pub use report::{build_report, handle_report, ReportConfig};

use crate::registry::DebtRegistry;
use anyhow::Result;

/// Registry preloaded with the example areas used by the demo and report commands.
pub fn example_registry() -> Result<DebtRegistry> {
    let mut registry = DebtRegistry::new();
    registry.upsert("area1", "User Authentication Module", 5000.0, 20000.0)?;
    registry.upsert("area2", "Payment Processing Module", 3000.0, 15000.0)?;
    Ok(registry)
}
