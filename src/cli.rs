use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Terminal,
    /// Machine-readable JSON report
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "debtledger")]
#[command(about = "Technical debt registry and refactoring prioritizer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Runs the demonstration when no subcommand is given
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the fixed two-area demonstration
    Demo,
    /// Estimate interest and rank the example areas for refactoring
    Report {
        /// Accrual horizon in months
        #[arg(long, default_value = "6")]
        months: f64,

        /// Compound interest rate per month
        #[arg(long, default_value = "0.05")]
        rate: f64,

        /// Show only top N priority entries
        #[arg(long = "top", visible_alias = "head")]
        top: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
