use anyhow::Result;
use clap::Parser;
use debtledger::cli::{Cli, Commands};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => debtledger::commands::run_demo(),
        Commands::Report {
            months,
            rate,
            top,
            format,
            output,
        } => {
            let config = debtledger::commands::ReportConfig {
                months,
                rate,
                top,
                format: convert_output_format(format),
                output,
            };
            debtledger::commands::handle_report(config)
        }
    }
}

// Pure function mapping the CLI format flag onto the io layer's format type
fn convert_output_format(format: debtledger::cli::OutputFormat) -> debtledger::io::OutputFormat {
    match format {
        debtledger::cli::OutputFormat::Terminal => debtledger::io::OutputFormat::Terminal,
        debtledger::cli::OutputFormat::Json => debtledger::io::OutputFormat::Json,
    }
}
