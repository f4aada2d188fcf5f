use crate::core::DebtReport;
use colored::*;
use std::io::Write;

#[derive(Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &DebtReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &DebtReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        Ok(())
    }
}

pub struct TerminalWriter;

impl Default for TerminalWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalWriter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputWriter for TerminalWriter {
    fn write_report(&mut self, report: &DebtReport) -> anyhow::Result<()> {
        print_header();
        print_interest(report);
        print_priorities(report);
        Ok(())
    }
}

fn print_header() {
    println!("{}", "Debtledger Report".bold().blue());
    println!("{}", "=================".blue());
    println!();
}

fn print_interest(report: &DebtReport) {
    let months = report.months;
    for figure in &report.interest {
        println!(
            "Debt interest for {} after {months} months: ${:.2}",
            figure.id, figure.interest
        );
    }
    println!();
}

fn print_priorities(report: &DebtReport) {
    println!("Refactoring priorities (area_id, debt-to-refactor ratio):");
    for entry in &report.priorities {
        println!("{}: {:.2}", entry.id, entry.ratio);
    }
}

pub fn create_writer(format: OutputFormat) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(std::io::stdout())),
        OutputFormat::Terminal => Box::new(TerminalWriter::new()),
    }
}
