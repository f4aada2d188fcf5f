use anyhow::Result;
use chrono::Utc;
use std::path::PathBuf;

use crate::core::{DebtReport, InterestFigure};
use crate::io;
use crate::io::output::{create_writer, OutputFormat};
use crate::ranking::take_top;
use crate::registry::DebtRegistry;

/// Configuration for the report command.
#[derive(Debug)]
pub struct ReportConfig {
    pub months: f64,
    pub rate: f64,
    pub top: Option<usize>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

/// Estimates interest for every area and assembles the ranked report.
pub fn build_report(registry: &mut DebtRegistry, months: f64, rate: f64) -> Result<DebtReport> {
    let areas: Vec<(String, String)> = registry
        .iter()
        .map(|area| (area.id.clone(), area.description.clone()))
        .collect();

    let mut interest = Vec::with_capacity(areas.len());
    for (id, description) in areas {
        let amount = registry.estimate_interest(&id, months, rate)?;
        interest.push(InterestFigure {
            id,
            description,
            interest: amount,
        });
    }

    Ok(DebtReport {
        timestamp: Utc::now(),
        months,
        rate,
        interest,
        priorities: registry.prioritize(),
    })
}

pub fn handle_report(config: ReportConfig) -> Result<()> {
    let mut registry = super::example_registry()?;
    let mut report = build_report(&mut registry, config.months, config.rate)?;

    if let Some(limit) = config.top {
        report.priorities = take_top(report.priorities, limit);
    }

    match &config.output {
        Some(path) => {
            if config.format != OutputFormat::Json {
                anyhow::bail!("Terminal output writes to stdout. Use --format json with --output.");
            }
            let json = serde_json::to_string_pretty(&report)?;
            io::write_file(path, &json)?;
        }
        None => {
            let mut writer = create_writer(config.format);
            writer.write_report(&report)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_report_covers_every_area() {
        let mut registry = crate::commands::example_registry().unwrap();

        let report = build_report(&mut registry, 6.0, 0.05).unwrap();

        assert_eq!(report.interest.len(), 2);
        assert_eq!(report.priorities.len(), 2);
        assert_eq!(report.months, 6.0);
        assert_eq!(report.rate, 0.05);
    }

    #[test]
    fn test_build_report_ranks_highest_ratio_first() {
        let mut registry = crate::commands::example_registry().unwrap();

        let report = build_report(&mut registry, 6.0, 0.05).unwrap();

        assert_eq!(report.priorities[0].id, "area1");
        assert_eq!(report.priorities[1].id, "area2");
        assert!(report.priorities[0].ratio >= report.priorities[1].ratio);
    }
}
