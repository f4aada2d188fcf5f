use anyhow::Result;

/// Runs the canonical two-area demonstration and prints the results.
pub fn run_demo() -> Result<()> {
    let mut registry = super::example_registry()?;

    let interest_area1 = registry.estimate_interest_default("area1", 6.0)?;
    let interest_area2 = registry.estimate_interest_default("area2", 6.0)?;

    println!("Debt interest for area1 after 6 months: ${interest_area1:.2}");
    println!("Debt interest for area2 after 6 months: ${interest_area2:.2}");

    println!("Refactoring priorities (area_id, debt-to-refactor ratio):");
    for entry in registry.prioritize() {
        println!("{}: {:.2}", entry.id, entry.ratio);
    }

    Ok(())
}
