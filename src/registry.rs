//! In-memory registry of code areas and their accrued debt.

use std::collections::HashMap;

use crate::core::{CodeArea, DebtError, RatioEntry, DEFAULT_INTEREST_RATE};
use crate::ranking::sort_by_ratio;

/// Tracks technical debt per code area and ranks areas for refactoring.
///
/// The registry owns every record; callers interact through ids. Areas are
/// kept in insertion order so equal ratios rank first-registered first.
#[derive(Clone, Debug, Default)]
pub struct DebtRegistry {
    areas: HashMap<String, CodeArea>,
    order: Vec<String>,
}

impl DebtRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new code area or fully replace an existing one.
    ///
    /// Replacement discards any previously accrued interest: the fresh record
    /// starts with `debt_interest` at zero.
    pub fn upsert(
        &mut self,
        id: &str,
        description: &str,
        initial_debt: f64,
        refactor_cost: f64,
    ) -> Result<(), DebtError> {
        if !initial_debt.is_finite() || initial_debt < 0.0 {
            return Err(DebtError::InvalidDebt {
                id: id.to_string(),
                value: initial_debt,
            });
        }
        if !refactor_cost.is_finite() || refactor_cost <= 0.0 {
            return Err(DebtError::InvalidRefactorCost {
                id: id.to_string(),
                value: refactor_cost,
            });
        }

        let area = CodeArea::new(
            id.to_string(),
            description.to_string(),
            initial_debt,
            refactor_cost,
        );
        if self.areas.insert(id.to_string(), area).is_some() {
            log::debug!("replaced code area {id}, discarding accrued interest");
        } else {
            self.order.push(id.to_string());
        }
        Ok(())
    }

    /// Estimate the additional debt accrued by leaving `id` unaddressed for
    /// `months` periods at compound `rate` per period.
    ///
    /// The estimate is stored on the area and returned; a later call
    /// overwrites it. Fractional and negative horizons are accepted.
    pub fn estimate_interest(&mut self, id: &str, months: f64, rate: f64) -> Result<f64, DebtError> {
        let area = self
            .areas
            .get_mut(id)
            .ok_or_else(|| DebtError::AreaNotFound { id: id.to_string() })?;

        let interest = area.initial_debt * ((1.0 + rate).powf(months) - 1.0);
        area.debt_interest = interest;
        log::debug!("estimated interest {interest:.2} for {id} over {months} months");
        Ok(interest)
    }

    /// Estimate interest at the default rate of 5% per month.
    pub fn estimate_interest_default(&mut self, id: &str, months: f64) -> Result<f64, DebtError> {
        self.estimate_interest(id, months, DEFAULT_INTEREST_RATE)
    }

    /// Rank every tracked area by debt-to-refactor ratio, highest first.
    pub fn prioritize(&self) -> Vec<RatioEntry> {
        let entries = self
            .iter()
            .map(|area| RatioEntry {
                id: area.id.clone(),
                ratio: area.debt_ratio(),
            })
            .collect();
        log::debug!("ranking {} areas by debt-to-refactor ratio", self.len());
        sort_by_ratio(entries)
    }

    pub fn get(&self, id: &str) -> Option<&CodeArea> {
        self.areas.get(id)
    }

    /// Iterate areas in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CodeArea> {
        self.order.iter().filter_map(|id| self.areas.get(id))
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_rejects_negative_debt() {
        let mut registry = DebtRegistry::new();
        let err = registry.upsert("area", "desc", -1.0, 100.0).unwrap_err();
        assert_eq!(
            err,
            DebtError::InvalidDebt {
                id: "area".to_string(),
                value: -1.0
            }
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn test_upsert_rejects_zero_refactor_cost() {
        let mut registry = DebtRegistry::new();
        let err = registry.upsert("area", "desc", 100.0, 0.0).unwrap_err();
        assert_eq!(
            err,
            DebtError::InvalidRefactorCost {
                id: "area".to_string(),
                value: 0.0
            }
        );
    }

    #[test]
    fn test_upsert_rejects_non_finite_values() {
        let mut registry = DebtRegistry::new();
        assert!(registry.upsert("a", "d", f64::NAN, 100.0).is_err());
        assert!(registry.upsert("a", "d", f64::INFINITY, 100.0).is_err());
        assert!(registry.upsert("a", "d", 100.0, f64::NAN).is_err());
        assert!(registry.upsert("a", "d", 100.0, f64::NEG_INFINITY).is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_upsert_accepts_zero_debt() {
        let mut registry = DebtRegistry::new();
        registry.upsert("area", "desc", 0.0, 100.0).unwrap();
        assert_eq!(registry.get("area").unwrap().initial_debt, 0.0);
    }

    #[test]
    fn test_replacement_keeps_insertion_position() {
        let mut registry = DebtRegistry::new();
        registry.upsert("a", "first", 100.0, 100.0).unwrap();
        registry.upsert("b", "second", 100.0, 100.0).unwrap();
        registry.upsert("a", "updated", 100.0, 100.0).unwrap();

        let ids: Vec<&str> = registry.iter().map(|area| area.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_prioritize_ties_rank_in_insertion_order() {
        let mut registry = DebtRegistry::new();
        registry.upsert("b", "second", 50.0, 100.0).unwrap();
        registry.upsert("a", "first", 50.0, 100.0).unwrap();

        let priorities = registry.prioritize();

        assert_eq!(priorities[0].id, "b");
        assert_eq!(priorities[1].id, "a");
    }
}
