pub mod errors;

pub use errors::DebtError;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Interest rate applied per month when the caller does not supply one.
pub const DEFAULT_INTEREST_RATE: f64 = 0.05;

/// A named unit of code tracked for technical debt.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CodeArea {
    pub id: String,
    pub description: String,
    pub initial_debt: f64,
    pub refactor_cost: f64,
    /// Additional debt accrued since the area was registered. Starts at zero
    /// and is overwritten by each interest estimation.
    pub debt_interest: f64,
}

impl CodeArea {
    pub fn new(id: String, description: String, initial_debt: f64, refactor_cost: f64) -> Self {
        Self {
            id,
            description,
            initial_debt,
            refactor_cost,
            debt_interest: 0.0,
        }
    }

    /// Outstanding debt including accrued interest.
    pub fn total_debt(&self) -> f64 {
        self.initial_debt + self.debt_interest
    }

    /// Debt-to-refactor ratio used to rank remediation priority.
    pub fn debt_ratio(&self) -> f64 {
        self.total_debt() / self.refactor_cost
    }
}

/// One entry in the prioritized refactoring ranking.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RatioEntry {
    pub id: String,
    pub ratio: f64,
}

/// Interest accrued for one area over the report horizon.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct InterestFigure {
    pub id: String,
    pub description: String,
    pub interest: f64,
}

/// Report produced by estimating interest and ranking every tracked area.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DebtReport {
    pub timestamp: DateTime<Utc>,
    pub months: f64,
    pub rate: f64,
    pub interest: Vec<InterestFigure>,
    pub priorities: Vec<RatioEntry>,
}
