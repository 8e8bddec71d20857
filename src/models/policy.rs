//! Expenditure check policy
//!
//! Decides what an expenditure is compared against when it is recorded.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How an expenditure is checked against the daily allowance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SpendPolicy {
    /// Each expenditure is compared against the full daily allowance on its
    /// own. Several expenditures in one day may together exceed the allowance.
    #[default]
    PerTransaction,
    /// Each expenditure is compared against what is left of today's
    /// allowance (`allowance - spent_today`).
    Cumulative,
}

impl fmt::Display for SpendPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpendPolicy::PerTransaction => write!(f, "per-transaction"),
            SpendPolicy::Cumulative => write!(f, "cumulative"),
        }
    }
}
