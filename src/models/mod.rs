//! Core data models for daily-allowance
//!
//! Money amounts, the budget manager entity and the expenditure policy.

pub mod manager;
pub mod money;
pub mod policy;

pub use manager::{AllowanceStatus, BudgetManager, SpendOutcome};
pub use money::{Money, MoneyParseError};
pub use policy::SpendPolicy;
