//! daily-allowance - spread a lump sum evenly until a deadline
//!
//! Given an amount of money and a deadline, computes how much can be spent
//! per day, records expenditures against that daily allowance and folds
//! whatever was not spent back into the balance at the end of the day.
//!
//! # Architecture
//!
//! - `models`: `Money`, the `BudgetManager` entity and the `SpendPolicy`
//! - `clock`: where "today" comes from
//! - `session`: the `Uninitialized` / `Active` state machine with its audit trail
//! - `input`: parsing of raw user text into amounts and dates
//! - `display`: status lines and notices
//! - `audit`: audit entries, diffs and the JSONL audit log
//! - `config`: paths and user settings
//! - `cli`: the one-shot `plan` command and the interactive shell
//! - `error`: custom error types
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use daily_allowance::clock::FixedClock;
//! use daily_allowance::models::{Money, SpendPolicy};
//! use daily_allowance::session::Session;
//!
//! let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
//! let mut session = Session::new(SpendPolicy::PerTransaction, Box::new(FixedClock(today)));
//!
//! session.initialize(Money::from_cents(10_000), NaiveDate::from_ymd_opt(2025, 6, 14).unwrap());
//! assert_eq!(session.status()?.daily_allowance, Money::from_cents(2500));
//!
//! assert!(session.spend(Money::from_cents(1000))?.is_recorded());
//! session.redistribute()?;
//! assert_eq!(session.manager().unwrap().balance(), Money::from_cents(11_500));
//! # Ok::<(), daily_allowance::AllowanceError>(())
//! ```

pub mod audit;
pub mod cli;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod input;
pub mod models;
pub mod session;

pub use error::{AllowanceError, AllowanceResult};
