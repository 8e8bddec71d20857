//! Source of "today"
//!
//! The allowance depends on the current calendar date. Production code uses
//! [`SystemClock`]; tests and the `--today` flag pin the date with
//! [`FixedClock`].

use chrono::{Local, NaiveDate};
use std::fmt;

/// Provides the current calendar date
pub trait Clock: fmt::Debug {
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always returns the same date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
