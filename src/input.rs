//! Input boundary
//!
//! Converts raw user text into amounts and dates. Everything past this point
//! works with typed values; malformed text stops here with a parse error and
//! never reaches a session.

use chrono::NaiveDate;

use crate::config::Settings;
use crate::error::{AllowanceError, AllowanceResult};
use crate::models::Money;

/// Parses user text according to the configured currency and date format
pub struct InputParser<'a> {
    settings: &'a Settings,
}

impl<'a> InputParser<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Parse a decimal amount such as "100", "12.5" or "$12.50"
    pub fn parse_amount(&self, raw: &str) -> AllowanceResult<Money> {
        Money::parse_with_symbol(raw, &self.settings.currency_symbol)
            .map_err(|e| AllowanceError::amount_parse(raw.trim(), e.to_string()))
    }

    /// Parse a deadline date in the configured format (year-month-day by default)
    pub fn parse_deadline(&self, raw: &str) -> AllowanceResult<NaiveDate> {
        NaiveDate::parse_from_str(raw.trim(), &self.settings.date_format).map_err(|e| {
            AllowanceError::date_parse(
                raw.trim(),
                format!("{} (expected format {})", e, self.settings.date_format),
            )
        })
    }

    /// Parse the balance/deadline pair used to initialize or redefine a budget
    pub fn parse_budget(&self, balance: &str, deadline: &str) -> AllowanceResult<(Money, NaiveDate)> {
        Ok((self.parse_amount(balance)?, self.parse_deadline(deadline)?))
    }
}
