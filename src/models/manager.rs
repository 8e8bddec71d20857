//! Budget manager model
//!
//! Holds the balance still to be spread, the amount spent against today's
//! allowance, and the deadline. Every time-dependent operation takes the
//! current calendar date explicitly so callers decide what "today" is.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::policy::SpendPolicy;
use crate::error::{AllowanceError, AllowanceResult};

/// Result of an expenditure attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpendOutcome {
    /// The amount was added to today's spending
    Recorded {
        amount: Money,
        allowance: Money,
        spent_today: Money,
    },
    /// The amount is larger than what the policy allows; nothing changed
    ExceedsAllowance { amount: Money, limit: Money },
}

impl SpendOutcome {
    pub fn is_recorded(&self) -> bool {
        matches!(self, Self::Recorded { .. })
    }
}

/// Point-in-time view of a manager, as of a given day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AllowanceStatus {
    pub today: NaiveDate,
    pub deadline: NaiveDate,
    pub days_remaining: i64,
    pub balance: Money,
    pub spent_today: Money,
    pub daily_allowance: Money,
    pub remaining_today: Money,
}

/// Spreads a balance evenly over the days left until a deadline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetManager {
    /// Money not yet allocated to any day
    balance: Money,

    /// Spent against today's allowance since the last redistribution
    spent_today: Money,

    /// Last day the balance must cover
    deadline: NaiveDate,
}

impl BudgetManager {
    /// Create a manager with nothing spent yet
    ///
    /// Inputs are taken as given; text parsing and rejection of malformed
    /// values happen at the input boundary.
    pub fn initialize(initial_balance: Money, deadline: NaiveDate) -> Self {
        Self {
            balance: initial_balance,
            spent_today: Money::zero(),
            deadline,
        }
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn spent_today(&self) -> Money {
        self.spent_today
    }

    pub fn deadline(&self) -> NaiveDate {
        self.deadline
    }

    /// Whole days from `today` to the deadline (negative once it has passed)
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        (self.deadline - today).num_days()
    }

    /// The balance divided evenly across the remaining days, to the cent
    ///
    /// # Errors
    ///
    /// `DeadlineReached` when the deadline is `today` (no days to divide
    /// over) and `DeadlinePassed` when it lies in the past.
    pub fn compute_daily_allowance(&self, today: NaiveDate) -> AllowanceResult<Money> {
        let days = self.days_remaining(today);
        if days < 0 {
            return Err(AllowanceError::DeadlinePassed {
                deadline: self.deadline,
                days_overdue: -days,
            });
        }

        self.balance
            .split_even(days)
            .ok_or(AllowanceError::DeadlineReached {
                deadline: self.deadline,
            })
    }

    /// What is left of today's allowance (negative once overspent)
    pub fn remaining_today(&self, today: NaiveDate) -> AllowanceResult<Money> {
        self.compute_daily_allowance(today)?
            .checked_sub(self.spent_today)
            .ok_or(AllowanceError::Overflow("computing today's remaining allowance"))
    }

    /// Try to record an expenditure against today's allowance
    ///
    /// With [`SpendPolicy::PerTransaction`] the amount is compared with the
    /// full daily allowance, regardless of what was already spent today.
    /// With [`SpendPolicy::Cumulative`] it is compared with
    /// [`remaining_today`](Self::remaining_today).
    ///
    /// # Errors
    ///
    /// `InvalidAmount` for zero or negative amounts, `Overflow` when today's
    /// spending would leave the money range, plus any error from
    /// [`compute_daily_allowance`](Self::compute_daily_allowance). In every
    /// case the manager is left unchanged.
    pub fn spend(
        &mut self,
        amount: Money,
        policy: SpendPolicy,
        today: NaiveDate,
    ) -> AllowanceResult<SpendOutcome> {
        if !amount.is_positive() {
            return Err(AllowanceError::InvalidAmount(format!(
                "expenditure must be greater than zero, got {}",
                amount
            )));
        }

        let allowance = self.compute_daily_allowance(today)?;
        let limit = match policy {
            SpendPolicy::PerTransaction => allowance,
            SpendPolicy::Cumulative => self.remaining_today(today)?,
        };

        if amount > limit {
            return Ok(SpendOutcome::ExceedsAllowance { amount, limit });
        }

        self.spent_today = self
            .spent_today
            .checked_add(amount)
            .ok_or(AllowanceError::Overflow("recording the expenditure"))?;
        Ok(SpendOutcome::Recorded {
            amount,
            allowance,
            spent_today: self.spent_today,
        })
    }

    /// Fold today's unspent allowance back into the balance and reset the
    /// daily counter. Returns the amount folded back, which is negative when
    /// more than the allowance was spent.
    ///
    /// The allowance is recomputed at call time. Nothing prevents calling
    /// this twice on one day; each call adds another allowance's worth.
    ///
    /// On `Overflow` the manager is left unchanged.
    pub fn redistribute_daily(&mut self, today: NaiveDate) -> AllowanceResult<Money> {
        let unspent = self.remaining_today(today)?;
        self.balance = self
            .balance
            .checked_add(unspent)
            .ok_or(AllowanceError::Overflow("folding the unspent allowance into the balance"))?;
        self.spent_today = Money::zero();
        Ok(unspent)
    }

    /// Replace balance and deadline
    ///
    /// `spent_today` is kept: spending already recorded today still counts
    /// against the new allowance until the next redistribution.
    pub fn redefine(&mut self, new_balance: Money, new_deadline: NaiveDate) {
        self.balance = new_balance;
        self.deadline = new_deadline;
    }

    /// Snapshot of all derived values as of `today`
    pub fn status(&self, today: NaiveDate) -> AllowanceResult<AllowanceStatus> {
        let daily_allowance = self.compute_daily_allowance(today)?;
        let remaining_today = self.remaining_today(today)?;
        Ok(AllowanceStatus {
            today,
            deadline: self.deadline,
            days_remaining: self.days_remaining(today),
            balance: self.balance,
            spent_today: self.spent_today,
            daily_allowance,
            remaining_today,
        })
    }
}

impl fmt::Display for BudgetManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "balance {} until {} (spent today: {})",
            self.balance, self.deadline, self.spent_today
        )
    }
}
