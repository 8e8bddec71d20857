//! Budget session
//!
//! A session owns at most one [`BudgetManager`]. Before a successful
//! initialization it is [`BudgetState::Uninitialized`] and only accepts
//! `initialize`; afterwards it is [`BudgetState::Active`]. A later
//! initialization replaces the manager wholesale.
//!
//! Every successful state change is appended to the session's audit trail
//! and, if a logger is attached, to the audit log file. The in-memory trail
//! keeps only the most recent [`DEFAULT_HISTORY_LIMIT`] entries unless told
//! otherwise; the log file keeps everything.

use chrono::NaiveDate;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::audit::{AuditEntry, AuditLogger, Operation};
use crate::clock::Clock;
use crate::error::{AllowanceError, AllowanceResult};
use crate::models::{AllowanceStatus, BudgetManager, Money, SpendOutcome, SpendPolicy};

/// Number of audit entries a session keeps in memory by default
pub const DEFAULT_HISTORY_LIMIT: usize = 1000;

/// Whether a budget has been set up yet
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BudgetState {
    #[default]
    Uninitialized,
    Active(BudgetManager),
}

#[derive(Debug)]
pub struct Session {
    id: Uuid,
    state: BudgetState,
    policy: SpendPolicy,
    clock: Box<dyn Clock>,
    history: Vec<AuditEntry>,
    history_limit: usize,
    audit_logger: Option<AuditLogger>,
}

impl Session {
    /// Create an uninitialized session
    pub fn new(policy: SpendPolicy, clock: Box<dyn Clock>) -> Self {
        Self {
            id: Uuid::new_v4(),
            state: BudgetState::Uninitialized,
            policy,
            clock,
            history: Vec::new(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            audit_logger: None,
        }
    }

    /// Also append audit entries to a log file
    pub fn with_audit_logger(mut self, logger: AuditLogger) -> Self {
        self.audit_logger = Some(logger);
        self
    }

    /// Keep at most `limit` entries in the in-memory trail, dropping the oldest
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn policy(&self) -> SpendPolicy {
        self.policy
    }

    pub fn state(&self) -> &BudgetState {
        &self.state
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// The active manager, if any
    pub fn manager(&self) -> Option<&BudgetManager> {
        match &self.state {
            BudgetState::Active(manager) => Some(manager),
            BudgetState::Uninitialized => None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.manager().is_some()
    }

    /// The most recent audit entries of this session, oldest first
    pub fn history(&self) -> &[AuditEntry] {
        &self.history
    }

    /// Start a new budget, replacing any existing one
    pub fn initialize(&mut self, balance: Money, deadline: NaiveDate) {
        let manager = BudgetManager::initialize(balance, deadline);
        let previous = std::mem::replace(&mut self.state, BudgetState::Active(manager.clone()));

        let before = match previous {
            BudgetState::Active(old) => {
                debug!(session = %self.id, replaced = %old, "Replacing active budget");
                Some(old)
            }
            BudgetState::Uninitialized => None,
        };

        info!(session = %self.id, %balance, %deadline, "Budget initialized");
        self.record(Operation::Initialize, before.as_ref(), &manager, Some(balance));
    }

    /// Current allowance figures
    pub fn status(&self) -> AllowanceResult<AllowanceStatus> {
        let manager = self.manager().ok_or(AllowanceError::NoActiveBudget)?;
        manager.status(self.today())
    }

    /// Try to record an expenditure using the session's policy
    pub fn spend(&mut self, amount: Money) -> AllowanceResult<SpendOutcome> {
        let today = self.today();
        let policy = self.policy;
        let manager = self.active_mut()?;
        let before = manager.clone();

        let outcome = manager.spend(amount, policy, today)?;
        match outcome {
            SpendOutcome::Recorded { spent_today, .. } => {
                let after = manager.clone();
                info!(session = %self.id, %amount, %spent_today, "Expenditure recorded");
                self.record(Operation::Spend, Some(&before), &after, Some(amount));
            }
            SpendOutcome::ExceedsAllowance { limit, .. } => {
                info!(session = %self.id, %amount, %limit, %policy, "Expenditure exceeds allowance");
            }
        }

        Ok(outcome)
    }

    /// Fold today's unspent allowance back into the balance
    pub fn redistribute(&mut self) -> AllowanceResult<Money> {
        let today = self.today();
        let manager = self.active_mut()?;
        let before = manager.clone();

        let unspent = manager.redistribute_daily(today)?;
        let after = manager.clone();

        if unspent.is_negative() {
            warn!(session = %self.id, %unspent, "Overspent allowance taken from balance");
        }
        info!(session = %self.id, %unspent, balance = %after.balance(), "Daily allowance redistributed");
        self.record(Operation::Redistribute, Some(&before), &after, Some(unspent));

        Ok(unspent)
    }

    /// Overwrite balance and deadline of the active budget
    ///
    /// Spending already recorded today is kept.
    pub fn redefine(&mut self, balance: Money, deadline: NaiveDate) -> AllowanceResult<()> {
        let manager = self.active_mut()?;
        let before = manager.clone();

        manager.redefine(balance, deadline);
        let after = manager.clone();

        info!(session = %self.id, %balance, %deadline, "Budget redefined");
        self.record(Operation::Redefine, Some(&before), &after, None);

        Ok(())
    }

    fn active_mut(&mut self) -> AllowanceResult<&mut BudgetManager> {
        match &mut self.state {
            BudgetState::Active(manager) => Ok(manager),
            BudgetState::Uninitialized => Err(AllowanceError::NoActiveBudget),
        }
    }

    fn record(
        &mut self,
        operation: Operation,
        before: Option<&BudgetManager>,
        after: &BudgetManager,
        amount: Option<Money>,
    ) {
        let entry = AuditEntry::record(operation, self.id, before, after, amount);

        // A failing log file must not undo an operation that already happened.
        if let Some(logger) = &self.audit_logger {
            if let Err(err) = logger.log(&entry) {
                warn!(path = %logger.path().display(), "Failed to write audit entry: {err}");
            }
        }

        self.history.push(entry);
        let excess = self.history.len().saturating_sub(self.history_limit);
        if excess > 0 {
            self.history.drain(..excess);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::Duration;
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
    }

    fn session(policy: SpendPolicy) -> Session {
        Session::new(policy, Box::new(FixedClock(today())))
    }

    fn active_session() -> Session {
        let mut s = session(SpendPolicy::PerTransaction);
        s.initialize(Money::from_cents(10_000), today() + Duration::days(4));
        s
    }

    #[test]
    fn test_new_session_is_uninitialized() {
        let s = session(SpendPolicy::PerTransaction);
        assert_eq!(s.state(), &BudgetState::Uninitialized);
        assert!(!s.is_active());
        assert!(s.history().is_empty());
    }

    #[test]
    fn test_uninitialized_rejects_operations() {
        let mut s = session(SpendPolicy::PerTransaction);

        assert_eq!(s.spend(Money::from_cents(100)), Err(AllowanceError::NoActiveBudget));
        assert_eq!(s.redistribute(), Err(AllowanceError::NoActiveBudget));
        assert_eq!(
            s.redefine(Money::from_cents(100), today()),
            Err(AllowanceError::NoActiveBudget)
        );
        assert_eq!(s.status(), Err(AllowanceError::NoActiveBudget));
        assert!(s.history().is_empty());
    }

    #[test]
    fn test_initialize_activates() {
        let s = active_session();
        assert!(s.is_active());

        let status = s.status().unwrap();
        assert_eq!(status.daily_allowance, Money::from_cents(2500));
        assert_eq!(status.remaining_today, Money::from_cents(2500));
        assert_eq!(s.history().len(), 1);
        assert_eq!(s.history()[0].operation, Operation::Initialize);
    }

    #[test]
    fn test_reinitialize_replaces_wholesale() {
        let mut s = active_session();
        s.spend(Money::from_cents(1000)).unwrap();

        s.initialize(Money::from_cents(3000), today() + Duration::days(3));

        let manager = s.manager().unwrap();
        assert_eq!(manager.balance(), Money::from_cents(3000));
        assert_eq!(manager.spent_today(), Money::zero());
        assert!(s.history()[2].before.is_some());
    }

    #[test]
    fn test_initialize_with_deadline_today_surfaces_on_status() {
        let mut s = session(SpendPolicy::PerTransaction);
        s.initialize(Money::from_cents(10_000), today());

        assert!(s.is_active());
        assert_eq!(
            s.status(),
            Err(AllowanceError::DeadlineReached { deadline: today() })
        );
    }

    #[test]
    fn test_scenario_per_transaction() {
        let mut s = active_session();

        assert!(s.spend(Money::from_cents(1000)).unwrap().is_recorded());
        assert!(s.spend(Money::from_cents(2000)).unwrap().is_recorded());
        assert_eq!(s.manager().unwrap().spent_today(), Money::from_cents(3000));

        let unspent = s.redistribute().unwrap();
        assert_eq!(unspent, Money::from_cents(-500));
        assert_eq!(s.manager().unwrap().balance(), Money::from_cents(9500));
        assert_eq!(s.manager().unwrap().spent_today(), Money::zero());
    }

    #[test]
    fn test_scenario_cumulative() {
        let mut s = session(SpendPolicy::Cumulative);
        s.initialize(Money::from_cents(10_000), today() + Duration::days(4));

        assert!(s.spend(Money::from_cents(1000)).unwrap().is_recorded());
        assert!(!s.spend(Money::from_cents(2000)).unwrap().is_recorded());
        assert_eq!(s.manager().unwrap().spent_today(), Money::from_cents(1000));
    }

    #[test]
    fn test_rejected_spend_is_not_audited() {
        let mut s = active_session();
        assert!(!s.spend(Money::from_cents(5000)).unwrap().is_recorded());
        assert_eq!(s.history().len(), 1);
    }

    #[test]
    fn test_redefine_keeps_spent_today() {
        let mut s = active_session();
        s.spend(Money::from_cents(500)).unwrap();

        let deadline = today() + Duration::days(10);
        s.redefine(Money::from_cents(20_000), deadline).unwrap();

        let manager = s.manager().unwrap();
        assert_eq!(manager.balance(), Money::from_cents(20_000));
        assert_eq!(manager.deadline(), deadline);
        assert_eq!(manager.spent_today(), Money::from_cents(500));
        assert_eq!(
            s.history().last().unwrap().diff_summary.as_deref(),
            Some("balance: $100.00 -> $200.00, deadline: 2025-06-14 -> 2025-06-20")
        );
    }

    #[test]
    fn test_history_keeps_most_recent_entries() {
        let mut s = session(SpendPolicy::PerTransaction).with_history_limit(2);
        s.initialize(Money::from_cents(10_000), today() + Duration::days(4));
        s.spend(Money::from_cents(100)).unwrap();
        s.spend(Money::from_cents(200)).unwrap();
        s.redistribute().unwrap();

        let operations: Vec<Operation> = s.history().iter().map(|e| e.operation).collect();
        assert_eq!(operations, vec![Operation::Spend, Operation::Redistribute]);
        assert_eq!(s.history()[0].amount, Some(Money::from_cents(200)));
    }

    #[test]
    fn test_history_limit_does_not_trim_audit_log() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let mut s = session(SpendPolicy::PerTransaction)
            .with_history_limit(1)
            .with_audit_logger(logger.clone());

        s.initialize(Money::from_cents(10_000), today() + Duration::days(4));
        s.spend(Money::from_cents(100)).unwrap();

        assert_eq!(s.history().len(), 1);
        assert_eq!(logger.read_all().unwrap().len(), 2);
    }

    #[test]
    fn test_audit_logger_receives_entries() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let mut s = session(SpendPolicy::PerTransaction).with_audit_logger(logger.clone());

        s.initialize(Money::from_cents(10_000), today() + Duration::days(4));
        s.spend(Money::from_cents(250)).unwrap();
        s.redistribute().unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 3);
        assert!(entries.iter().all(|e| e.session_id == s.id()));
        assert_eq!(entries[2].operation, Operation::Redistribute);
        assert_eq!(entries[2].amount, Some(Money::from_cents(2250)));
    }
}
