//! Audit entry data structures
//!
//! One entry per successful state change of a session's budget manager.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{BudgetManager, Money};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// A manager was created (or replaced)
    Initialize,
    /// An expenditure was recorded
    Spend,
    /// Unspent allowance was folded back into the balance
    Redistribute,
    /// Balance and deadline were overwritten
    Redefine,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Initialize => write!(f, "INITIALIZE"),
            Operation::Spend => write!(f, "SPEND"),
            Operation::Redistribute => write!(f, "REDISTRIBUTE"),
            Operation::Redefine => write!(f, "REDEFINE"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Session the operation belongs to
    pub session_id: Uuid,

    /// Amount the operation moved (expenditure, or allowance folded back)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,

    /// Manager state before the operation (absent for a first initialize)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// Manager state after the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Human-readable diff summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    /// Create an entry from the manager state around an operation
    pub fn record(
        operation: Operation,
        session_id: Uuid,
        before: Option<&BudgetManager>,
        after: &BudgetManager,
        amount: Option<Money>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            session_id,
            amount,
            before: before.and_then(|b| serde_json::to_value(b).ok()),
            after: serde_json::to_value(after).ok(),
            diff_summary: before.and_then(|b| super::diff::describe_changes(b, after)),
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation
        );

        if let Some(amount) = self.amount {
            output.push_str(&format!(" {}", amount));
        }

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn manager(balance: i64) -> BudgetManager {
        BudgetManager::initialize(
            Money::from_cents(balance),
            NaiveDate::from_ymd_opt(2025, 6, 14).unwrap(),
        )
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Initialize.to_string(), "INITIALIZE");
        assert_eq!(Operation::Spend.to_string(), "SPEND");
        assert_eq!(Operation::Redistribute.to_string(), "REDISTRIBUTE");
        assert_eq!(Operation::Redefine.to_string(), "REDEFINE");
    }

    #[test]
    fn test_first_initialize_has_no_before() {
        let entry = AuditEntry::record(
            Operation::Initialize,
            Uuid::new_v4(),
            None,
            &manager(10_000),
            None,
        );

        assert!(entry.before.is_none());
        assert!(entry.after.is_some());
        assert!(entry.diff_summary.is_none());
    }

    #[test]
    fn test_update_has_diff() {
        let before = manager(10_000);
        let after = manager(9_500);
        let entry = AuditEntry::record(
            Operation::Redistribute,
            Uuid::new_v4(),
            Some(&before),
            &after,
            Some(Money::from_cents(-500)),
        );

        assert_eq!(
            entry.diff_summary.as_deref(),
            Some("balance: $100.00 -> $95.00")
        );
    }

    #[test]
    fn test_serialization() {
        let session_id = Uuid::new_v4();
        let entry = AuditEntry::record(
            Operation::Spend,
            session_id,
            Some(&manager(10_000)),
            &manager(10_000),
            Some(Money::from_cents(250)),
        );

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"operation\":\"spend\""));
        let deserialized: AuditEntry = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.operation, Operation::Spend);
        assert_eq!(deserialized.session_id, session_id);
        assert_eq!(deserialized.amount, Some(Money::from_cents(250)));
    }

    #[test]
    fn test_human_readable_format() {
        let entry = AuditEntry::record(
            Operation::Spend,
            Uuid::new_v4(),
            Some(&manager(10_000)),
            &manager(10_000),
            Some(Money::from_cents(1000)),
        );

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("SPEND $10.00"));
        assert!(!formatted.contains("Changes"));
    }
}
