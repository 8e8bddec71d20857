//! Diff generation for audit logging
//!
//! Describes which manager fields an operation changed.

use crate::models::BudgetManager;

/// Describe the fields that differ between two manager states
///
/// Returns `None` when nothing changed.
pub fn describe_changes(before: &BudgetManager, after: &BudgetManager) -> Option<String> {
    let mut changes = Vec::new();

    if before.balance() != after.balance() {
        changes.push(format!(
            "balance: {} -> {}",
            before.balance(),
            after.balance()
        ));
    }

    if before.spent_today() != after.spent_today() {
        changes.push(format!(
            "spent_today: {} -> {}",
            before.spent_today(),
            after.spent_today()
        ));
    }

    if before.deadline() != after.deadline() {
        changes.push(format!(
            "deadline: {} -> {}",
            before.deadline(),
            after.deadline()
        ));
    }

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}
