//! Allowance status formatting
//!
//! Formats allowance figures and the audit trail for terminal output.

use crate::audit::AuditEntry;
use crate::models::AllowanceStatus;

/// One-line summary re-rendered after every action
pub fn format_status_line(status: &AllowanceStatus, symbol: &str) -> String {
    format!(
        "Daily allowance: {}, Remaining today: {}",
        status.daily_allowance.format_with_symbol(symbol),
        status.remaining_today.format_with_symbol(symbol)
    )
}

/// Full breakdown of the budget
pub fn format_status_details(status: &AllowanceStatus, symbol: &str) -> String {
    let rows = [
        ("Today", status.today.to_string()),
        ("Deadline", status.deadline.to_string()),
        ("Days remaining", status.days_remaining.to_string()),
        ("Balance", status.balance.format_with_symbol(symbol)),
        ("Daily allowance", status.daily_allowance.format_with_symbol(symbol)),
        ("Spent today", status.spent_today.format_with_symbol(symbol)),
        ("Remaining today", status.remaining_today.format_with_symbol(symbol)),
    ];

    let label_width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let value_width = rows.iter().map(|(_, value)| value.len()).max().unwrap_or(0);

    let mut output = String::new();
    for (label, value) in &rows {
        output.push_str(&format!(
            "{:<label_width$}  {:>value_width$}\n",
            label,
            value,
            label_width = label_width,
            value_width = value_width,
        ));
    }

    if status.remaining_today.is_negative() {
        output.push_str("Over today's allowance.\n");
    }

    output
}

/// Audit trail of a session, oldest first
pub fn format_history(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No operations recorded yet.".to_string();
    }

    entries
        .iter()
        .map(AuditEntry::format_human_readable)
        .collect::<Vec<_>>()
        .join("\n")
}
