//! Audit logging for budget sessions
//!
//! Records every initialize, spend, redistribute and redefine with the
//! manager state before and after.
//!
//! - `AuditEntry`: one operation, with timestamp, session id and snapshots.
//! - `AuditLogger`: optional append-only JSONL sink for entries.
//! - `describe_changes`: human-readable summary of what an operation changed.

mod diff;
mod entry;
mod logger;

pub use diff::describe_changes;
pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
