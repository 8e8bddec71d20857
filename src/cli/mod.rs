//! CLI command handlers
//!
//! Bridges clap argument parsing with sessions and the display layer.

pub mod plan;
pub mod shell;

pub use plan::handle_plan_command;
pub use shell::{parse_line, Reply, Shell, ShellCommand};
