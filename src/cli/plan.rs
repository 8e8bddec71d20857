//! One-shot allowance computation
//!
//! `allowance plan <BALANCE> <DEADLINE>` answers "how much can I spend per
//! day?" without starting a shell.

use crate::clock::Clock;
use crate::config::Settings;
use crate::display::format_status_details;
use crate::error::AllowanceResult;
use crate::input::InputParser;
use crate::models::BudgetManager;

/// Compute and format the allowance for a balance and deadline given as text
pub fn handle_plan_command(
    settings: &Settings,
    clock: &dyn Clock,
    balance: &str,
    deadline: &str,
) -> AllowanceResult<String> {
    let (balance, deadline) = InputParser::new(settings).parse_budget(balance, deadline)?;
    let manager = BudgetManager::initialize(balance, deadline);
    let status = manager.status(clock.today())?;

    Ok(format_status_details(&status, &settings.currency_symbol))
}
