//! Interactive budget shell
//!
//! Reads one command per line, applies it to an in-memory [`Session`] and
//! reports the outcome as notices followed by the refreshed allowance line.
//! Nothing about the budget outlives the process.

use std::io::{self, BufRead, Write};

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::config::Settings;
use crate::display::{format_history, format_status_details, format_status_line, Notice};
use crate::error::AllowanceError;
use crate::input::InputParser;
use crate::models::SpendOutcome;
use crate::session::Session;

/// Commands accepted by the shell, one per line
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Start a new budget, replacing the current one
    #[command(alias = "initialize")]
    Init {
        /// Amount to spread (e.g. "100" or "100.00")
        #[arg(allow_hyphen_values = true)]
        balance: String,
        /// Last day the amount must cover (YYYY-MM-DD)
        deadline: String,
    },

    /// Record an expenditure against today's allowance
    Spend {
        /// Amount spent
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Fold today's unspent allowance back into the balance
    #[command(alias = "redistribute-daily")]
    Redistribute,

    /// Replace balance and deadline, keeping today's spending
    Redefine {
        /// New balance
        #[arg(allow_hyphen_values = true)]
        balance: String,
        /// New deadline (YYYY-MM-DD)
        deadline: String,
    },

    /// Show the full budget breakdown
    Status,

    /// Show the operations recorded in this session
    History,

    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

#[derive(Parser, Debug)]
#[command(
    name = "shell",
    no_binary_name = true,
    disable_version_flag = true,
    help_template = "Commands:\n{subcommands}"
)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

/// What the shell has to show after one line of input
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Reply {
    pub notices: Vec<Notice>,
    pub lines: Vec<String>,
    pub quit: bool,
}

impl Reply {
    fn notice(notice: Notice) -> Self {
        Self {
            notices: vec![notice],
            ..Self::default()
        }
    }

    fn error(err: &AllowanceError) -> Self {
        Self::notice(Notice::error("Error", err.to_string()))
    }
}

/// Parse one line of shell input
///
/// Returns `Ok(None)` for blank lines and `#` comments. Help requests and
/// invalid lines come back as a ready-made [`Reply`].
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>, Reply> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    match ShellLine::try_parse_from(line.split_whitespace()) {
        Ok(parsed) => Ok(Some(parsed.command)),
        Err(err)
            if matches!(
                err.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) =>
        {
            Err(Reply {
                lines: vec![err.to_string().trim_end().to_string()],
                ..Reply::default()
            })
        }
        Err(err) => {
            let rendered = err.to_string();
            let first = rendered.lines().next().unwrap_or_default();
            let message = first.strip_prefix("error: ").unwrap_or(first);
            Err(Reply::notice(Notice::error(
                "Error",
                format!("{} (type 'help' for commands)", message),
            )))
        }
    }
}

/// Drives a session from text commands
pub struct Shell<'a> {
    session: Session,
    settings: &'a Settings,
}

impl<'a> Shell<'a> {
    pub fn new(session: Session, settings: &'a Settings) -> Self {
        Self { session, settings }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Apply one command and describe the result
    pub fn execute(&mut self, command: ShellCommand) -> Reply {
        debug!(?command, "Executing shell command");
        let settings = self.settings;
        let parser = InputParser::new(settings);
        let symbol = settings.currency_symbol.as_str();

        match command {
            ShellCommand::Init { balance, deadline } => {
                let (balance, deadline) = match parser.parse_budget(&balance, &deadline) {
                    Ok(parsed) => parsed,
                    Err(err) => return Reply::error(&err),
                };

                let replaced = self.session.manager().map(|previous| {
                    Notice::info(
                        "Initialize",
                        format!("Replacing the previous budget ({})", previous),
                    )
                });

                self.session.initialize(balance, deadline);
                let mut reply = self.with_status(Notice::success(
                    "Initialize",
                    format!(
                        "Budget of {} until {} initialized",
                        balance.format_with_symbol(symbol),
                        deadline
                    ),
                ));
                if let Some(notice) = replaced {
                    reply.notices.insert(0, notice);
                }
                reply
            }

            ShellCommand::Spend { amount } => {
                let amount = match parser.parse_amount(&amount) {
                    Ok(amount) => amount,
                    Err(err) => return Reply::error(&err),
                };

                match self.session.spend(amount) {
                    Ok(SpendOutcome::Recorded { .. }) => self.with_status(Notice::success(
                        "Spend",
                        format!("{} spent", amount.format_with_symbol(symbol)),
                    )),
                    Ok(SpendOutcome::ExceedsAllowance { limit, .. }) => {
                        Reply::notice(Notice::warning(
                            "Spend",
                            format!(
                                "{} is more than the {} available today",
                                amount.format_with_symbol(symbol),
                                limit.format_with_symbol(symbol)
                            ),
                        ))
                    }
                    Err(err) => Reply::error(&err),
                }
            }

            ShellCommand::Redistribute => match self.session.redistribute() {
                Ok(unspent) => self.with_status(Notice::success(
                    "Redistribute",
                    format!(
                        "Daily allowance redistributed ({} back to balance)",
                        unspent.format_with_symbol(symbol)
                    ),
                )),
                Err(err) => Reply::error(&err),
            },

            ShellCommand::Redefine { balance, deadline } => {
                let (balance, deadline) = match parser.parse_budget(&balance, &deadline) {
                    Ok(parsed) => parsed,
                    Err(err) => return Reply::error(&err),
                };

                match self.session.redefine(balance, deadline) {
                    Ok(()) => self.with_status(Notice::success(
                        "Redefine",
                        format!(
                            "Balance set to {} until {}",
                            balance.format_with_symbol(symbol),
                            deadline
                        ),
                    )),
                    Err(err) => Reply::error(&err),
                }
            }

            ShellCommand::Status => match self.session.status() {
                Ok(status) => Reply {
                    lines: vec![format_status_details(&status, symbol)
                        .trim_end()
                        .to_string()],
                    ..Reply::default()
                },
                Err(err) => Reply::error(&err),
            },

            ShellCommand::History => Reply {
                lines: vec![format_history(self.session.history())],
                ..Reply::default()
            },

            ShellCommand::Quit => Reply {
                quit: true,
                ..Reply::default()
            },
        }
    }

    /// Parse and apply one line of input
    pub fn handle_line(&mut self, line: &str) -> Reply {
        match parse_line(line) {
            Ok(Some(command)) => self.execute(command),
            Ok(None) => Reply::default(),
            Err(reply) => reply,
        }
    }

    /// Read commands until end of input or `quit`
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut output: W,
        interactive: bool,
    ) -> io::Result<()> {
        if interactive {
            writeln!(output, "Daily allowance shell. Type 'help' for commands.")?;
            write!(output, "> ")?;
            output.flush()?;
        }

        for line in input.lines() {
            let reply = self.handle_line(&line?);
            write_reply(&mut output, &reply, interactive)?;

            if reply.quit {
                break;
            }

            if interactive {
                write!(output, "> ")?;
                output.flush()?;
            }
        }

        Ok(())
    }

    /// Notice followed by the refreshed allowance line
    fn with_status(&self, notice: Notice) -> Reply {
        let mut reply = Reply::notice(notice);
        match self.session.status() {
            Ok(status) => reply
                .lines
                .push(format_status_line(&status, &self.settings.currency_symbol)),
            Err(err) => reply.notices.push(Notice::error("Error", err.to_string())),
        }
        reply
    }
}

fn write_reply<W: Write>(output: &mut W, reply: &Reply, colored: bool) -> io::Result<()> {
    for notice in &reply.notices {
        if colored {
            writeln!(output, "{}", notice.render_colored())?;
        } else {
            writeln!(output, "{}", notice)?;
        }
    }

    for line in &reply.lines {
        writeln!(output, "{}", line)?;
    }

    Ok(())
}
