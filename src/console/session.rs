//! Interactive console session
//!
//! Drives the read-eval loop: show the menu, read a choice, dispatch it to
//! the ledger and print the result. The session owns its ledger and is
//! generic over its input and output so it can run against stdin/stdout or
//! in-memory buffers.
//!
//! Only the Exit choice (or closed input) ends the loop. Every other failure
//! is reported and the session goes back to prompting.

use std::io::{BufRead, Write};

use tracing::{error, warn};

use crate::display::{format_footprint, format_menu};
use crate::error::{EcoTrackError, EcoTrackResult};
use crate::models::normalize_category_name;
use crate::services::EmissionsLedger;

use super::menu::MenuChoice;

const CHOICE_PROMPT: &str = "Enter your choice (1-4): ";
const CATEGORY_PROMPT: &str = "Enter the category (e.g., transport, electricity): ";
const AMOUNT_PROMPT: &str = "Enter the emissions amount in tons: ";
const FAREWELL: &str = "Exiting the Eco-Track tool. Goodbye!";
const INVALID_CHOICE: &str = "Invalid choice. Please enter a number between 1 and 4.";

/// Where the session is in its loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for a menu choice
    Prompting,
    /// A valid choice was read and is about to run
    Dispatching(MenuChoice),
    /// The loop has ended
    Terminated,
}

/// An interactive Eco-Track session
pub struct ConsoleSession<R, W> {
    input: R,
    output: W,
    ledger: EmissionsLedger,
    state: SessionState,
}

impl<R: BufRead, W: Write> ConsoleSession<R, W> {
    /// Create a session with an empty ledger
    pub fn new(input: R, output: W) -> Self {
        Self::with_ledger(input, output, EmissionsLedger::new())
    }

    /// Create a session around an existing ledger
    pub fn with_ledger(input: R, output: W, ledger: EmissionsLedger) -> Self {
        Self {
            input,
            output,
            ledger,
            state: SessionState::Prompting,
        }
    }

    /// The session's ledger
    pub fn ledger(&self) -> &EmissionsLedger {
        &self.ledger
    }

    /// Current loop state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Consume the session, returning its ledger
    pub fn into_ledger(self) -> EmissionsLedger {
        self.ledger
    }

    /// Run until the user exits or input is closed
    pub fn run(&mut self) {
        while self.state != SessionState::Terminated {
            self.step();
        }
    }

    /// Advance the loop by one transition and return the new state
    pub fn step(&mut self) -> SessionState {
        self.state = match self.state {
            SessionState::Prompting => self.read_choice(),
            SessionState::Dispatching(choice) => match self.dispatch(choice) {
                Ok(next) => next,
                Err(e) => {
                    report_unexpected(e);
                    SessionState::Prompting
                }
            },
            SessionState::Terminated => SessionState::Terminated,
        };
        self.state
    }

    fn read_choice(&mut self) -> SessionState {
        let menu = format_menu();
        let shown = self
            .show(&menu)
            .and_then(|_| self.show(CHOICE_PROMPT));

        // Read even when the menu could not be shown so input keeps draining
        let Some(line) = self.read_line() else {
            return SessionState::Terminated;
        };
        if let Err(e) = shown {
            report_unexpected(e);
            return SessionState::Prompting;
        }

        match line.parse::<MenuChoice>() {
            Ok(choice) => SessionState::Dispatching(choice),
            Err(_) => {
                if let Err(e) = self.say(INVALID_CHOICE) {
                    report_unexpected(e);
                }
                SessionState::Prompting
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> EcoTrackResult<SessionState> {
        match choice {
            MenuChoice::AddEmission => {
                let Some(category) = self.prompt(CATEGORY_PROMPT)? else {
                    return Ok(SessionState::Terminated);
                };
                let Some(amount) = self.prompt(AMOUNT_PROMPT)? else {
                    return Ok(SessionState::Terminated);
                };

                // Rejected amounts are already logged by the ledger
                match self.ledger.add(&normalize_category_name(&category), &amount) {
                    Ok(_) => {}
                    Err(e) if e.is_input_rejection() => {}
                    Err(e) => return Err(e),
                }
            }
            MenuChoice::CalculateFootprint => {
                let footprint = self.ledger.total();
                self.say(&format_footprint(footprint))?;
            }
            MenuChoice::SuggestReduction => {
                let suggestion = self.ledger.suggest();
                self.say(&suggestion)?;
            }
            MenuChoice::Exit => {
                self.say(FAREWELL)?;
                return Ok(SessionState::Terminated);
            }
        }

        Ok(SessionState::Prompting)
    }

    /// Print a prompt and read one line, `None` once input is closed
    fn prompt(&mut self, text: &str) -> EcoTrackResult<Option<String>> {
        self.show(text)?;
        Ok(self.read_line())
    }

    /// Read one line without its terminator
    ///
    /// A failing read is treated like closed input, since no further input
    /// can arrive.
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => {
                warn!("Input closed; leaving Eco-Track.");
                None
            }
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                error!("Failed to read input: {}", e);
                None
            }
        }
    }

    fn show(&mut self, text: &str) -> EcoTrackResult<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    fn say(&mut self, line: &str) -> EcoTrackResult<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }
}

/// Log a failure that escaped a loop iteration as the catch-all kind
fn report_unexpected(err: EcoTrackError) -> EcoTrackError {
    let err = err.into_unexpected();
    error!("An unexpected error occurred: {}", err);
    err
}
