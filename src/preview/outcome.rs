//! Process outcomes reported to the automation host.

use std::process::ExitCode;

/// Exit status the automation host reads as "neutral": nothing relevant to do.
pub const NEUTRAL_EXIT_CODE: u8 = 78;

/// Result of a command that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command did its work.
    Success,
    /// The triggering event was not relevant to this command.
    Neutral,
}

impl Outcome {
    #[must_use]
    pub fn code(&self) -> u8 {
        match self {
            Outcome::Success => 0,
            Outcome::Neutral => NEUTRAL_EXIT_CODE,
        }
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        ExitCode::from(outcome.code())
    }
}
