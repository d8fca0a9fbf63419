//! Interactive play mode
//!
//! Text-based game loop: rounds of guessing followed by a replay prompt.

use crate::core::{DigitCount, Guess};
use crate::game::{ReplayDecision, Round, RoundError, SessionStats};
use crate::generator::SecretSource;
use crate::output::{print_feedback, print_intro, print_session_summary, print_win};
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::{debug, info};

/// Configuration for an interactive session
#[derive(Debug, Clone, Copy)]
pub struct PlayConfig {
    /// Digit count for the first round
    pub digits: DigitCount,
    pub color: bool,
}

impl PlayConfig {
    #[must_use]
    pub const fn new(digits: DigitCount) -> Self {
        Self {
            digits,
            color: true,
        }
    }
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self::new(DigitCount::DEFAULT)
    }
}

/// Ways a session ends other than the player saying "no"
#[derive(Debug, Error)]
pub enum PlayError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Input closed before the game finished")]
    InputClosed,
    #[error("Not a valid replay answer: {0:?}")]
    InvalidReplayAnswer(String),
    #[error("No secret available for a {0} digit game")]
    NoSecret(DigitCount),
    #[error(transparent)]
    Round(#[from] RoundError),
}

/// Run an interactive session until the player stops
///
/// Rejected guesses (not a number, wrong length) are reported and prompted
/// again. After each win the player is asked to play again; a "yes" answer
/// asks for a new digit count, an invalid count goes back to the replay
/// question.
///
/// # Errors
///
/// Returns an error if the replay answer is not a recognized yes/no answer,
/// if input ends early, if `source` has no secret for the requested width, or
/// on an I/O error.
pub fn run_play<S, R, W>(
    config: &PlayConfig,
    source: &mut S,
    input: &mut R,
    out: &mut W,
) -> Result<SessionStats, PlayError>
where
    S: SecretSource,
    R: BufRead,
    W: Write,
{
    print_intro(out, config.digits, config.color)?;

    let mut digits = config.digits;
    let mut stats = SessionStats::default();

    loop {
        let secret = source
            .next_secret(digits)
            .ok_or(PlayError::NoSecret(digits))?;

        let round = play_round(Round::new(secret), config.color, input, out)?;
        print_win(out, &round, config.color)?;
        stats.record(&round);

        match ask_replay(input, out)? {
            Some(next) => digits = next,
            None => {
                print_session_summary(out, &stats, config.color)?;
                writeln!(out, "\nThanks for playing!")?;
                info!(rounds = stats.rounds_won, "session finished");
                return Ok(stats);
            }
        }
    }
}

/// Prompt for guesses until the round is won
fn play_round<R: BufRead, W: Write>(
    mut round: Round,
    color: bool,
    input: &mut R,
    out: &mut W,
) -> Result<Round, PlayError> {
    let digits = round.digits();

    while !round.is_won() {
        let line = get_user_input(input, out, &format!("Enter a {digits} digit number"))?;

        let guess = match Guess::parse(&line, digits) {
            Ok(guess) => guess,
            Err(e) => {
                debug!(input = %line, error = %e, "rejected guess");
                writeln!(out, "{e}")?;
                continue;
            }
        };

        let turn = round.submit(guess)?;
        print_feedback(out, &turn.feedback, color)?;
    }

    Ok(round)
}

/// Ask whether to play again
///
/// Returns the digit count for the next round, or `None` to stop.
fn ask_replay<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<Option<DigitCount>, PlayError> {
    loop {
        let answer = get_user_input(input, out, "Play Again? (Y/N)")?;

        match answer.parse::<ReplayDecision>() {
            Ok(ReplayDecision::Stop) => return Ok(None),
            Ok(ReplayDecision::Continue) => {
                let entry =
                    get_user_input(input, out, "Enter the number of digits you want to play with")?;
                match entry.parse::<DigitCount>() {
                    Ok(digits) => return Ok(Some(digits)),
                    Err(e) => {
                        debug!(input = %entry, error = %e, "rejected digit count");
                        writeln!(out, "{e}")?;
                    }
                }
            }
            Err(e) => {
                info!(error = %e, "unrecognized replay answer");
                writeln!(out, "Not a valid entry! Try running the game again!")?;
                return Err(PlayError::InvalidReplayAnswer(answer));
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<String, PlayError> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    // Invalid UTF-8 decodes to U+FFFD and then fails guess parsing
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Err(PlayError::InputClosed);
    }

    Ok(String::from_utf8_lossy(&buf).trim().to_string())
}
