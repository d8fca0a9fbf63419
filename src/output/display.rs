//! Display functions for game events and command results

use super::formatters::{create_progress_bar, paint, render_feedback};
use crate::commands::ScoreResult;
use crate::core::{DigitCount, Feedback, Verdict};
use crate::game::{Round, SessionStats};
use colored::Colorize;
use std::io::{self, Write};

/// Print the game rules
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_intro<W: Write>(out: &mut W, digits: DigitCount, color: bool) -> io::Result<()> {
    let rule = "═".repeat(60);
    writeln!(out, "\n{}", paint(&rule, color, |s| s.bright_cyan()))?;
    writeln!(
        out,
        "{}",
        paint("              P I C O   F E R M I   B A G E L", color, |s| s
            .bright_green()
            .bold())
    )?;
    writeln!(out, "{}\n", paint(&rule, color, |s| s.bright_cyan()))?;

    writeln!(out, "I'm thinking of a {digits} digit number. Try to guess it!")?;
    writeln!(out, "Each digit of your guess is scored:\n")?;
    writeln!(out, "  F  Fermi  the digit is in the right place")?;
    writeln!(out, "  P  Pico   the digit is in the number but in another place")?;
    writeln!(out, "  B  Bagel  the digit is not in the number\n")?;
    writeln!(out, "Example: my number is 1234 and you guess 4278 -> P F B B\n")?;
    writeln!(
        out,
        "Play with more digits for a harder game, e.g. play --digits 5\n"
    )
}

/// Print the feedback for one guess
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_feedback<W: Write>(out: &mut W, feedback: &Feedback, color: bool) -> io::Result<()> {
    writeln!(out, "  {}", render_feedback(feedback, color))
}

/// Print the win banner for a finished round
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_win<W: Write>(out: &mut W, round: &Round, color: bool) -> io::Result<()> {
    let turns = round.guess_count();

    writeln!(out)?;
    writeln!(
        out,
        "{} {} is the computer's number!",
        paint("Congratulations!", color, |s| s.bright_green().bold()),
        paint(&round.secret().to_string(), color, |s| s
            .bright_yellow()
            .bold())
    )?;
    writeln!(
        out,
        "Solved in {} {}\n",
        paint(&turns.to_string(), color, |s| s.bright_cyan().bold()),
        if turns == 1 { "guess" } else { "guesses" }
    )
}

/// Print statistics for the rounds played this session
///
/// Prints nothing when no round was won.
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_session_summary<W: Write>(
    out: &mut W,
    stats: &SessionStats,
    color: bool,
) -> io::Result<()> {
    let (Some(average), Some(best), Some(worst)) =
        (stats.average_guesses(), stats.best_round, stats.worst_round)
    else {
        return Ok(());
    };

    writeln!(out, "\n{}", paint("Session summary:", color, |s| s.bright_cyan().bold()))?;
    writeln!(out, "   Rounds won:       {}", stats.rounds_won)?;
    writeln!(out, "   Average guesses:  {average:.2}")?;
    writeln!(out, "   Best round:       {best}")?;
    writeln!(out, "   Worst round:      {worst}")?;

    if stats.rounds_won > 1 {
        writeln!(out, "\n   Distribution:")?;
        for guess_count in best..=worst {
            if let Some(&count) = stats.guess_distribution.get(&guess_count) {
                let bar = create_progress_bar(count, stats.rounds_won, 30);
                writeln!(
                    out,
                    "   {guess_count:3}: {} {count}",
                    paint(&bar, color, |s| s.green())
                )?;
            }
        }
    }

    Ok(())
}

/// Print the result of the `score` command
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_score_result<W: Write>(
    out: &mut W,
    result: &ScoreResult,
    color: bool,
) -> io::Result<()> {
    writeln!(
        out,
        "{} vs {}: {}",
        result.secret,
        result.guess,
        render_feedback(&result.feedback, color)
    )?;
    writeln!(
        out,
        "   Fermi: {}  Pico: {}  Bagel: {}",
        result.feedback.count(Verdict::Fermi),
        result.feedback.count(Verdict::Pico),
        result.feedback.count(Verdict::Bagel)
    )?;

    if result.feedback.is_solved() {
        writeln!(out, "{}", paint("All Fermi - solved!", color, |s| s.green().bold()))?;
    }

    Ok(())
}
