//! Pico-Fermi-Bagel - CLI
//!
//! Play the number guessing game in the terminal, or score a single guess.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use pico_fermi_bagel::{
    commands::{PlayConfig, run_play, score_guess},
    core::DigitCount,
    generator::RandomSecrets,
    logging::init_cli_logger,
    output::print_score_result,
};
use std::io;

#[derive(Parser)]
#[command(
    name = "pico_fermi_bagel",
    about = "The Pico-Fermi-Bagel number guessing game",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play(PlayArgs),

    /// Score a single guess against a known secret
    Score {
        /// The secret number, e.g. 1234
        secret: String,

        /// The guess to score, e.g. 4278
        guess: String,
    },
}

#[derive(Args, Debug, Clone, Copy, PartialEq, Eq)]
struct PlayArgs {
    /// Number of digits in the secret number (1-19)
    #[arg(
        short,
        long,
        visible_aliases = ["number-of-digits", "number_of_digits"],
        default_value_t = DigitCount::DEFAULT
    )]
    digits: DigitCount,

    /// Seed the secret generator for a reproducible game
    #[arg(long)]
    seed: Option<u64>,
}

impl Default for PlayArgs {
    fn default() -> Self {
        Self {
            digits: DigitCount::DEFAULT,
            seed: None,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    let color = !cli.no_color;

    // Default to Play mode if no command given
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Play(PlayArgs::default()));

    match command {
        Commands::Play(args) => run_play_command(args, color),
        Commands::Score { secret, guess } => run_score_command(&secret, &guess, color),
    }
}

fn run_play_command(args: PlayArgs, color: bool) -> Result<()> {
    let config = PlayConfig {
        digits: args.digits,
        color,
    };
    let mut source = RandomSecrets::from_seed(args.seed);

    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();

    run_play(&config, &mut source, &mut input, &mut out)?;
    Ok(())
}

fn run_score_command(secret: &str, guess: &str, color: bool) -> Result<()> {
    let result = score_guess(secret, guess)?;
    print_score_result(&mut io::stdout().lock(), &result, color)?;
    Ok(())
}
