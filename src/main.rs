//! Tiered Wordle - CLI
//!
//! Play Wordle against difficulty-tiered dictionaries, or query the dictionary
//! and the scoring rules directly.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tiered_wordle::{
    commands::{check_word, run_play, score_guess, summarize_tiers},
    game::{Difficulty, GameConfig, GuessEngine},
    output::{print_check_result, print_score, print_tier_summary},
    wordlists::{WordStore, shared},
};
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "tiered_wordle",
    about = "Wordle with difficulty-tiered dictionaries and 3-12 letter words",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding the six tier files (english-words.10 ... english-words.55)
    #[arg(long, global = true, default_value = "data")]
    dict_dir: PathBuf,

    /// Difficulty: easy (default), medium, hard, elite, lunatic, machine, or 1-6
    #[arg(short, long, global = true, default_value = "easy")]
    difficulty: Difficulty,

    /// Word length (3-12)
    #[arg(short, long, global = true, default_value = "5")]
    length: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game (default)
    Play,

    /// Check whether a word is accepted as a guess
    Check {
        /// Word to look up
        word: String,
    },

    /// Score a guess against a target word
    Score {
        /// The guessed word
        guess: String,

        /// The hidden target word
        target: String,
    },

    /// Show word counts per dictionary tier
    Tiers,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn load_store(cli: &Cli) -> Result<&'static WordStore> {
    shared::get_or_load(&cli.dict_dir).with_context(|| {
        format!(
            "Failed to load dictionaries from {}",
            cli.dict_dir.display()
        )
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = GameConfig::new(cli.difficulty, cli.length);

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    match command {
        Commands::Play => {
            config.validate()?;
            let store = load_store(&cli)?;
            let mut engine = GuessEngine::new(store);
            run_play(&mut engine, config)
        }
        Commands::Check { word } => {
            let store = load_store(&cli)?;
            print_check_result(&check_word(store, word));
            Ok(())
        }
        Commands::Score { guess, target } => {
            let feedback = score_guess(guess, target)?;
            print_score(guess, &feedback);
            Ok(())
        }
        Commands::Tiers => {
            config.validate()?;
            let store = load_store(&cli)?;
            print_tier_summary(&summarize_tiers(store, cli.length), cli.length);
            Ok(())
        }
    }
}
