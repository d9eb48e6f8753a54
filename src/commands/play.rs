//! Interactive play mode
//!
//! Text-based game loop on stdin/stdout.

use crate::error::GameError;
use crate::game::{GameConfig, GuessEngine, Outcome};
use crate::output::{print_game_over, print_guess_result};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// Run the interactive game loop until the player quits
///
/// # Errors
///
/// Returns an error on I/O failure reading input, or when no game can be
/// started with `config` (invalid length, or no word of that length in the tier).
pub fn run_play<R: Rng>(engine: &mut GuessEngine<'_, R>, config: GameConfig) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                      Tiered Wordle                           ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Difficulty: {}   Word length: {}",
        config.difficulty.to_string().bright_cyan().bold(),
        config.word_length.to_string().bright_cyan().bold()
    );
    println!("Commands: 'quit' to exit, 'new' for a new word\n");

    'games: loop {
        let mut game = engine.start(config)?;
        println!(
            "New game! Guess the {}-letter word in {} tries.\n",
            game.word_length(),
            game.max_guesses()
        );

        loop {
            let prompt = format!("Guess {}/{}", game.guesses_used() + 1, game.max_guesses());
            let input = get_user_input(&prompt)?;

            match input.to_lowercase().as_str() {
                "quit" | "q" | "exit" => break 'games,
                "new" | "n" => {
                    println!("\n🔄 New game started!\n");
                    continue 'games;
                }
                _ => {}
            }

            let result = match game.submit_guess(&input) {
                Ok(result) => result,
                Err(err @ (GameError::WrongLength { .. } | GameError::InvalidCharacter(_))) => {
                    println!("{}\n", format!("❌ {err}").red());
                    continue;
                }
                Err(err) => return Err(err.into()),
            };

            print_guess_result(&result, game.max_guesses());

            if matches!(result.outcome, Outcome::Won | Outcome::Lost) {
                print_game_over(&game);

                match get_user_input("Play again? (yes/no)")?
                    .to_lowercase()
                    .as_str()
                {
                    "yes" | "y" => continue 'games,
                    _ => break 'games,
                }
            }
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        // EOF behaves like quit
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
