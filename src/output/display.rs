//! Display functions for command results

use super::formatters::{attempts_bar, guess_tiles};
use crate::commands::{CheckResult, TierSummary};
use crate::core::Feedback;
use crate::game::{GameSession, GameState, GuessResult, Outcome};
use colored::Colorize;

/// Print the feedback for one submitted guess
pub fn print_guess_result(result: &GuessResult, max_guesses: usize) {
    if result.outcome == Outcome::InvalidWord {
        println!(
            "{}\n",
            format!("🤔 {} is not in the dictionary (no guess used)", result.guess).yellow()
        );
        return;
    }

    println!(
        "  {}  {}  {}\n",
        guess_tiles(&result.guess, &result.feedback),
        result.feedback.to_emoji(),
        attempts_bar(result.guesses_remaining, max_guesses).bright_black()
    );
}

/// Print the end-of-game banner with the guess history
pub fn print_game_over(game: &GameSession<'_>) {
    let target = game.reveal().unwrap_or_default();

    println!("\n{}", "═".repeat(60).bright_cyan());
    match game.state() {
        GameState::Won => {
            println!(
                "  {}",
                format!("🎉 Solved in {} of {} guesses!", game.guesses_used(), game.max_guesses())
                    .bright_green()
                    .bold()
            );
        }
        GameState::Lost => {
            println!(
                "  {} {}",
                "❌ Game over! The word was".red().bold(),
                target.bright_yellow().bold()
            );
        }
        GameState::InProgress => {}
    }

    println!("\n  Guess history:");
    for (i, (word, feedback)) in game.history().iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            word.text().bright_white().bold(),
            feedback.to_emoji()
        );
    }
    println!("{}\n", "═".repeat(60).bright_cyan());
}

/// Print the result of a dictionary lookup
pub fn print_check_result(result: &CheckResult) {
    if result.valid {
        let tiers: Vec<String> = result.difficulties.iter().map(ToString::to_string).collect();
        println!(
            "{} {} (tiers: {})",
            "✅".green(),
            result.word.bright_white().bold(),
            tiers.join(", ")
        );
    } else {
        println!(
            "{} {} is not in the dictionary",
            "❌".red(),
            result.word.bright_white().bold()
        );
    }
}

/// Print the feedback for a guess scored against a known target
pub fn print_score(guess: &str, feedback: &Feedback) {
    println!(
        "{}  {}",
        guess_tiles(&guess.trim().to_uppercase(), feedback),
        feedback
    );
    println!(
        "   Exact: {}   Present: {}",
        feedback.count_exact().to_string().green(),
        feedback.count_present().to_string().yellow()
    );
}

/// Print per-tier word counts
pub fn print_tier_summary(summary: &[TierSummary], word_length: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "DICTIONARY TIERS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!(
        "\n   {:<4} {:<10} {:>10} {:>12}",
        "Tier",
        "Difficulty",
        "Words",
        format!("{word_length} letters")
    );

    for row in summary {
        let total = row
            .total_words
            .map_or_else(|| "missing".to_string(), |n| n.to_string());
        let with_length = format!(
            "{:>12}",
            row.with_length.map_or_else(String::new, |n| n.to_string())
        );
        let with_length = if row.with_length == Some(0) {
            with_length.red()
        } else {
            with_length.green()
        };
        println!(
            "   {:<4} {:<10} {:>10} {with_length}",
            row.tier,
            row.difficulty.to_string(),
            total
        );
    }
    println!();
}
