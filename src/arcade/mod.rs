//! Game arcade: dice roller and number guessing

pub mod dice;
pub mod guessing;

pub use dice::DiceSettings;
pub use guessing::{Difficulty, GameStats, GuessOutcome, GuessingGame};

use rand::Rng;

use crate::console::{pause, Console, Screen};
use crate::errors::{Result, ToolError};

const MENU: [&str; 3] = ["🎲 Dice Roller", "🎯 Number Guessing Game", "🚪 Exit"];

/// Arcade menu. A closed input stream leaves the arcade quietly.
pub fn run<R: Rng>(console: &mut dyn Console, rng: &mut R, settings: DiceSettings) -> Result<()> {
    console.say(&format!("\n{}", "🎮".repeat(25)));
    console.say("     WELCOME TO THE GAME ARCADE!");
    console.say(&"🎮".repeat(25));

    match menu_loop(console, rng, settings) {
        Err(ToolError::EndOfInput) => Ok(()),
        other => other,
    }
}

fn menu_loop<R: Rng>(console: &mut dyn Console, rng: &mut R, settings: DiceSettings) -> Result<()> {
    loop {
        console.menu("           🎮 GAME ARCADE 🎮", &MENU);
        let choice = console.read_line("\nChoose a game (1-3): ")?;

        match choice.trim() {
            "1" => dice::play(console, rng, settings)?,
            "2" => {
                guessing::play(console, rng)?;
            }
            "3" => {
                console.say(&format!("\n{}", "🌟".repeat(25)));
                console.say("   Thanks for playing! Come back soon!");
                console.say(&format!("{}\n", "🌟".repeat(25)));
                return Ok(());
            }
            _ => console.error("Invalid choice! Please enter 1-3."),
        }

        pause(console, "\nPress Enter to return to main menu...")?;
    }
}
