//! Dice roller

use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::time::Duration;

use crate::console::{confirm, parse_number, Console, Screen};
use crate::errors::Result;

/// Up to this many dice are drawn as art; more are listed as numbers
pub const ART_THRESHOLD: usize = 3;

pub fn roll_single_die<R: Rng>(rng: &mut R) -> u8 {
    rng.gen_range(1..=6)
}

pub fn roll_multiple_dice<R: Rng>(rng: &mut R, count: usize) -> Vec<u8> {
    (0..count).map(|_| roll_single_die(rng)).collect()
}

/// Five-line drawing of one face
pub fn die_face(value: u8) -> [&'static str; 5] {
    const TOP: &str = "┌─────────┐";
    const BOTTOM: &str = "└─────────┘";
    const EMPTY: &str = "│         │";
    const CENTER: &str = "│    ●    │";
    const LEFT: &str = "│  ●      │";
    const RIGHT: &str = "│      ●  │";
    const BOTH: &str = "│  ●   ●  │";

    match value {
        1 => [TOP, EMPTY, CENTER, EMPTY, BOTTOM],
        2 => [TOP, LEFT, EMPTY, RIGHT, BOTTOM],
        3 => [TOP, LEFT, CENTER, RIGHT, BOTTOM],
        4 => [TOP, BOTH, EMPTY, BOTH, BOTTOM],
        5 => [TOP, BOTH, CENTER, BOTH, BOTTOM],
        _ => [TOP, BOTH, BOTH, BOTH, BOTTOM],
    }
}

/// Total, average and any special message for a roll
#[derive(Debug, Clone, PartialEq)]
pub struct RollSummary {
    pub total: u32,
    pub average: f64,
    pub special: Option<String>,
}

pub fn summarize(rolls: &[u8]) -> RollSummary {
    let total: u32 = rolls.iter().map(|&r| u32::from(r)).sum();
    let average = if rolls.is_empty() {
        0.0
    } else {
        f64::from(total) / rolls.len() as f64
    };

    let special = match rolls {
        [first, rest @ ..] if rest.iter().all(|r| r == first) => {
            Some(match first {
                6 => "🎉 WOW! ALL SIXES! You're incredibly lucky!".to_string(),
                1 => "😅 Oh no! All ones... Better luck next time!".to_string(),
                n => format!("🌟 Amazing! All dice show {}!", n),
            })
        }
        _ => None,
    };

    RollSummary {
        total,
        average,
        special,
    }
}

fn dramatic_pause(delay_ms: u64) {
    if delay_ms == 0 {
        return;
    }
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Rolling...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    std::thread::sleep(Duration::from_millis(delay_ms));
    spinner.finish_and_clear();
}

/// Settings for a dice session
#[derive(Debug, Clone, Copy)]
pub struct DiceSettings {
    pub max_dice: usize,
    pub roll_delay_ms: u64,
}

/// Dice roller loop: ask how many, roll, show, ask to go again
pub fn play<R: Rng>(
    console: &mut dyn Console,
    rng: &mut R,
    settings: DiceSettings,
) -> Result<()> {
    console.banner("           🎲 DICE ROLLER GAME 🎲");

    loop {
        console.section("Roll Dice");
        let answer = console.read_line(&format!(
            "How many dice do you want to roll? (1-{}): ",
            settings.max_dice
        ))?;

        let count = match parse_number::<i64>(&answer) {
            Ok(n) if n >= 1 && (n as usize) <= settings.max_dice => n as usize,
            Ok(_) => {
                console.error(&format!(
                    "Please enter a number between 1 and {}!",
                    settings.max_dice
                ));
                continue;
            }
            Err(_) => {
                console.error("Please enter a valid number!");
                continue;
            }
        };

        console.say(&format!("\n🎲 Rolling {} dice...", count));
        dramatic_pause(settings.roll_delay_ms);

        let rolls = roll_multiple_dice(rng, count);
        let summary = summarize(&rolls);
        tracing::debug!(?rolls, total = summary.total, "dice rolled");

        let rule = "─".repeat(50);
        console.say(&format!("\n{}", rule));
        console.say("RESULTS:");
        console.say(&rule);

        for (i, roll) in rolls.iter().enumerate() {
            if count <= ART_THRESHOLD {
                console.say(&format!("\nDie #{}:", i + 1));
                for line in die_face(*roll) {
                    console.say(line);
                }
            } else {
                console.say(&format!("Die #{}: {}", i + 1, roll));
            }
        }

        console.say(&format!("\n{}", rule));
        console.say(&format!("🎯 TOTAL: {}", summary.total));
        console.say(&format!("📊 Average: {:.2}", summary.average));
        console.say(&rule);

        if let Some(message) = &summary.special {
            console.success(message);
        }

        if !confirm(console, "\nRoll again? (yes/no): ")? {
            console.say("\n👋 Thanks for playing Dice Roller!");
            return Ok(());
        }
    }
}
