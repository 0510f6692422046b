//! Number guessing game
//!
//! [`GuessingGame`] holds the rules (attempt counting, hints, win/loss);
//! [`play`] wraps it in the interactive loop with per-session statistics.

use rand::Rng;
use std::collections::BTreeSet;

use crate::console::{confirm, parse_number, Console, Screen};
use crate::errors::Result;

/// Game difficulty: range upper bound and attempt budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    pub fn max_number(&self) -> u32 {
        match self {
            Difficulty::Easy => 50,
            Difficulty::Medium => 100,
            Difficulty::Hard => 200,
            Difficulty::Expert => 500,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 7,
            Difficulty::Hard => 5,
            Difficulty::Expert => 7,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }

    /// Menu choice "1".."4"
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Difficulty::Easy),
            "2" => Some(Difficulty::Medium),
            "3" => Some(Difficulty::Hard),
            "4" => Some(Difficulty::Expert),
            _ => None,
        }
    }

    pub fn menu_label(&self) -> String {
        format!(
            "{} (1-{}, {} attempts)",
            self.name(),
            self.max_number(),
            self.max_attempts()
        )
    }
}

/// How close a wrong guess was
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Temperature {
    VeryHot,
    Hot,
    Warm,
    Cold,
    Freezing,
}

impl Temperature {
    pub fn from_distance(distance: u32) -> Self {
        match distance {
            0..=5 => Temperature::VeryHot,
            6..=10 => Temperature::Hot,
            11..=20 => Temperature::Warm,
            21..=50 => Temperature::Cold,
            _ => Temperature::Freezing,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Temperature::VeryHot => "🔥 VERY HOT! You're super close!",
            Temperature::Hot => "🌡️  Hot! Getting closer!",
            Temperature::Warm => "😊 Warm! You're in the right area!",
            Temperature::Cold => "❄️  Cold! Not very close...",
            Temperature::Freezing => "🧊 Freezing! Far away!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    pub fn of(n: u32) -> Self {
        if n % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Parity::Even => "💡 Hint: The number is EVEN",
            Parity::Odd => "💡 Hint: The number is ODD",
        }
    }
}

/// Feedback attached to a wrong guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    pub temperature: Temperature,
    /// Only given near the end of the attempt budget
    pub parity: Option<Parity>,
}

/// Result of submitting one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Outside 1..=max; does not use an attempt
    OutOfRange,
    /// Already guessed; does not use an attempt
    Repeated,
    Correct { attempts: u32 },
    TooLow(Hint),
    TooHigh(Hint),
    /// The round is already finished
    GameOver,
}

/// One round of the guessing game
#[derive(Debug, Clone)]
pub struct GuessingGame {
    difficulty: Difficulty,
    secret: u32,
    attempts: u32,
    guessed: BTreeSet<u32>,
    won: bool,
}

impl GuessingGame {
    /// Round with a known secret
    pub fn new(difficulty: Difficulty, secret: u32) -> Self {
        GuessingGame {
            difficulty,
            secret,
            attempts: 0,
            guessed: BTreeSet::new(),
            won: false,
        }
    }

    /// Round with a secret drawn uniformly from 1..=max
    pub fn random<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Self {
        let secret = rng.gen_range(1..=difficulty.max_number());
        Self::new(difficulty, secret)
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn secret(&self) -> u32 {
        self.secret
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn remaining(&self) -> u32 {
        self.difficulty.max_attempts().saturating_sub(self.attempts)
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn is_over(&self) -> bool {
        self.won || self.remaining() == 0
    }

    /// Earlier guesses in ascending order
    pub fn previous_guesses(&self) -> Vec<u32> {
        self.guessed.iter().copied().collect()
    }

    pub fn guess(&mut self, guess: i64) -> GuessOutcome {
        if self.is_over() {
            return GuessOutcome::GameOver;
        }

        let max = self.difficulty.max_number();
        let guess = match u32::try_from(guess) {
            Ok(g) if (1..=max).contains(&g) => g,
            _ => return GuessOutcome::OutOfRange,
        };

        if !self.guessed.insert(guess) {
            return GuessOutcome::Repeated;
        }
        self.attempts += 1;

        if guess == self.secret {
            self.won = true;
            return GuessOutcome::Correct {
                attempts: self.attempts,
            };
        }

        let hint = self.hint_for(guess);
        if guess < self.secret {
            GuessOutcome::TooLow(hint)
        } else {
            GuessOutcome::TooHigh(hint)
        }
    }

    fn hint_for(&self, guess: u32) -> Hint {
        let parity_from = self.difficulty.max_attempts().saturating_sub(2);
        Hint {
            temperature: Temperature::from_distance(self.secret.abs_diff(guess)),
            parity: (self.attempts >= parity_from).then(|| Parity::of(self.secret)),
        }
    }
}

/// Rounds played and won during one arcade visit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameStats {
    pub played: u32,
    pub won: u32,
}

impl GameStats {
    pub fn record(&mut self, won: bool) {
        self.played += 1;
        if won {
            self.won += 1;
        }
    }

    /// Percentage of rounds won
    pub fn win_rate(&self) -> f64 {
        if self.played == 0 {
            0.0
        } else {
            f64::from(self.won) / f64::from(self.played) * 100.0
        }
    }
}

fn choose_difficulty(console: &mut dyn Console) -> Result<Difficulty> {
    console.section("Choose Difficulty");
    for (i, difficulty) in Difficulty::ALL.iter().enumerate() {
        console.say(&format!("{}. {}", i + 1, difficulty.menu_label()));
    }

    loop {
        let choice = console.read_line("\nSelect difficulty (1-4): ")?;
        match Difficulty::from_choice(&choice) {
            Some(difficulty) => return Ok(difficulty),
            None => console.error("Please choose 1-4!"),
        }
    }
}

fn show_hint(console: &mut dyn Console, hint: &Hint) {
    console.say(hint.temperature.message());
    if let Some(parity) = hint.parity {
        console.say(parity.message());
    }
}

fn show_remaining(console: &mut dyn Console, game: &GuessingGame) {
    if game.remaining() > 0 {
        console.say(&format!("\n💪 You have {} attempt(s) left!", game.remaining()));
    }
}

/// Play one round to completion; returns whether it was won
pub fn play_round(console: &mut dyn Console, game: &mut GuessingGame) -> Result<bool> {
    let difficulty = game.difficulty();
    let max = difficulty.max_number();
    let max_attempts = difficulty.max_attempts();

    console.say(&format!("\n🎮 Starting {} Mode!", difficulty.name()));
    console.say(&format!("I'm thinking of a number between 1 and {}", max));
    console.say(&format!("You have {} attempts. Good luck!\n", max_attempts));

    while !game.is_over() {
        console.say(&format!("\n--- Attempt {}/{} ---", game.attempts() + 1, max_attempts));
        let previous = game.previous_guesses();
        if !previous.is_empty() {
            console.say(&format!("Previous guesses: {:?}", previous));
        }

        let answer = console.read_line("Enter your guess: ")?;
        let guess = match parse_number::<i64>(&answer) {
            Ok(n) => n,
            Err(_) => {
                console.error("Please enter a valid number!");
                continue;
            }
        };

        match game.guess(guess) {
            GuessOutcome::OutOfRange => console.error(&format!("Please guess between 1 and {}!", max)),
            GuessOutcome::Repeated => console.warning("You already guessed that number!"),
            GuessOutcome::Correct { attempts } => {
                console.say(&format!("\n{}", "🎉".repeat(20)));
                console.success("🏆 CONGRATULATIONS! You guessed it! 🏆");
                console.say(&format!("The number was {}!", game.secret()));
                console.say(&format!("You won in {} attempt(s)!", attempts));
                console.say(&"🎉".repeat(20));
            }
            GuessOutcome::TooLow(hint) => {
                console.say(&format!("📈 Too low! The number is HIGHER than {}", guess));
                show_hint(console, &hint);
                show_remaining(console, game);
            }
            GuessOutcome::TooHigh(hint) => {
                console.say(&format!("📉 Too high! The number is LOWER than {}", guess));
                show_hint(console, &hint);
                show_remaining(console, game);
            }
            GuessOutcome::GameOver => break,
        }
    }

    if !game.is_won() {
        console.say(&format!("\n{}", "💔".repeat(20)));
        console.error("😢 Game Over! You ran out of attempts!");
        console.say(&format!("The number was: {}", game.secret()));
        console.say(&"💔".repeat(20));
    }

    tracing::info!(
        difficulty = difficulty.name(),
        won = game.is_won(),
        attempts = game.attempts(),
        "guessing round finished"
    );
    Ok(game.is_won())
}

/// Guessing game loop with statistics across rounds
pub fn play<R: Rng>(console: &mut dyn Console, rng: &mut R) -> Result<GameStats> {
    console.banner("        🎯 NUMBER GUESSING GAME 🎯");
    console.say("\nI'm thinking of a number. Can you guess it?");

    let mut stats = GameStats::default();
    loop {
        let difficulty = choose_difficulty(console)?;
        let mut game = GuessingGame::random(difficulty, rng);
        let won = play_round(console, &mut game)?;
        stats.record(won);

        console.say("\n📊 Your Statistics:");
        console.say(&format!("   Games Played: {}", stats.played));
        console.say(&format!("   Games Won: {}", stats.won));
        console.say(&format!("   Win Rate: {:.1}%", stats.win_rate()));

        if !confirm(console, "\nPlay again? (yes/no): ")? {
            console.say("\n👋 Thanks for playing Number Guessing Game!");
            return Ok(stats);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_difficulty_table() {
        let table: Vec<(u32, u32)> = Difficulty::ALL
            .iter()
            .map(|d| (d.max_number(), d.max_attempts()))
            .collect();
        assert_eq!(table, vec![(50, 10), (100, 7), (200, 5), (500, 7)]);
        assert_eq!(Difficulty::from_choice(" 3 "), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_choice("5"), None);
    }

    #[test]
    fn test_temperature_bands() {
        assert_eq!(Temperature::from_distance(5), Temperature::VeryHot);
        assert_eq!(Temperature::from_distance(6), Temperature::Hot);
        assert_eq!(Temperature::from_distance(10), Temperature::Hot);
        assert_eq!(Temperature::from_distance(20), Temperature::Warm);
        assert_eq!(Temperature::from_distance(50), Temperature::Cold);
        assert_eq!(Temperature::from_distance(51), Temperature::Freezing);
    }

    #[test]
    fn test_invalid_guesses_do_not_count() {
        let mut game = GuessingGame::new(Difficulty::Easy, 25);
        assert_eq!(game.guess(0), GuessOutcome::OutOfRange);
        assert_eq!(game.guess(51), GuessOutcome::OutOfRange);
        assert_eq!(game.guess(-3), GuessOutcome::OutOfRange);
        assert_eq!(game.attempts(), 0);

        assert!(matches!(game.guess(10), GuessOutcome::TooLow(_)));
        assert_eq!(game.guess(10), GuessOutcome::Repeated);
        assert_eq!(game.attempts(), 1);
        assert_eq!(game.remaining(), 9);
    }

    #[test]
    fn test_hints() {
        let mut game = GuessingGame::new(Difficulty::Hard, 100);

        let GuessOutcome::TooHigh(hint) = game.guess(104) else {
            panic!("expected too high");
        };
        assert_eq!(hint.temperature, Temperature::VeryHot);
        assert_eq!(hint.parity, None);

        let GuessOutcome::TooLow(hint) = game.guess(1) else {
            panic!("expected too low");
        };
        assert_eq!(hint.temperature, Temperature::Freezing);
        assert_eq!(hint.parity, None);

        // third attempt of five: parity kicks in at max_attempts - 2
        let GuessOutcome::TooLow(hint) = game.guess(85) else {
            panic!("expected too low");
        };
        assert_eq!(hint.temperature, Temperature::Warm);
        assert_eq!(hint.parity, Some(Parity::Even));
    }

    #[test]
    fn test_win() {
        let mut game = GuessingGame::new(Difficulty::Medium, 42);
        game.guess(50);
        assert_eq!(game.guess(42), GuessOutcome::Correct { attempts: 2 });
        assert!(game.is_won());
        assert!(game.is_over());
        assert_eq!(game.guess(1), GuessOutcome::GameOver);
    }

    #[test]
    fn test_loss_after_budget() {
        let mut game = GuessingGame::new(Difficulty::Hard, 200);
        for guess in 1..=5 {
            assert!(matches!(game.guess(guess), GuessOutcome::TooLow(_)));
        }
        assert!(game.is_over());
        assert!(!game.is_won());
        assert_eq!(game.guess(200), GuessOutcome::GameOver);
        assert_eq!(game.previous_guesses(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_random_secret_in_range() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..200 {
            let game = GuessingGame::random(Difficulty::Easy, &mut rng);
            assert!((1..=50).contains(&game.secret()));
        }
    }

    #[test]
    fn test_stats() {
        let mut stats = GameStats::default();
        assert_eq!(stats.win_rate(), 0.0);
        stats.record(true);
        stats.record(false);
        stats.record(false);
        stats.record(true);
        assert_eq!(stats, GameStats { played: 4, won: 2 });
        assert_eq!(stats.win_rate(), 50.0);
    }

    #[test]
    fn test_round_transcript() {
        let mut game = GuessingGame::new(Difficulty::Easy, 30);
        let mut console = ScriptedConsole::new(["x", "99", "20", "20", "30"]);

        assert!(play_round(&mut console, &mut game).unwrap());
        assert!(console.contains("Please enter a valid number!"));
        assert!(console.contains("Please guess between 1 and 50!"));
        assert!(console.contains("Too low! The number is HIGHER than 20"));
        assert!(console.contains("You already guessed that number!"));
        assert!(console.contains("Previous guesses: [20]"));
        assert!(console.contains("You won in 2 attempt(s)!"));
        assert!(console.contains("--- Attempt 2/10 ---"));
    }

    #[test]
    fn test_remaining_only_after_counted_guesses() {
        let mut game = GuessingGame::new(Difficulty::Easy, 30);
        let mut console = ScriptedConsole::new(["20", "20", "0", "abc", "30"]);

        assert!(play_round(&mut console, &mut game).unwrap());
        assert_eq!(console.count("attempt(s) left!"), 1);
        assert!(console.contains("You have 9 attempt(s) left!"));
    }

    #[test]
    fn test_round_lost() {
        let mut game = GuessingGame::new(Difficulty::Hard, 7);
        let mut console = ScriptedConsole::new(["100", "150", "200", "50", "8"]);

        assert!(!play_round(&mut console, &mut game).unwrap());
        assert!(console.contains("Game Over! You ran out of attempts!"));
        assert!(console.contains("The number was: 7"));
        assert!(console.contains("Hint: The number is ODD"));
    }

    #[test]
    fn test_session_stats() {
        let mut rng = StdRng::seed_from_u64(5);
        let secret = GuessingGame::random(Difficulty::Hard, &mut StdRng::seed_from_u64(5)).secret();

        let mut console = ScriptedConsole::new(["9".to_string(), "3".to_string(), secret.to_string(), "no".to_string()]);
        let stats = play(&mut console, &mut rng).unwrap();

        assert_eq!(stats, GameStats { played: 1, won: 1 });
        assert!(console.contains("Please choose 1-4!"));
        assert!(console.contains("Win Rate: 100.0%"));
        assert!(console.contains("Thanks for playing Number Guessing Game!"));
    }
}
