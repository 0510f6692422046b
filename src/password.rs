//! Password strength checker
//!
//! Four character-class checks feed a 0-100 score which maps to a rating.
//! Passwords are read through `Console::read_secret` and never logged.

use colored::{Color, Colorize};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::console::{confirm, Console, Screen};
use crate::errors::Result;

/// Characters that count as "special"
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?/~`";

/// Default minimum length
pub const DEFAULT_MIN_LENGTH: usize = 8;

const LENGTH_POINTS: u32 = 20;
const UPPERCASE_POINTS: u32 = 25;
const DIGIT_POINTS: u32 = 30;
const SPECIAL_POINTS: u32 = 25;

/// Outcome of a single check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub passed: bool,
    pub message: String,
}

impl CheckResult {
    fn new(passed: bool, message: impl Into<String>) -> Self {
        CheckResult {
            passed,
            message: message.into(),
        }
    }
}

pub fn check_length(password: &str, min_length: usize) -> CheckResult {
    let length = password.chars().count();
    if length >= min_length {
        CheckResult::new(true, format!("✓ Length: {} characters (Good!)", length))
    } else {
        CheckResult::new(
            false,
            format!("✗ Length: {} characters (Need at least {})", length, min_length),
        )
    }
}

pub fn check_uppercase(password: &str) -> CheckResult {
    if password.chars().any(char::is_uppercase) {
        CheckResult::new(true, "✓ Contains uppercase letters")
    } else {
        CheckResult::new(false, "✗ Missing uppercase letters (A-Z)")
    }
}

pub fn check_digits(password: &str) -> CheckResult {
    if password.chars().any(char::is_numeric) {
        CheckResult::new(true, "✓ Contains numbers")
    } else {
        CheckResult::new(false, "✗ Missing numbers (0-9)")
    }
}

pub fn check_special_chars(password: &str) -> CheckResult {
    if password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
        CheckResult::new(true, "✓ Contains special characters")
    } else {
        CheckResult::new(false, "✗ Missing special characters (!@#$%^&* etc.)")
    }
}

/// Overall strength rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rating {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl Rating {
    pub fn from_score(score: u32) -> Self {
        match score {
            90.. => Rating::VeryStrong,
            70..=89 => Rating::Strong,
            50..=69 => Rating::Moderate,
            30..=49 => Rating::Weak,
            _ => Rating::VeryWeak,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rating::VeryStrong => "💪 VERY STRONG",
            Rating::Strong => "✓ STRONG",
            Rating::Moderate => "⚠ MODERATE",
            Rating::Weak => "⚠ WEAK",
            Rating::VeryWeak => "✗ VERY WEAK",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Rating::VeryStrong | Rating::Strong => Color::Green,
            Rating::Moderate => Color::Yellow,
            Rating::Weak => Color::TrueColor { r: 255, g: 165, b: 0 },
            Rating::VeryWeak => Color::Red,
        }
    }
}

/// Full analysis of one password
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub length: usize,
    pub score: u32,
    pub rating: Rating,
    pub length_check: CheckResult,
    pub uppercase_check: CheckResult,
    pub digit_check: CheckResult,
    pub special_check: CheckResult,
}

impl Analysis {
    /// Checks in display order
    pub fn checks(&self) -> [&CheckResult; 4] {
        [
            &self.length_check,
            &self.uppercase_check,
            &self.digit_check,
            &self.special_check,
        ]
    }

    /// Improvement tips; empty for very strong passwords
    pub fn suggestions(&self, min_length: usize) -> Vec<String> {
        let mut tips = Vec::new();
        if self.score >= 90 {
            return tips;
        }

        if !self.length_check.passed {
            tips.push(format!("Make it at least {} characters long", min_length));
        }
        if !self.uppercase_check.passed {
            tips.push("Add an uppercase letter".to_string());
        }
        if !self.digit_check.passed {
            tips.push("Add a number".to_string());
        }
        if !self.special_check.passed {
            tips.push("Add a special character such as ! or #".to_string());
        }

        if self.score < 50 {
            tips.push("Use at least 12 characters".to_string());
            tips.push("Mix uppercase and lowercase letters".to_string());
            tips.push("Add numbers and special characters".to_string());
        }
        tips
    }
}

/// Run all checks and compute the score
pub fn analyze(password: &str, min_length: usize) -> Analysis {
    let length_check = check_length(password, min_length);
    let uppercase_check = check_uppercase(password);
    let digit_check = check_digits(password);
    let special_check = check_special_chars(password);

    let mut score = 0;
    if length_check.passed {
        score += LENGTH_POINTS;
    }
    if uppercase_check.passed {
        score += UPPERCASE_POINTS;
    }
    if digit_check.passed {
        score += DIGIT_POINTS;
    }
    if special_check.passed {
        score += SPECIAL_POINTS;
    }

    Analysis {
        length: password.chars().count(),
        score,
        rating: Rating::from_score(score),
        length_check,
        uppercase_check,
        digit_check,
        special_check,
    }
}

static UPPERCASE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").expect("valid pattern"));
static LOWERCASE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z]").expect("valid pattern"));
static DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").expect("valid pattern"));
static SPECIAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[!@#$%^&*()_+\-=\[\]{}|;:,.<>?/~`]").expect("valid pattern")
});

/// Pattern-based view of the same password, including lowercase
pub fn regex_analysis(password: &str, min_length: usize) -> Vec<(&'static str, bool)> {
    vec![
        ("length", password.chars().count() >= min_length),
        ("uppercase", UPPERCASE.is_match(password)),
        ("lowercase", LOWERCASE.is_match(password)),
        ("digits", DIGIT.is_match(password)),
        ("special", SPECIAL.is_match(password)),
    ]
}

fn display_results(console: &mut dyn Console, analysis: &Analysis, min_length: usize) {
    console.banner("       PASSWORD STRENGTH ANALYSIS");
    console.say(&format!(
        "\nPassword: {} ({} characters)",
        "*".repeat(analysis.length),
        analysis.length
    ));
    console.say(&format!("\nScore: {}/100", analysis.score));
    console.say(&format!(
        "Rating: {}",
        analysis.rating.label().color(analysis.rating.color()).bold()
    ));

    console.say("\nDETAILED FEEDBACK:");
    console.thin_rule();
    for check in analysis.checks() {
        if check.passed {
            console.say(&format!("{}", check.message.green()));
        } else {
            console.say(&format!("{}", check.message.red()));
        }
    }

    let tips = analysis.suggestions(min_length);
    if !tips.is_empty() {
        console.say("\n💡 SUGGESTIONS FOR IMPROVEMENT:");
        console.thin_rule();
        for tip in &tips {
            console.bullet(tip);
        }
    }
}

fn display_regex_analysis(console: &mut dyn Console, password: &str, min_length: usize) {
    console.say("\n📊 REGEX METHOD RESULTS:");
    console.thin_rule();
    for (check, result) in regex_analysis(password, min_length) {
        let status = if result { "✓" } else { "✗" };
        console.say(&format!("{} {}: {}", status, check, result));
    }
}

/// Interactive checker session
pub fn run(console: &mut dyn Console, min_length: usize) -> Result<()> {
    console.banner("      PASSWORD STRENGTH CHECKER");
    console.say("\nThis tool evaluates your password security.");
    console.say("Note: Your password is NOT stored or transmitted.");

    loop {
        console.say(&format!("\n{}", "-".repeat(50)));
        let password = console.read_secret("\nEnter a password to check (or 'quit' to exit): ")?;

        if password.trim().eq_ignore_ascii_case("quit") {
            console.say("\n👋 Thank you for using Password Checker!");
            return Ok(());
        }

        let analysis = analyze(&password, min_length);
        tracing::debug!(score = analysis.score, rating = ?analysis.rating, "password analyzed");
        display_results(console, &analysis, min_length);

        if confirm(console, "\nShow regex analysis? (y/n): ")? {
            display_regex_analysis(console, &password, min_length);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;

    #[test]
    fn test_check_length() {
        assert!(check_length("abcdefgh", 8).passed);
        let short = check_length("abc", 8);
        assert!(!short.passed);
        assert!(short.message.contains("Need at least 8"));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        assert!(!check_length("ééééé", 8).passed);
        assert_eq!(analyze("ééé", 8).length, 3);
    }

    #[test]
    fn test_character_classes() {
        assert!(check_uppercase("abcD").passed);
        assert!(!check_uppercase("abcd").passed);
        assert!(check_digits("abc1").passed);
        assert!(!check_digits("abc").passed);
        assert!(check_special_chars("a~b").passed);
        assert!(!check_special_chars("a b").passed);
    }

    #[test]
    fn test_score_weights() {
        assert_eq!(analyze("", 8).score, 0);
        assert_eq!(analyze("abcdefgh", 8).score, 20);
        assert_eq!(analyze("A", 8).score, 25);
        assert_eq!(analyze("1", 8).score, 30);
        assert_eq!(analyze("!", 8).score, 25);
        assert_eq!(analyze("Pass@123", 8).score, 100);
    }

    #[test]
    fn test_rating_boundaries() {
        assert_eq!(Rating::from_score(100), Rating::VeryStrong);
        assert_eq!(Rating::from_score(90), Rating::VeryStrong);
        assert_eq!(Rating::from_score(89), Rating::Strong);
        assert_eq!(Rating::from_score(70), Rating::Strong);
        assert_eq!(Rating::from_score(69), Rating::Moderate);
        assert_eq!(Rating::from_score(50), Rating::Moderate);
        assert_eq!(Rating::from_score(49), Rating::Weak);
        assert_eq!(Rating::from_score(30), Rating::Weak);
        assert_eq!(Rating::from_score(29), Rating::VeryWeak);
        assert_eq!(Rating::from_score(0), Rating::VeryWeak);
    }

    #[test]
    fn test_suggestions() {
        assert!(analyze("Pass@123", 8).suggestions(8).is_empty());

        // 75: missing only the special character
        let strong = analyze("Password123", 8).suggestions(8);
        assert_eq!(strong, vec!["Add a special character such as ! or #".to_string()]);

        let weak = analyze("abc", 8).suggestions(8);
        assert!(weak.contains(&"Use at least 12 characters".to_string()));
        assert!(weak.contains(&"Make it at least 8 characters long".to_string()));
    }

    #[test]
    fn test_regex_analysis() {
        let results = regex_analysis("Pass@123", 8);
        assert!(results.iter().all(|(_, ok)| *ok));

        let results = regex_analysis("PASS", 8);
        assert_eq!(
            results,
            vec![
                ("length", false),
                ("uppercase", true),
                ("lowercase", false),
                ("digits", false),
                ("special", false),
            ]
        );
    }

    #[test]
    fn test_session_masks_password() {
        let mut console = ScriptedConsole::new(["Secret#1x", "y", "QUIT"]);
        run(&mut console, 8).unwrap();

        assert!(!console.contains("Secret#1x"));
        assert!(console.contains("Password: ********* (9 characters)"));
        assert!(console.contains("Score: 100/100"));
        assert!(console.contains("VERY STRONG"));
        assert!(console.contains("✓ lowercase: true"));
        assert!(console.contains("Thank you for using Password Checker!"));
    }

    #[test]
    fn test_session_weak_password() {
        let mut console = ScriptedConsole::new(["abc", "n", "quit"]);
        run(&mut console, 8).unwrap();

        assert!(console.contains("Score: 0/100"));
        assert!(console.contains("VERY WEAK"));
        assert!(console.contains("SUGGESTIONS FOR IMPROVEMENT"));
        assert!(!console.contains("REGEX METHOD RESULTS"));
    }
}
