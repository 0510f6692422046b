//! Integration tests for toolbelt
//!
//! Drives the tools end to end through scripted console sessions and real
//! files in temporary directories.

use std::fs;
use tempfile::TempDir;

use rand::rngs::StdRng;
use rand::SeedableRng;
use toolbelt::{
    cli::Config,
    console::ScriptedConsole,
    email::{self, TemplateLibrary},
    todo::{self, TaskStore},
    Launcher, Tool,
};

fn scripted(inputs: &[&str]) -> ScriptedConsole {
    ScriptedConsole::new(inputs.iter().copied())
}

fn launcher_in(temp_dir: &TempDir) -> Launcher {
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        format!(
            r#"
[todo]
file = "{}"

[email]
templates_dir = "{}"
output_dir = "{}"

[arcade]
max_dice = 4
roll_delay_ms = 0
"#,
            temp_dir.path().join("tasks.txt").display(),
            temp_dir.path().join("templates").display(),
            temp_dir.path().join("output").display(),
        ),
    )
    .unwrap();

    let config = Config::load(Some(&config_path)).unwrap();
    Launcher::new(config)
}

#[test]
fn test_todo_survives_restart() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("tasks.txt");

    let mut first = scripted(&["2", "water plants", "", "2", "pay rent", "", "7"]);
    todo::run(&mut first, TaskStore::new(&path)).unwrap();

    let mut second = scripted(&["4", "2", "", "3", "1", "", "1", "", "7"]);
    todo::run(&mut second, TaskStore::new(&path)).unwrap();

    assert!(second.contains("Loaded 2 task(s) from file."));
    assert!(second.contains("Marked complete: '✓ pay rent'"));
    assert!(second.contains("Removed: 'water plants'"));
    assert!(second.contains("1 of 1 complete"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "✓ pay rent\n");
}

#[test]
fn test_sample_templates_fill_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let library = TemplateLibrary::new(temp_dir.path().join("templates"), temp_dir.path().join("output"));

    // thankyou_email.txt sorts last; its placeholders in order:
    // future_action, occasion, personal_message, quality, reason, recipient_name, sender_name
    let mut console = scripted(&[
        "5", "",
        "1", "4",
        "working together", "the launch", "", "patience", "your help", "Sam", "Lee",
        "yes", "no", "",
        "6",
    ]);
    email::run(&mut console, library.clone()).unwrap();

    assert!(console.contains("Subject: Thank You - the launch"));
    assert!(console.contains("Dear Sam,"));
    assert!(console.contains("[personal_message]"));

    let saved: Vec<_> = fs::read_dir(library.output_dir())
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(saved.len(), 1);
    let name = saved[0].file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("email_Sam_") && name.ends_with(".txt"));
    assert!(fs::read_to_string(&saved[0]).unwrap().contains("Warm regards,\nLee"));
}

#[test]
fn test_launcher_session_with_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let launcher = launcher_in(&temp_dir);
    assert_eq!(launcher.config().arcade.max_dice, 4);

    let mut rng = StdRng::seed_from_u64(11);
    let mut console = scripted(&[
        "2", "2", "1", "0", "", "4",
        "3", "Weakpass", "n", "quit",
        "5", "1", "5", "4", "no", "", "3",
        "7",
    ]);
    launcher.run(&mut console, &mut rng).unwrap();

    assert!(console.contains("0°C = 32.00°F"));
    assert!(console.contains("Please enter a number between 1 and 4!"));
    assert_eq!(console.count("Die #"), 4);
    assert!(console.contains("Thanks for playing! Come back soon!"));
    assert!(console.contains("Goodbye!"));
    assert_eq!(console.remaining(), 0);
}

#[test]
fn test_run_single_tool() {
    let temp_dir = TempDir::new().unwrap();
    let launcher = launcher_in(&temp_dir);
    let mut rng = StdRng::seed_from_u64(2);

    let mut console = scripted(&["12", "4", "/", "yes", "1", "0", "/", "no"]);
    launcher.run_tool(Tool::Calculator, &mut console, &mut rng).unwrap();

    assert!(console.contains("Result: 3"));
    assert!(console.contains("Error: Cannot divide by 0"));
    assert!(console.contains("Thank you for using the calculator!"));
}

#[test]
fn test_invalid_config_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[arcade]\nmax_dice = 11\n").unwrap();

    assert!(Config::load(Some(&config_path)).is_err());
}
