//! Text-file-backed to-do list
//!
//! The list is loaded once at start and written back in full after every
//! change, so the file on disk always matches what the menu shows.

pub mod list;
pub mod store;

pub use list::{is_complete, TodoList, COMPLETE_MARKER};
pub use store::TaskStore;

use crate::console::{confirm, parse_number, pause, Console, Screen};
use crate::errors::{Result, ToolError};

const MENU: [&str; 7] = [
    "View All Tasks",
    "Add New Task",
    "Remove Task",
    "Mark Task as Complete",
    "Search Tasks",
    "Clear All Tasks",
    "Exit",
];

/// To-do session: the list plus where it lives
pub struct TodoApp {
    list: TodoList,
    store: TaskStore,
}

impl TodoApp {
    /// Load tasks from `store`; read failures are reported and start an empty list
    pub fn open(console: &mut dyn Console, store: TaskStore) -> Self {
        let list = if !store.exists() {
            console.info("📝 No existing tasks file found. Starting fresh!");
            TodoList::new()
        } else {
            match store.load() {
                Ok(tasks) => {
                    console.success(&format!("Loaded {} task(s) from file.", tasks.len()));
                    TodoList::from_tasks(tasks)
                }
                Err(err) => {
                    tracing::error!(path = %store.path().display(), %err, "failed to load tasks");
                    console.error(&format!("Error loading tasks: {}", err));
                    TodoList::new()
                }
            }
        };

        TodoApp { list, store }
    }

    pub fn list(&self) -> &TodoList {
        &self.list
    }

    /// Write the list; failures are reported, never propagated
    fn save(&self, console: &mut dyn Console) -> bool {
        match self.store.save(self.list.tasks()) {
            Ok(()) => {
                console.success("Tasks saved successfully!");
                true
            }
            Err(err) => {
                tracing::error!(path = %self.store.path().display(), %err, "failed to save tasks");
                console.error(&format!("Error saving tasks: {}", err));
                false
            }
        }
    }

    fn display_tasks(&self, console: &mut dyn Console) {
        console.banner("           YOUR TO-DO LIST");
        if self.list.is_empty() {
            console.say("\n  📭 No tasks yet! Your list is empty.");
            console.say("     Add a task to get started!");
        } else {
            console.blank();
            for (number, task) in self.list.numbered() {
                console.numbered(number, task);
            }
            console.say(&format!(
                "\n  {} of {} complete",
                self.list.completed_count(),
                self.list.len()
            ));
        }
        console.rule();
    }

    fn add_task(&mut self, console: &mut dyn Console) -> Result<()> {
        console.section("Add New Task");
        let description = console.read_line("Enter task description: ")?;

        match self.list.add(&description) {
            Some(task) => {
                console.success(&format!("Added: '{}'", task));
                self.save(console);
            }
            None => console.error("Task cannot be empty!"),
        }
        Ok(())
    }

    /// Show the list and read a task number for `action`
    fn pick_task(&self, console: &mut dyn Console, action: &str) -> Result<Option<i64>> {
        self.display_tasks(console);
        console.section(action);
        let answer = console.read_line(&format!("Enter task number to {}: ", action.to_lowercase()))?;

        match parse_number::<i64>(&answer) {
            Ok(number) => Ok(Some(number)),
            Err(_) => {
                console.error("Please enter a valid number!");
                Ok(None)
            }
        }
    }

    fn report(&self, console: &mut dyn Console, err: ToolError) {
        match err {
            ToolError::OutOfRange { max, .. } => {
                console.error(&format!("Invalid number! Please choose 1-{}", max))
            }
            ToolError::AlreadyComplete => console.warning("Task is already marked as complete!"),
            other => console.error(&other.to_string()),
        }
    }

    fn remove_task(&mut self, console: &mut dyn Console) -> Result<()> {
        if self.list.is_empty() {
            console.error("No tasks to remove!");
            return Ok(());
        }

        let Some(number) = self.pick_task(console, "Remove")? else {
            return Ok(());
        };

        match self.list.remove(number) {
            Ok(removed) => {
                console.success(&format!("Removed: '{}'", removed));
                self.save(console);
            }
            Err(err) => self.report(console, err),
        }
        Ok(())
    }

    fn mark_complete(&mut self, console: &mut dyn Console) -> Result<()> {
        if self.list.is_empty() {
            console.error("No tasks to mark as complete!");
            return Ok(());
        }

        let Some(number) = self.pick_task(console, "Mark complete")? else {
            return Ok(());
        };

        match self.list.mark_complete(number) {
            Ok(task) => {
                let message = format!("Marked complete: '{}'", task);
                console.success(&message);
                self.save(console);
            }
            Err(err) => self.report(console, err),
        }
        Ok(())
    }

    fn search_tasks(&self, console: &mut dyn Console) -> Result<()> {
        if self.list.is_empty() {
            console.error("No tasks to search!");
            return Ok(());
        }

        console.section("Search Tasks");
        let keyword = console.read_line("Enter search keyword: ")?;
        let keyword = keyword.trim();
        if keyword.is_empty() {
            console.error("Please enter a keyword!");
            return Ok(());
        }

        let matches = self.list.search(keyword);
        if matches.is_empty() {
            console.error(&format!("No tasks found containing '{}'", keyword.to_lowercase()));
            return Ok(());
        }

        console.success(&format!("Found {} matching task(s):", matches.len()));
        console.thin_rule();
        for (number, task) in matches {
            console.numbered(number, task);
        }
        Ok(())
    }

    fn clear_all(&mut self, console: &mut dyn Console) -> Result<()> {
        if self.list.is_empty() {
            console.error("No tasks to clear!");
            return Ok(());
        }

        console.section("Clear All Tasks");
        let prompt = format!(
            "Are you sure you want to delete all {} task(s)? (yes/no): ",
            self.list.len()
        );
        if confirm(console, &prompt)? {
            let dropped = self.list.clear();
            tracing::info!(dropped, "cleared task list");
            self.save(console);
            console.success("All tasks cleared!");
        } else {
            console.warning("Clear cancelled.");
        }
        Ok(())
    }

    /// Menu loop. Closing the input stream saves and exits like option 7.
    pub fn run(&mut self, console: &mut dyn Console) -> Result<()> {
        match self.menu_loop(console) {
            Err(ToolError::EndOfInput) => {
                self.save(console);
                Ok(())
            }
            other => other,
        }
    }

    fn menu_loop(&mut self, console: &mut dyn Console) -> Result<()> {
        loop {
            console.menu("              MAIN MENU", &MENU);
            let choice = console.read_line("\nEnter your choice (1-7): ")?;

            match choice.trim() {
                "1" => self.display_tasks(console),
                "2" => self.add_task(console)?,
                "3" => self.remove_task(console)?,
                "4" => self.mark_complete(console)?,
                "5" => self.search_tasks(console)?,
                "6" => self.clear_all(console)?,
                "7" => {
                    console.say("\n✓ Saving your tasks...");
                    self.save(console);
                    console.say("👋 Thank you for using To-Do List!");
                    console.say("   Your tasks have been saved.\n");
                    return Ok(());
                }
                _ => console.error("Invalid choice! Please enter 1-7."),
            }

            pause(console, "\nPress Enter to continue...")?;
        }
    }
}

/// Open the list stored in `store` and run the menu
pub fn run(console: &mut dyn Console, store: TaskStore) -> Result<()> {
    console.banner("       WELCOME TO YOUR TO-DO LIST!");
    let mut app = TodoApp::open(console, store);
    app.run(console)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_open_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut console = ScriptedConsole::default();
        let app = TodoApp::open(&mut console, TaskStore::new(temp_dir.path().join("tasks.txt")));

        assert!(app.list().is_empty());
        assert!(console.contains("Starting fresh"));
    }

    #[test]
    fn test_add_then_exit_persists() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tasks.txt");
        let mut console = ScriptedConsole::new(["2", "  buy milk ", "", "2", "", "", "7"]);

        run(&mut console, TaskStore::new(&path)).unwrap();

        assert!(console.contains("Added: 'buy milk'"));
        assert!(console.contains("Task cannot be empty!"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "buy milk\n");
    }

    #[test]
    fn test_remove_validation() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tasks.txt");
        fs::write(&path, "one\ntwo\n").unwrap();

        let mut console = ScriptedConsole::new([
            "3", "abc", "",
            "3", "5", "",
            "3", "1", "",
            "7",
        ]);
        run(&mut console, TaskStore::new(&path)).unwrap();

        assert!(console.contains("Loaded 2 task(s) from file."));
        assert!(console.contains("Please enter a valid number!"));
        assert!(console.contains("Invalid number! Please choose 1-2"));
        assert!(console.contains("Removed: 'one'"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "two\n");
    }

    #[test]
    fn test_mark_complete_twice_warns() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tasks.txt");
        fs::write(&path, "water plants\n").unwrap();

        let mut console = ScriptedConsole::new(["4", "1", "", "4", "1", "", "7"]);
        run(&mut console, TaskStore::new(&path)).unwrap();

        assert!(console.contains("Marked complete: '✓ water plants'"));
        assert!(console.contains("Task is already marked as complete!"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "✓ water plants\n");
    }

    #[test]
    fn test_search_and_clear_cancelled() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tasks.txt");
        fs::write(&path, "Buy milk\nwalk dog\n").unwrap();

        let mut console = ScriptedConsole::new([
            "5", "MILK", "",
            "5", "cat", "",
            "6", "no", "",
            "7",
        ]);
        run(&mut console, TaskStore::new(&path)).unwrap();

        assert!(console.contains("Found 1 matching task(s):"));
        assert!(console.contains("  1. Buy milk"));
        assert!(console.contains("No tasks found containing 'cat'"));
        assert!(console.contains("Clear cancelled."));
        assert_eq!(fs::read_to_string(&path).unwrap(), "Buy milk\nwalk dog\n");
    }

    #[test]
    fn test_clear_confirmed() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tasks.txt");
        fs::write(&path, "a\nb\n").unwrap();

        let mut console = ScriptedConsole::new(["6", "Y", "", "6", "", "7"]);
        run(&mut console, TaskStore::new(&path)).unwrap();

        assert!(console.contains("delete all 2 task(s)"));
        assert!(console.contains("All tasks cleared!"));
        assert!(console.contains("No tasks to clear!"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_end_of_input_saves() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tasks.txt");

        let mut console = ScriptedConsole::new(["2", "late task"]);
        run(&mut console, TaskStore::new(&path)).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "late task\n");
    }

    #[test]
    fn test_invalid_menu_choice() {
        let temp_dir = TempDir::new().unwrap();
        let mut console = ScriptedConsole::new(["8", "", "7"]);
        run(&mut console, TaskStore::new(temp_dir.path().join("tasks.txt"))).unwrap();
        assert!(console.contains("Invalid choice! Please enter 1-7."));
    }
}
