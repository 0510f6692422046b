//! In-memory task list with 1-based task numbers

use crate::errors::{Result, ToolError};

/// Prefix that marks a task as done
pub const COMPLETE_MARKER: &str = "✓ ";

/// Ordered list of task descriptions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    tasks: Vec<String>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<String>) -> Self {
        TodoList { tasks }
    }

    pub fn tasks(&self) -> &[String] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// `(number, task)` pairs starting at 1
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &str)> {
        self.tasks.iter().enumerate().map(|(i, t)| (i + 1, t.as_str()))
    }

    /// Append a task; returns the stored (trimmed) text, or `None` if blank
    pub fn add(&mut self, description: &str) -> Option<&str> {
        let task = description.trim();
        if task.is_empty() {
            return None;
        }
        self.tasks.push(task.to_string());
        self.tasks.last().map(String::as_str)
    }

    /// Turn a 1-based number into an index
    fn index_of(&self, number: i64) -> Result<usize> {
        if self.tasks.is_empty() {
            return Err(ToolError::EmptyList);
        }
        if number < 1 || number > self.tasks.len() as i64 {
            return Err(ToolError::OutOfRange {
                value: number,
                min: 1,
                max: self.tasks.len() as i64,
            });
        }
        Ok((number - 1) as usize)
    }

    /// Remove and return task `number`
    pub fn remove(&mut self, number: i64) -> Result<String> {
        let index = self.index_of(number)?;
        Ok(self.tasks.remove(index))
    }

    /// Prefix task `number` with the completion marker; returns the new text
    pub fn mark_complete(&mut self, number: i64) -> Result<&str> {
        let index = self.index_of(number)?;
        let task = &mut self.tasks[index];
        if is_complete(task) {
            return Err(ToolError::AlreadyComplete);
        }
        task.insert_str(0, COMPLETE_MARKER);
        Ok(task.as_str())
    }

    /// Case-insensitive substring search, keeping the original numbers
    pub fn search(&self, keyword: &str) -> Vec<(usize, &str)> {
        let needle = keyword.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.numbered()
            .filter(|(_, task)| task.to_lowercase().contains(&needle))
            .collect()
    }

    /// Remove everything; returns how many tasks were dropped
    pub fn clear(&mut self) -> usize {
        let count = self.tasks.len();
        self.tasks.clear();
        count
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| is_complete(t)).count()
    }
}

pub fn is_complete(task: &str) -> bool {
    task.starts_with(COMPLETE_MARKER.trim_end())
}
