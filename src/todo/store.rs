//! Flat-file persistence for the to-do list
//!
//! One task per line. Loading trims every line and drops blank ones; saving
//! rewrites the whole file.

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::errors::Result;

/// Task file on disk
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TaskStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read every non-empty line; a missing file is an empty list
    pub fn load(&self) -> Result<Vec<String>> {
        if !self.exists() {
            tracing::info!(path = %self.path.display(), "no task file yet");
            return Ok(Vec::new());
        }

        let file = fs::File::open(&self.path)?;
        let mut tasks = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            let task = line.trim();
            if !task.is_empty() {
                tasks.push(task.to_string());
            }
        }

        tracing::info!(path = %self.path.display(), count = tasks.len(), "loaded tasks");
        Ok(tasks)
    }

    /// Overwrite the file with `tasks`, one per line
    pub fn save(&self, tasks: &[String]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = fs::File::create(&self.path)?;
        for task in tasks {
            writeln!(file, "{}", task)?;
        }
        file.flush()?;

        tracing::debug!(path = %self.path.display(), count = tasks.len(), "saved tasks");
        Ok(())
    }
}
