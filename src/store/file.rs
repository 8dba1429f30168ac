use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use super::{Task, TaskStore};

/// JSON snapshot of the task list on disk.
///
/// The whole list is rewritten on every save. The document is an array of
/// `{"desc": .., "completed": ..}` objects indented by four spaces.
#[derive(Debug, Clone)]
pub struct TaskFile {
    path: PathBuf,
}

impl TaskFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TaskFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the snapshot. A missing file is an empty list, not an error.
    pub fn load(&self) -> Result<TaskStore> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(TaskStore::new()),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("failed to read {}", self.path.display()));
            }
        };
        // `null` shows up in files written by older builds for an empty list
        let tasks: Option<Vec<Task>> = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse {}", self.path.display()))?;
        Ok(TaskStore::from_tasks(tasks.unwrap_or_default()))
    }

    /// Load the snapshot, falling back to an empty store when it can't be
    /// read or parsed. The second value describes the failure so it can be
    /// shown to the user before anything overwrites the file.
    pub fn load_or_empty(&self) -> (TaskStore, Option<String>) {
        match self.load() {
            Ok(store) => {
                tracing::info!(
                    "loaded {} tasks from {}",
                    store.len(),
                    self.path.display()
                );
                (store, None)
            }
            Err(e) => {
                tracing::error!("error loading tasks: {e:#}");
                (TaskStore::new(), Some(format!("error loading tasks: {e:#}")))
            }
        }
    }

    /// Overwrite the snapshot with the full contents of `store`.
    pub fn save(&self, store: &TaskStore) -> Result<()> {
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        store
            .tasks()
            .serialize(&mut ser)
            .context("failed to encode tasks")?;
        buf.push(b'\n');

        fs::write(&self.path, &buf)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        tracing::debug!("saved {} tasks to {}", store.len(), self.path.display());
        Ok(())
    }
}
