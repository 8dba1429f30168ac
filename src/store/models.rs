use serde::{Deserialize, Serialize};

/// A single to-do entry. Tasks carry no id; a task is addressed by its
/// position in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "desc")]
    pub description: String,
    pub completed: bool,
}

impl Task {
    pub fn new(description: impl Into<String>) -> Self {
        Task {
            description: description.into(),
            completed: false,
        }
    }

    /// Length of the description in code points, which is what the table
    /// layout is measured in.
    pub fn description_len(&self) -> usize {
        self.description.chars().count()
    }

    pub fn status_cell(&self) -> &'static str {
        if self.completed { " X " } else { "   " }
    }
}
