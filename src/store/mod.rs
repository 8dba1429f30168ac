mod file;
mod models;

pub use file::TaskFile;
pub use models::*;

/// Ordered task collection. Insertion order is display order, and every
/// positional operation takes the 1-based index the user sees on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        TaskStore { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Add an incomplete task at the end.
    pub fn append(&mut self, description: impl Into<String>) {
        self.tasks.push(Task::new(description));
    }

    /// Remove the task at `index` (1-based) and return it. Out-of-range
    /// indices, including 0, leave the store untouched.
    pub fn remove_at(&mut self, index: usize) -> Option<Task> {
        let slot = Self::slot(index, self.tasks.len())?;
        Some(self.tasks.remove(slot))
    }

    /// Flip the completed flag of the task at `index` (1-based). Returns
    /// whether a task was found.
    pub fn toggle_at(&mut self, index: usize) -> bool {
        let Some(slot) = Self::slot(index, self.tasks.len()) else {
            return false;
        };
        let task = &mut self.tasks[slot];
        task.completed = !task.completed;
        true
    }

    /// Longest description in code points, 0 for an empty store.
    pub fn max_description_length(&self) -> usize {
        self.tasks
            .iter()
            .map(Task::description_len)
            .max()
            .unwrap_or(0)
    }

    fn slot(index: usize, len: usize) -> Option<usize> {
        index.checked_sub(1).filter(|&slot| slot < len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_of(descriptions: &[&str]) -> TaskStore {
        let mut store = TaskStore::new();
        for d in descriptions {
            store.append(*d);
        }
        store
    }

    fn descriptions(store: &TaskStore) -> Vec<&str> {
        store.tasks().iter().map(|t| t.description.as_str()).collect()
    }

    #[test]
    fn append_keeps_insertion_order() {
        let store = store_of(&["one", "two", "three"]);
        assert_eq!(descriptions(&store), ["one", "two", "three"]);
        assert!(store.tasks().iter().all(|t| !t.completed));
    }

    #[test]
    fn append_allows_duplicates() {
        let store = store_of(&["same", "same"]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.tasks()[0], store.tasks()[1]);
    }

    #[test]
    fn max_description_length_empty_is_zero() {
        assert_eq!(TaskStore::new().max_description_length(), 0);
    }

    #[test]
    fn max_description_length_tracks_longest() {
        let mut store = TaskStore::new();
        store.append("ab");
        assert_eq!(store.max_description_length(), 2);
        store.append("abcdef");
        assert_eq!(store.max_description_length(), 6);
        store.append("abc");
        assert_eq!(store.max_description_length(), 6);
        store.remove_at(2);
        assert_eq!(store.max_description_length(), 3);
    }

    #[test]
    fn max_description_length_counts_code_points_not_bytes() {
        let store = store_of(&["ñandú", "abcd"]);
        // "ñandú" is 7 bytes but 5 code points
        assert_eq!(store.max_description_length(), 5);
    }

    #[test]
    fn remove_at_returns_removed_task() {
        let mut store = store_of(&["a", "b", "c"]);
        let removed = store.remove_at(2).unwrap();
        assert_eq!(removed.description, "b");
        assert_eq!(descriptions(&store), ["a", "c"]);
    }

    #[test]
    fn remove_at_same_index_twice_removes_shifted_entry() {
        let mut store = store_of(&["a", "b", "c"]);
        assert_eq!(store.remove_at(1).unwrap().description, "a");
        assert_eq!(store.remove_at(1).unwrap().description, "b");
        assert_eq!(descriptions(&store), ["c"]);
    }

    #[test]
    fn remove_at_past_new_length_is_noop() {
        let mut store = store_of(&["a", "b"]);
        assert!(store.remove_at(2).is_some());
        assert!(store.remove_at(2).is_none());
        assert_eq!(descriptions(&store), ["a"]);
    }

    #[test]
    fn remove_at_out_of_range_is_noop() {
        let mut store = store_of(&["a", "b"]);
        assert!(store.remove_at(0).is_none());
        assert!(store.remove_at(3).is_none());
        assert_eq!(descriptions(&store), ["a", "b"]);

        let mut empty = TaskStore::new();
        assert!(empty.remove_at(1).is_none());
    }

    #[test]
    fn toggle_at_twice_restores_state() {
        let mut store = store_of(&["a", "b"]);
        assert!(store.toggle_at(2));
        assert!(store.tasks()[1].completed);
        assert!(!store.tasks()[0].completed);
        assert!(store.toggle_at(2));
        assert!(!store.tasks()[1].completed);
    }

    #[test]
    fn toggle_keeps_order() {
        let mut store = store_of(&["a", "b", "c"]);
        store.toggle_at(1);
        store.toggle_at(3);
        assert_eq!(descriptions(&store), ["a", "b", "c"]);
    }

    #[test]
    fn toggle_out_of_range_leaves_nine_tasks_unchanged() {
        let mut store = TaskStore::new();
        for i in 1..=9 {
            store.append(format!("task {i}"));
        }
        let before = store.clone();
        assert!(!store.toggle_at(0));
        assert!(!store.toggle_at(10));
        assert_eq!(store, before);
    }
}
