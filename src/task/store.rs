//! Ordered task store
//!
//! Insertion order is display and persistence order. Mutations are
//! index-based; indices come from whatever view the caller rendered, so an
//! out-of-range index is reported as a typed error rather than a panic.

use super::error::TaskError;
use super::model::Task;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Add a record at the end of the list. Empty text is permitted here;
    /// rejecting it is a shell concern.
    pub fn append(&mut self, done: bool, text: impl Into<String>) {
        self.tasks.push(Task::new(done, text));
    }

    pub fn push(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Flip the completion flag of the record at `index`.
    pub fn toggle(&mut self, index: usize) -> Result<(), TaskError> {
        let len = self.tasks.len();
        let task = self
            .tasks
            .get_mut(index)
            .ok_or(TaskError::IndexOutOfRange { index, len })?;
        task.done = !task.done;
        Ok(())
    }

    /// Replace the text of the record at `index`.
    pub fn set_text(&mut self, index: usize, text: impl Into<String>) -> Result<(), TaskError> {
        let len = self.tasks.len();
        let task = self
            .tasks
            .get_mut(index)
            .ok_or(TaskError::IndexOutOfRange { index, len })?;
        task.text = text.into();
        Ok(())
    }

    /// Move the record at `from` so it ends up at position `to`, keeping
    /// the relative order of everything else.
    pub fn move_task(&mut self, from: usize, to: usize) -> Result<(), TaskError> {
        let len = self.tasks.len();
        if from >= len {
            return Err(TaskError::IndexOutOfRange { index: from, len });
        }
        if to >= len {
            return Err(TaskError::IndexOutOfRange { index: to, len });
        }

        let task = self.tasks.remove(from);
        self.tasks.insert(to, task);
        Ok(())
    }
}
