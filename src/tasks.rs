//! Flat, in-memory to-do list. Nothing here survives a process restart.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Opaque task identity. Unique within a board for its lifetime.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(pub String);

impl TaskId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskError {
    #[error("task text is empty after trimming")]
    EmptyText,

    #[error("no task with id {0}")]
    UnknownTask(TaskId),
}

/// Ordered task collection. Insertion order is presentation order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskBoard {
    tasks: Vec<Task>,
}

impl TaskBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task. Input is trimmed; whitespace-only text creates
    /// nothing and is reported to the caller.
    pub fn add(&mut self, text: &str) -> Result<&Task, TaskError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TaskError::EmptyText);
        }
        let index = self.tasks.len();
        self.tasks.push(Task {
            id: TaskId::generate(),
            text: text.to_owned(),
            completed: false,
        });
        Ok(&self.tasks[index])
    }

    pub fn toggle(&mut self, id: &TaskId) -> Result<&Task, TaskError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| TaskError::UnknownTask(id.clone()))?;
        task.completed = !task.completed;
        Ok(task)
    }

    pub fn remove(&mut self, id: &TaskId) -> Result<Task, TaskError> {
        let index = self
            .tasks
            .iter()
            .position(|t| &t.id == id)
            .ok_or_else(|| TaskError::UnknownTask(id.clone()))?;
        Ok(self.tasks.remove(index))
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_trims_and_appends() {
        let mut board = TaskBoard::new();
        board.add("  buy milk  ").unwrap();
        board.add("write report").unwrap();

        let texts: Vec<_> = board.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["buy milk", "write report"]);
        assert!(board.tasks().iter().all(|t| !t.completed));
    }

    #[test]
    fn add_rejects_whitespace_only_text() {
        let mut board = TaskBoard::new();
        assert_eq!(board.add("   "), Err(TaskError::EmptyText));
        assert_eq!(board.add(""), Err(TaskError::EmptyText));
        assert!(board.is_empty());
    }

    #[test]
    fn ids_are_unique() {
        let mut board = TaskBoard::new();
        for _ in 0..50 {
            board.add("x").unwrap();
        }
        let mut ids: Vec<_> = board.tasks().iter().map(|t| t.id.clone()).collect();
        ids.sort_by(|a, b| a.0.cmp(&b.0));
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn toggle_flips_completion_both_ways() {
        let mut board = TaskBoard::new();
        let id = board.add("a").unwrap().id.clone();

        assert!(board.toggle(&id).unwrap().completed);
        assert!(!board.toggle(&id).unwrap().completed);
    }

    #[test]
    fn toggle_unknown_id_is_rejected() {
        let mut board = TaskBoard::new();
        let ghost = TaskId::new("nope");
        assert_eq!(board.toggle(&ghost), Err(TaskError::UnknownTask(ghost.clone())));
    }

    #[test]
    fn remove_preserves_order_of_the_rest() {
        let mut board = TaskBoard::new();
        let a = board.add("a").unwrap().id.clone();
        let b = board.add("b").unwrap().id.clone();
        let c = board.add("c").unwrap().id.clone();

        let removed = board.remove(&b).unwrap();
        assert_eq!(removed.text, "b");

        let ids: Vec<_> = board.tasks().iter().map(|t| t.id.clone()).collect();
        assert_eq!(ids, [a, c]);
    }

    #[test]
    fn remove_unknown_id_is_rejected() {
        let mut board = TaskBoard::new();
        board.add("a").unwrap();
        let ghost = TaskId::new("nope");
        assert_eq!(board.remove(&ghost), Err(TaskError::UnknownTask(ghost)));
        assert_eq!(board.tasks().len(), 1);
    }
}
