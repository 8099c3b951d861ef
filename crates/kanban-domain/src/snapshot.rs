//! Serializable capture of the whole board collection.
//!
//! Used to start a session from a file instead of the seed and to print the
//! final state. Nothing ever writes it back.

use crate::board::check_collection;
use crate::Board;
use kanban_core::KanbanResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Snapshot {
    #[serde(default)]
    pub boards: Vec<Board>,
}

impl Snapshot {
    pub fn new(boards: Vec<Board>) -> Self {
        Self { boards }
    }

    /// Parses a snapshot and verifies every board invariant.
    pub fn from_json(json: &str) -> KanbanResult<Self> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        check_collection(&snapshot.boards)?;
        Ok(snapshot)
    }

    pub fn to_json_pretty(&self) -> KanbanResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn task_count(&self) -> usize {
        self.boards.iter().map(|b| b.tasks.len()).sum()
    }
}
