use serde::{Deserialize, Serialize};

use crate::board::BoardId;
use crate::status::StatusId;

pub type TaskId = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: StatusId,
    pub board_id: BoardId,
}

/// Partial update applied by the task editor. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<StatusId>,
}

impl Task {
    pub fn new(id: TaskId, board_id: BoardId, status: StatusId, title: String) -> Self {
        Self {
            id,
            title,
            description: String::new(),
            status,
            board_id,
        }
    }

    pub fn update_status(&mut self, status: StatusId) {
        self.status = status;
    }

    /// Copy of this task relocated to another board and column.
    pub fn relocated(&self, board_id: BoardId, status: StatusId) -> Self {
        Self {
            board_id,
            status,
            ..self.clone()
        }
    }

    /// Applies an already validated update.
    pub fn update(&mut self, updates: TaskUpdate) {
        if let Some(title) = updates.title {
            self.title = title;
        }
        if let Some(description) = updates.description {
            self.description = description;
        }
        if let Some(status) = updates.status {
            self.status = status;
        }
    }
}
