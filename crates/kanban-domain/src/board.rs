use kanban_core::config::DEFAULT_BOARD_NAME_PREFIX;
use kanban_core::{AppConfig, KanbanError, KanbanResult};
use serde::{Deserialize, Serialize};

use crate::drop_target::{is_addressable, DropTarget};
use crate::status::{Status, StatusId};
use crate::task::Task;

pub type BoardId = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub name: String,
    #[serde(default)]
    pub statuses: Vec<Status>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardUpdate {
    #[serde(default)]
    pub name: Option<String>,
}

/// Shape of a freshly added board: how it is named and which columns it gets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardTemplate {
    pub name_prefix: String,
    pub statuses: Vec<Status>,
}

impl Default for BoardTemplate {
    fn default() -> Self {
        Self {
            name_prefix: DEFAULT_BOARD_NAME_PREFIX.to_string(),
            statuses: Status::defaults(),
        }
    }
}

impl BoardTemplate {
    pub fn from_config(config: &AppConfig) -> Self {
        let statuses = config
            .configured_default_statuses()
            .map(|names| Status::from_names(names.as_slice()))
            .filter(|statuses| !statuses.is_empty())
            .unwrap_or_else(Status::defaults);
        Self {
            name_prefix: config.effective_board_name_prefix().to_string(),
            statuses,
        }
    }

    /// Name for the board that will become number `count + 1`.
    pub fn board_name(&self, count: usize) -> String {
        format!("{} {}", self.name_prefix, count + 1)
    }
}

impl Board {
    pub fn new(id: BoardId, name: String, statuses: Vec<Status>) -> Self {
        Self {
            id,
            name,
            statuses,
            tasks: Vec::new(),
        }
    }

    /// Board with the standard four columns.
    pub fn with_default_statuses(id: BoardId, name: String) -> Self {
        Self::new(id, name, Status::defaults())
    }

    pub fn update(&mut self, updates: BoardUpdate) {
        if let Some(name) = updates.name {
            self.name = name;
        }
    }

    pub fn status(&self, status_id: &str) -> Option<&Status> {
        self.statuses.iter().find(|s| s.id == status_id)
    }

    pub fn has_status(&self, status_id: &str) -> bool {
        self.status(status_id).is_some()
    }

    pub fn first_status_id(&self) -> Option<&StatusId> {
        self.statuses.first().map(|s| &s.id)
    }

    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    pub fn task_mut(&mut self, task_id: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == task_id)
    }

    /// Tasks shown in a column, in insertion order.
    pub fn tasks_in_status(&self, status_id: &str) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.status == status_id).collect()
    }

    /// Droppable id of a column on this board.
    pub fn column_id(&self, status_id: &str) -> String {
        DropTarget::new(self.id.clone(), status_id.to_string()).to_string()
    }

    /// Verifies that every task points at a status of this board and carries
    /// this board's id, and that status ids are unique.
    pub fn check_invariants(&self) -> KanbanResult<()> {
        if !is_addressable(&self.id) {
            return Err(KanbanError::Validation(format!(
                "board id {} must not contain ':'",
                self.id
            )));
        }
        for (i, status) in self.statuses.iter().enumerate() {
            if !is_addressable(&status.id) {
                return Err(KanbanError::Validation(format!(
                    "board {} has status '{}' containing ':'",
                    self.id, status.id
                )));
            }
            if self.statuses[..i].iter().any(|s| s.id == status.id) {
                return Err(KanbanError::Validation(format!(
                    "board {} has duplicate status '{}'",
                    self.id, status.id
                )));
            }
        }
        for task in &self.tasks {
            if task.board_id != self.id {
                return Err(KanbanError::Validation(format!(
                    "task {} claims board {} but lives in {}",
                    task.id, task.board_id, self.id
                )));
            }
            if !self.has_status(&task.status) {
                return Err(KanbanError::Validation(format!(
                    "task {} references unknown status '{}' on board {}",
                    task.id, task.status, self.id
                )));
            }
        }
        Ok(())
    }
}

/// Checks board-level invariants plus board id uniqueness across the collection.
pub fn check_collection(boards: &[Board]) -> KanbanResult<()> {
    for (i, board) in boards.iter().enumerate() {
        if boards[..i].iter().any(|b| b.id == board.id) {
            return Err(KanbanError::Validation(format!(
                "duplicate board id {}",
                board.id
            )));
        }
        board.check_invariants()?;
    }
    Ok(())
}
