use kanban_core::{KanbanError, KanbanResult};

use crate::ids::IdGenerator;
use crate::Board;

pub mod board_commands;
pub mod status_commands;
pub mod task_commands;

pub use board_commands::*;
pub use status_commands::*;
pub use task_commands::*;

/// Trait for domain commands that mutate state
/// Commands represent a single user action against the board collection
pub trait Command: Send + Sync {
    /// Execute this command, mutating the domain state
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<()>;

    /// Human-readable description of what this command does
    fn description(&self) -> String;
}

/// Context passed to commands for mutation
pub struct CommandContext<'a> {
    pub boards: &'a mut Vec<Board>,
    pub ids: &'a dyn IdGenerator,
}

impl CommandContext<'_> {
    pub fn board(&self, board_id: &str) -> KanbanResult<&Board> {
        self.boards
            .iter()
            .find(|b| b.id == board_id)
            .ok_or_else(|| KanbanError::not_found("board", board_id))
    }

    pub fn board_mut(&mut self, board_id: &str) -> KanbanResult<&mut Board> {
        self.boards
            .iter_mut()
            .find(|b| b.id == board_id)
            .ok_or_else(|| KanbanError::not_found("board", board_id))
    }

    pub fn board_index(&self, board_id: &str) -> KanbanResult<usize> {
        self.boards
            .iter()
            .position(|b| b.id == board_id)
            .ok_or_else(|| KanbanError::not_found("board", board_id))
    }
}

/// Trims a submitted value and rejects it when nothing is left.
pub(crate) fn non_empty(value: &str, field: &str) -> KanbanResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(KanbanError::Validation(format!("{} must not be empty", field)));
    }
    Ok(trimmed.to_string())
}
