use super::{non_empty, Command, CommandContext};
use crate::{Board, BoardTemplate, BoardUpdate};
use kanban_core::{KanbanError, KanbanResult};

/// Append a new board built from a template
pub struct AddBoard {
    pub name: Option<String>,
    pub template: BoardTemplate,
}

impl Command for AddBoard {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<()> {
        let name = match &self.name {
            Some(name) => non_empty(name, "board name")?,
            None => self.template.board_name(context.boards.len()),
        };
        let board = Board::new(context.ids.board_id(), name, self.template.statuses.clone());
        context.boards.push(board);
        Ok(())
    }

    fn description(&self) -> String {
        match &self.name {
            Some(name) => format!("Add board '{}'", name),
            None => "Add board".to_string(),
        }
    }
}

/// Update board properties
pub struct UpdateBoard {
    pub board_id: String,
    pub updates: BoardUpdate,
}

impl Command for UpdateBoard {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<()> {
        let mut updates = self.updates.clone();
        if let Some(name) = &updates.name {
            updates.name = Some(non_empty(name, "board name")?);
        }
        context.board_mut(&self.board_id)?.update(updates);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Update board {}", self.board_id)
    }
}

/// Replace a board wholesale, matched by id
pub struct ReplaceBoard {
    pub board: Board,
}

impl Command for ReplaceBoard {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<()> {
        self.board.check_invariants()?;
        let slot = context.board_mut(&self.board.id)?;
        *slot = self.board.clone();
        Ok(())
    }

    fn description(&self) -> String {
        format!("Replace board {}", self.board.id)
    }
}

/// Remove a board together with its tasks
pub struct RemoveBoard {
    pub board_id: String,
}

impl Command for RemoveBoard {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<()> {
        let index = context.board_index(&self.board_id)?;
        // The leading board anchors the workspace and is never removable.
        if index == 0 {
            return Err(KanbanError::Validation(format!(
                "board {} is the first board and cannot be removed",
                self.board_id
            )));
        }
        context.boards.remove(index);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Remove board {}", self.board_id)
    }
}
