use super::{non_empty, Command, CommandContext};
use crate::{DropTarget, Task, TaskUpdate};
use kanban_core::{KanbanError, KanbanResult};

/// Create a new task at the bottom of a column
pub struct AddTask {
    pub board_id: String,
    pub status_id: String,
    pub title: String,
}

impl Command for AddTask {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<()> {
        let title = non_empty(&self.title, "task title")?;
        let task_id = context.ids.task_id(&self.board_id);
        let board = context.board_mut(&self.board_id)?;
        if !board.has_status(&self.status_id) {
            return Err(KanbanError::not_found("status", &self.status_id));
        }
        board.tasks.push(Task::new(
            task_id,
            self.board_id.clone(),
            self.status_id.clone(),
            title,
        ));
        Ok(())
    }

    fn description(&self) -> String {
        format!("Add task: '{}'", self.title)
    }
}

/// Update task properties (title, description, status)
pub struct UpdateTask {
    pub board_id: String,
    pub task_id: String,
    pub updates: TaskUpdate,
}

impl Command for UpdateTask {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<()> {
        let board = context.board_mut(&self.board_id)?;
        let mut updates = self.updates.clone();

        if let Some(title) = &updates.title {
            updates.title = Some(non_empty(title, "task title")?);
        }
        if let Some(description) = &updates.description {
            updates.description = Some(description.trim().to_string());
        }
        if let Some(status) = &updates.status {
            if !board.has_status(status) {
                return Err(KanbanError::not_found("status", status));
            }
        }

        let task = board
            .task_mut(&self.task_id)
            .ok_or_else(|| KanbanError::not_found("task", &self.task_id))?;
        task.update(updates);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Update task {}", self.task_id)
    }
}

/// Move a task to the column a drop landed on, possibly on another board
pub struct MoveTask {
    pub task_id: String,
    pub source_board_id: String,
    pub target: DropTarget,
}

impl MoveTask {
    /// Builds the move from the raw droppable id reported by the drag layer.
    pub fn from_over(task_id: String, source_board_id: String, over: &str) -> KanbanResult<Self> {
        Ok(Self {
            task_id,
            source_board_id,
            target: DropTarget::parse(over)?,
        })
    }
}

impl Command for MoveTask {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<()> {
        let source = context.board_index(&self.source_board_id)?;
        let destination = context.board_index(&self.target.board_id)?;
        let status_id = &self.target.status_id;

        if !context.boards[destination].has_status(status_id) {
            return Err(KanbanError::not_found("status", status_id));
        }

        if source == destination {
            let task = context.boards[source]
                .task_mut(&self.task_id)
                .ok_or_else(|| KanbanError::not_found("task", &self.task_id))?;
            task.update_status(status_id.clone());
            return Ok(());
        }

        let position = context.boards[source]
            .tasks
            .iter()
            .position(|t| t.id == self.task_id)
            .ok_or_else(|| KanbanError::not_found("task", &self.task_id))?;
        let task = context.boards[source].tasks.remove(position);
        let moved = task.relocated(self.target.board_id.clone(), status_id.clone());
        context.boards[destination].tasks.push(moved);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Move task {} to {}", self.task_id, self.target)
    }
}
