use super::{non_empty, Command, CommandContext};
use crate::drop_target::is_addressable;
use crate::status::slugify;
use crate::Status;
use kanban_core::{KanbanError, KanbanResult};

/// Append a status column to a board; its id is the slug of the name as
/// submitted, while the stored name is trimmed
pub struct AddStatus {
    pub board_id: String,
    pub name: String,
}

impl Command for AddStatus {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<()> {
        let name = non_empty(&self.name, "status name")?;
        let id = slugify(&self.name);
        if !is_addressable(&id) {
            return Err(KanbanError::Validation(format!(
                "status id '{}' must not contain ':'",
                id
            )));
        }
        let board = context.board_mut(&self.board_id)?;
        if board.has_status(&id) {
            return Err(KanbanError::Validation(format!(
                "status '{}' already exists on board {}",
                id, self.board_id
            )));
        }
        board.statuses.push(Status::new(id, name));
        Ok(())
    }

    fn description(&self) -> String {
        format!("Add status '{}'", self.name)
    }
}

/// Rename a status column; the id is kept
pub struct EditStatus {
    pub board_id: String,
    pub status_id: String,
    pub name: String,
}

impl Command for EditStatus {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<()> {
        let name = non_empty(&self.name, "status name")?;
        let board = context.board_mut(&self.board_id)?;
        let status = board
            .statuses
            .iter_mut()
            .find(|s| s.id == self.status_id)
            .ok_or_else(|| KanbanError::not_found("status", &self.status_id))?;
        status.rename(name);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Rename status {} to '{}'", self.status_id, self.name)
    }
}

/// Delete a status column, moving its tasks to the first remaining column
pub struct DeleteStatus {
    pub board_id: String,
    pub status_id: String,
}

impl Command for DeleteStatus {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<()> {
        let board = context.board_mut(&self.board_id)?;
        let status = board
            .status(&self.status_id)
            .ok_or_else(|| KanbanError::not_found("status", &self.status_id))?;
        if status.is_protected() {
            return Err(KanbanError::Validation(format!(
                "status '{}' cannot be deleted",
                self.status_id
            )));
        }

        board.statuses.retain(|s| s.id != self.status_id);
        if board.statuses.is_empty() {
            board.statuses.push(Status::fallback());
        }

        let fallback = board.statuses[0].id.clone();
        let mut moved = 0;
        for task in board.tasks.iter_mut().filter(|t| t.status == self.status_id) {
            task.update_status(fallback.clone());
            moved += 1;
        }
        tracing::debug!(
            board = %self.board_id,
            status = %self.status_id,
            moved,
            "reassigned tasks to '{}'",
            fallback
        );
        Ok(())
    }

    fn description(&self) -> String {
        format!("Delete status {}", self.status_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{run, two_boards};
    use crate::Task;

    #[test]
    fn test_add_status_slugs_name() {
        let mut boards = two_boards();
        run(
            &mut boards,
            &AddStatus {
                board_id: "b1".to_string(),
                name: "Ready For  QA".to_string(),
            },
        )
        .unwrap();
        run(
            &mut boards,
            &AddStatus {
                board_id: "b1".to_string(),
                name: " QA".to_string(),
            },
        )
        .unwrap();

        let statuses = &boards[0].statuses;
        assert_eq!(statuses[statuses.len() - 2].id, "ready-for-qa");
        assert_eq!(statuses[statuses.len() - 2].name, "Ready For  QA");
        assert_eq!(statuses[statuses.len() - 1].id, "-qa");
        assert_eq!(statuses[statuses.len() - 1].name, "QA");
    }

    #[test]
    fn test_add_status_rejects_colon_in_slug() {
        let mut boards = two_boards();
        let result = run(
            &mut boards,
            &AddStatus {
                board_id: "b1".to_string(),
                name: "Phase: 2".to_string(),
            },
        );
        assert!(matches!(result, Err(KanbanError::Validation(_))));
        assert!(boards[0].statuses.iter().all(|s| !s.id.contains(':')));
        assert_eq!(boards[0].statuses.len(), 3);
    }

    #[test]
    fn test_add_status_rejects_blank_and_duplicates() {
        let mut boards = two_boards();
        let blank = run(
            &mut boards,
            &AddStatus {
                board_id: "b1".to_string(),
                name: "  ".to_string(),
            },
        );
        assert!(matches!(blank, Err(KanbanError::Validation(_))));

        let duplicate = run(
            &mut boards,
            &AddStatus {
                board_id: "b1".to_string(),
                name: "Doing".to_string(),
            },
        );
        assert!(matches!(duplicate, Err(KanbanError::Validation(_))));
        assert_eq!(boards[0].statuses.len(), 3);
    }

    #[test]
    fn test_edit_status_keeps_id() {
        let mut boards = two_boards();
        run(
            &mut boards,
            &EditStatus {
                board_id: "b1".to_string(),
                status_id: "doing".to_string(),
                name: "In Flight".to_string(),
            },
        )
        .unwrap();

        let status = boards[0].status("doing").unwrap();
        assert_eq!(status.name, "In Flight");
        assert!(boards[0].status("in-flight").is_none());
    }

    #[test]
    fn test_edit_unknown_status() {
        let mut boards = two_boards();
        let result = run(
            &mut boards,
            &EditStatus {
                board_id: "b1".to_string(),
                status_id: "nope".to_string(),
                name: "Name".to_string(),
            },
        );
        assert!(matches!(result, Err(KanbanError::NotFound(_))));
    }

    #[test]
    fn test_delete_status_reassigns_to_first_remaining() {
        let mut boards = two_boards();
        run(
            &mut boards,
            &DeleteStatus {
                board_id: "b1".to_string(),
                status_id: "doing".to_string(),
            },
        )
        .unwrap();

        let board = &boards[0];
        assert!(!board.has_status("doing"));
        assert_eq!(board.task("t2").unwrap().status, "todo");
        assert_eq!(board.task("t3").unwrap().status, "todo");
        assert_eq!(board.task("t1").unwrap().status, "todo");
        assert!(board.check_invariants().is_ok());
    }

    #[test]
    fn test_delete_leading_status_uses_next_one() {
        let mut boards = two_boards();
        boards[0].statuses.rotate_left(1);
        assert_eq!(boards[0].statuses[0].id, "doing");

        run(
            &mut boards,
            &DeleteStatus {
                board_id: "b1".to_string(),
                status_id: "doing".to_string(),
            },
        )
        .unwrap();

        assert_eq!(boards[0].task("t2").unwrap().status, "done");
        assert!(boards[0].check_invariants().is_ok());
    }

    #[test]
    fn test_delete_last_status_restores_fallback() {
        let mut boards = two_boards();
        let board = &mut boards[1];
        board.statuses.retain(|s| s.id == "review");
        board
            .tasks
            .push(Task::new("t9".into(), "b2".into(), "review".into(), "Nine".into()));

        run(
            &mut boards,
            &DeleteStatus {
                board_id: "b2".to_string(),
                status_id: "review".to_string(),
            },
        )
        .unwrap();

        let board = &boards[1];
        assert_eq!(board.statuses, vec![Status::fallback()]);
        assert_eq!(board.task("t9").unwrap().status, "todo");
        assert!(board.check_invariants().is_ok());
    }

    #[test]
    fn test_todo_cannot_be_deleted() {
        let mut boards = two_boards();
        let result = run(
            &mut boards,
            &DeleteStatus {
                board_id: "b1".to_string(),
                status_id: "todo".to_string(),
            },
        );
        assert!(matches!(result, Err(KanbanError::Validation(_))));
        assert!(boards[0].has_status("todo"));
    }
}
