use uuid::Uuid;

use crate::board::BoardId;

/// Source of identifiers for newly created boards and tasks.
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator {
    fn board_id(&self) -> String;
    fn task_id(&self, board_id: &str) -> String;
}

/// Generates `board-<uuid>` and `task-<board>-<uuid>` ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn board_id(&self) -> BoardId {
        format!("board-{}", Uuid::new_v4().simple())
    }

    fn task_id(&self, board_id: &str) -> String {
        format!("task-{}-{}", board_id, Uuid::new_v4().simple())
    }
}
