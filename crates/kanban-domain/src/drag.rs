//! Drag lifecycle on top of an external drag-and-drop engine.
//!
//! The engine reports start, end and cancel events. `DragSession` remembers
//! which task was picked up and from which board, and turns the final drop
//! into a [`MoveTask`].

use crate::commands::MoveTask;
use crate::ids::IdGenerator;
use crate::reducer;
use crate::{Board, BoardId, Task};

/// The task currently being dragged, as it looked when the drag started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveDrag {
    pub task: Task,
    pub source_board_id: BoardId,
}

#[derive(Debug, Clone, Default)]
pub struct DragSession {
    active: Option<ActiveDrag>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&ActiveDrag> {
        self.active.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Picks up `task_id`. Returns false when no board holds such a task.
    pub fn start(&mut self, boards: &[Board], task_id: &str) -> bool {
        for board in boards {
            if let Some(task) = board.task(task_id) {
                self.active = Some(ActiveDrag {
                    task: task.clone(),
                    source_board_id: board.id.clone(),
                });
                return true;
            }
        }
        tracing::debug!("Drag started on unknown task {}", task_id);
        self.active = None;
        false
    }

    /// Finishes the drag over the droppable `over` and returns the resulting
    /// collection. The session is cleared in every case.
    pub fn end(&mut self, boards: &[Board], over: Option<&str>, ids: &dyn IdGenerator) -> Vec<Board> {
        let active = self.active.take();
        let (Some(active), Some(over)) = (active, over) else {
            return boards.to_vec();
        };

        match MoveTask::from_over(active.task.id, active.source_board_id, over) {
            Ok(command) => reducer::apply(boards, &command, ids),
            Err(e) => {
                tracing::debug!("Drop ignored: {}", e);
                boards.to_vec()
            }
        }
    }

    pub fn cancel(&mut self) {
        self.active = None;
    }
}
