use crate::action::Action;
use crate::commands::MoveTask;
use crate::drag::DragSession;
use crate::ids::{IdGenerator, UuidIdGenerator};
use crate::{reducer, seed, Board, BoardTemplate, Snapshot};

/// Holds the board collection for a session and applies user actions to it.
///
/// Every action produces a whole new collection that replaces the previous
/// one; nothing edits the boards in place.
pub struct BoardStore {
    boards: Vec<Board>,
    drag: DragSession,
    template: BoardTemplate,
    ids: Box<dyn IdGenerator>,
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new(seed::initial_boards())
    }
}

impl BoardStore {
    pub fn new(boards: Vec<Board>) -> Self {
        Self {
            boards,
            drag: DragSession::new(),
            template: BoardTemplate::default(),
            ids: Box::new(UuidIdGenerator),
        }
    }

    pub fn with_template(mut self, template: BoardTemplate) -> Self {
        self.template = template;
        self
    }

    pub fn with_id_generator(mut self, ids: Box<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn board(&self, board_id: &str) -> Option<&Board> {
        self.boards.iter().find(|b| b.id == board_id)
    }

    pub fn drag(&self) -> &DragSession {
        &self.drag
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.boards.clone())
    }

    pub fn into_boards(self) -> Vec<Board> {
        self.boards
    }

    /// Applies one action. Returns whether the collection changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        tracing::debug!(?action, "dispatch");
        let next = match action {
            Action::DragStart { task_id } => {
                self.drag.start(&self.boards, &task_id);
                return false;
            }
            Action::DragCancel => {
                self.drag.cancel();
                return false;
            }
            Action::DragEnd { over } => {
                self.drag
                    .end(&self.boards, over.as_deref(), self.ids.as_ref())
            }
            Action::MoveTask { task_id, over } => self.move_task(&task_id, &over),
            other => match other.into_command(&self.template) {
                Some(command) => reducer::apply(&self.boards, command.as_ref(), self.ids.as_ref()),
                None => return false,
            },
        };
        self.replace(next)
    }

    fn move_task(&self, task_id: &str, over: &str) -> Vec<Board> {
        let Some(source) = self.boards.iter().find(|b| b.task(task_id).is_some()) else {
            tracing::debug!("Move ignored: no board holds task {}", task_id);
            return self.boards.clone();
        };
        match MoveTask::from_over(task_id.to_string(), source.id.clone(), over) {
            Ok(command) => reducer::apply(&self.boards, &command, self.ids.as_ref()),
            Err(e) => {
                tracing::debug!("Move ignored: {}", e);
                self.boards.clone()
            }
        }
    }

    fn replace(&mut self, next: Vec<Board>) -> bool {
        let changed = next != self.boards;
        self.boards = next;
        changed
    }
}
