//! Pure state transitions over the board collection.
//!
//! A command never touches the caller's collection: it runs against a copy,
//! and the copy is handed back only when the command succeeds. Callers
//! replace their state wholesale with the returned collection.

use kanban_core::KanbanResult;

use crate::commands::{Command, CommandContext};
use crate::ids::IdGenerator;
use crate::Board;

/// Applies `command` and returns the resulting collection.
///
/// Rejections (unknown ids, blank submissions, malformed drop targets) leave
/// the collection unchanged and are only logged.
pub fn apply(boards: &[Board], command: &dyn Command, ids: &dyn IdGenerator) -> Vec<Board> {
    match try_apply(boards, command, ids) {
        Ok(next) => next,
        Err(e) if e.is_rejection() => {
            tracing::debug!("Ignored '{}': {}", command.description(), e);
            boards.to_vec()
        }
        Err(e) => {
            tracing::warn!("'{}' failed: {}", command.description(), e);
            boards.to_vec()
        }
    }
}

/// Like [`apply`], but reports why a command was rejected.
pub fn try_apply(
    boards: &[Board],
    command: &dyn Command,
    ids: &dyn IdGenerator,
) -> KanbanResult<Vec<Board>> {
    let mut next = boards.to_vec();
    let mut ctx = CommandContext {
        boards: &mut next,
        ids,
    };
    command.execute(&mut ctx)?;
    tracing::trace!("Applied '{}'", command.description());
    Ok(next)
}
