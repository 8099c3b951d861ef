//! Addressing of droppable columns.
//!
//! Every column is registered with the drag-and-drop layer under the id
//! `<boardId>:column-<statusId>`. When a drop ends, that id comes back and is
//! parsed here to find the destination board and column.

use kanban_core::{KanbanError, KanbanResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::board::BoardId;
use crate::status::StatusId;

const SEPARATOR: char = ':';
const COLUMN_PREFIX: &str = "column-";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropTarget {
    pub board_id: BoardId,
    pub status_id: StatusId,
}

impl DropTarget {
    pub fn new(board_id: BoardId, status_id: StatusId) -> Self {
        Self {
            board_id,
            status_id,
        }
    }

    /// Parses a composite droppable id.
    ///
    /// The id must split into exactly two parts on `:`. The `column-` prefix of
    /// the second part is optional.
    pub fn parse(id: &str) -> KanbanResult<Self> {
        let parts: Vec<&str> = id.split(SEPARATOR).collect();
        if parts.len() != 2 {
            return Err(KanbanError::InvalidDropTarget(id.to_string()));
        }

        let board_id = parts[0];
        let status_id = parts[1].strip_prefix(COLUMN_PREFIX).unwrap_or(parts[1]);
        if board_id.is_empty() || status_id.is_empty() {
            return Err(KanbanError::InvalidDropTarget(id.to_string()));
        }

        Ok(Self::new(board_id.to_string(), status_id.to_string()))
    }
}

/// Whether a board or status id can appear in a droppable id. A `:` would
/// split it into extra parts that `DropTarget::parse` refuses.
pub fn is_addressable(id: &str) -> bool {
    !id.contains(SEPARATOR)
}

impl FromStr for DropTarget {
    type Err = KanbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DropTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.board_id, SEPARATOR, COLUMN_PREFIX, self.status_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_column_id() {
        let target = DropTarget::parse("board-2:column-in-progress").unwrap();
        assert_eq!(target.board_id, "board-2");
        assert_eq!(target.status_id, "in-progress");
    }

    #[test]
    fn test_parse_without_column_prefix() {
        let target: DropTarget = "board-1:done".parse().unwrap();
        assert_eq!(target, DropTarget::new("board-1".into(), "done".into()));
    }

    #[test]
    fn test_missing_colon_is_rejected() {
        let err = DropTarget::parse("task-3").unwrap_err();
        assert!(matches!(err, KanbanError::InvalidDropTarget(ref id) if id == "task-3"));
    }

    #[test]
    fn test_extra_colons_are_rejected() {
        assert!(DropTarget::parse("a:column-b:c").is_err());
        assert!(DropTarget::parse("::").is_err());
    }

    #[test]
    fn test_empty_parts_are_rejected() {
        assert!(DropTarget::parse(":column-todo").is_err());
        assert!(DropTarget::parse("board-1:column-").is_err());
        assert!(DropTarget::parse("").is_err());
    }

    #[test]
    fn test_display_matches_column_format() {
        let target = DropTarget::new("board-1".into(), "review".into());
        assert_eq!(target.to_string(), "board-1:column-review");
        assert_eq!(DropTarget::parse(&target.to_string()).unwrap(), target);
    }
}
