//! User actions in serializable form.
//!
//! One action is one UI callback: a button press, a form submission or a
//! drag event. Scripts replay them as JSON objects tagged by `action`, e.g.
//! `{"action": "add_status", "board_id": "board-1", "name": "QA"}`.

use serde::{Deserialize, Serialize};

use crate::commands::{
    AddBoard, AddStatus, AddTask, Command, DeleteStatus, EditStatus, RemoveBoard, ReplaceBoard,
    UpdateBoard, UpdateTask,
};
use crate::{Board, BoardTemplate, BoardUpdate, TaskUpdate};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    AddBoard {
        #[serde(default)]
        name: Option<String>,
    },
    UpdateBoard {
        board_id: String,
        #[serde(flatten)]
        updates: BoardUpdate,
    },
    ReplaceBoard {
        board: Board,
    },
    RemoveBoard {
        board_id: String,
    },
    AddStatus {
        board_id: String,
        name: String,
    },
    EditStatus {
        board_id: String,
        status_id: String,
        name: String,
    },
    DeleteStatus {
        board_id: String,
        status_id: String,
    },
    AddTask {
        board_id: String,
        status_id: String,
        title: String,
    },
    UpdateTask {
        board_id: String,
        task_id: String,
        #[serde(flatten)]
        updates: TaskUpdate,
    },
    /// Pick up and drop in one step.
    MoveTask {
        task_id: String,
        over: String,
    },
    DragStart {
        task_id: String,
    },
    DragEnd {
        #[serde(default)]
        over: Option<String>,
    },
    DragCancel,
}

impl Action {
    /// The command for a plain mutation. Drag events return `None`; they are
    /// resolved by the drag session instead.
    pub fn into_command(self, template: &BoardTemplate) -> Option<Box<dyn Command>> {
        let command: Box<dyn Command> = match self {
            Action::AddBoard { name } => Box::new(AddBoard {
                name,
                template: template.clone(),
            }),
            Action::UpdateBoard { board_id, updates } => {
                Box::new(UpdateBoard { board_id, updates })
            }
            Action::ReplaceBoard { board } => Box::new(ReplaceBoard { board }),
            Action::RemoveBoard { board_id } => Box::new(RemoveBoard { board_id }),
            Action::AddStatus { board_id, name } => Box::new(AddStatus { board_id, name }),
            Action::EditStatus {
                board_id,
                status_id,
                name,
            } => Box::new(EditStatus {
                board_id,
                status_id,
                name,
            }),
            Action::DeleteStatus {
                board_id,
                status_id,
            } => Box::new(DeleteStatus {
                board_id,
                status_id,
            }),
            Action::AddTask {
                board_id,
                status_id,
                title,
            } => Box::new(AddTask {
                board_id,
                status_id,
                title,
            }),
            Action::UpdateTask {
                board_id,
                task_id,
                updates,
            } => Box::new(UpdateTask {
                board_id,
                task_id,
                updates,
            }),
            Action::MoveTask { .. }
            | Action::DragStart { .. }
            | Action::DragEnd { .. }
            | Action::DragCancel => return None,
        };
        Some(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tagged_actions() {
        let action: Action =
            serde_json::from_str(r#"{"action":"add_status","board_id":"board-1","name":"QA"}"#)
                .unwrap();
        assert_eq!(
            action,
            Action::AddStatus {
                board_id: "board-1".to_string(),
                name: "QA".to_string(),
            }
        );

        let action: Action = serde_json::from_str(r#"{"action":"drag_cancel"}"#).unwrap();
        assert_eq!(action, Action::DragCancel);

        let action: Action = serde_json::from_str(r#"{"action":"add_board"}"#).unwrap();
        assert_eq!(action, Action::AddBoard { name: None });
    }

    #[test]
    fn test_parse_flattened_updates() {
        let action: Action = serde_json::from_str(
            r#"{"action":"update_task","board_id":"board-1","task_id":"task-1","status":"done"}"#,
        )
        .unwrap();
        assert_eq!(
            action,
            Action::UpdateTask {
                board_id: "board-1".to_string(),
                task_id: "task-1".to_string(),
                updates: TaskUpdate {
                    status: Some("done".to_string()),
                    ..Default::default()
                },
            }
        );

        let action: Action =
            serde_json::from_str(r#"{"action":"update_board","board_id":"board-2","name":"Ads"}"#)
                .unwrap();
        assert_eq!(
            action,
            Action::UpdateBoard {
                board_id: "board-2".to_string(),
                updates: BoardUpdate {
                    name: Some("Ads".to_string()),
                },
            }
        );
    }

    #[test]
    fn test_unknown_action_is_an_error() {
        assert!(serde_json::from_str::<Action>(r#"{"action":"undo"}"#).is_err());
    }

    #[test]
    fn test_drag_actions_have_no_command() {
        let template = BoardTemplate::default();
        assert!(Action::DragCancel.into_command(&template).is_none());
        assert!(Action::DragEnd { over: None }.into_command(&template).is_none());
        assert!(Action::MoveTask {
            task_id: "t".to_string(),
            over: "b:column-s".to_string(),
        }
        .into_command(&template)
        .is_none());

        let command = Action::RemoveBoard {
            board_id: "board-2".to_string(),
        }
        .into_command(&template)
        .unwrap();
        assert_eq!(command.description(), "Remove board board-2");
    }
}
