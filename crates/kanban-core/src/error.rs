use thiserror::Error;

#[derive(Error, Debug)]
pub enum KanbanError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid drop target: {0}")]
    InvalidDropTarget(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl KanbanError {
    pub fn not_found(what: &str, id: &str) -> Self {
        KanbanError::NotFound(format!("{} {}", what, id))
    }

    /// Rejections that the reducer treats as silent no-ops.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            KanbanError::NotFound(_) | KanbanError::Validation(_) | KanbanError::InvalidDropTarget(_)
        )
    }
}

impl From<serde_json::Error> for KanbanError {
    fn from(err: serde_json::Error) -> Self {
        KanbanError::Serialization(err.to_string())
    }
}
