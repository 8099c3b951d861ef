use serde::{Deserialize, Serialize};

use crate::drop_target::is_addressable;

pub type StatusId = String;

/// Id of the status every board starts with. It cannot be deleted and is the
/// fallback when a board would otherwise be left without columns.
pub const DEFAULT_STATUS_ID: &str = "todo";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub id: StatusId,
    pub name: String,
}

impl Status {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Builds a status whose id is the slug of the name as given. Only the
    /// stored display name is trimmed.
    pub fn from_name(name: &str) -> Self {
        Self::new(slugify(name), name.trim())
    }

    /// The four columns a new board gets.
    pub fn defaults() -> Vec<Status> {
        vec![
            Status::fallback(),
            Status::new("in-progress", "In Progress"),
            Status::new("review", "Review"),
            Status::new("done", "Done"),
        ]
    }

    /// Builds one status per non-blank name, skipping names whose slug
    /// repeats an earlier one or cannot be addressed as a drop target.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Vec<Status> {
        let mut statuses: Vec<Status> = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            if name.trim().is_empty() {
                continue;
            }
            let status = Status::from_name(name);
            if !is_addressable(&status.id) {
                continue;
            }
            if !statuses.iter().any(|s| s.id == status.id) {
                statuses.push(status);
            }
        }
        statuses
    }

    pub fn fallback() -> Status {
        Status::new(DEFAULT_STATUS_ID, "To Do")
    }

    pub fn is_protected(&self) -> bool {
        self.id == DEFAULT_STATUS_ID
    }

    pub fn rename(&mut self, name: String) {
        self.name = name;
    }
}

/// Lowercases the name and collapses each run of whitespace into one `-`.
pub fn slugify(name: &str) -> StatusId {
    // Lowercase the whole string first so context-dependent mappings such as
    // the final sigma apply.
    let lower = name.to_lowercase();
    let mut slug = String::with_capacity(lower.len());
    let mut in_whitespace = false;
    for c in lower.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
                in_whitespace = true;
            }
        } else {
            slug.push(c);
            in_whitespace = false;
        }
    }
    slug
}
