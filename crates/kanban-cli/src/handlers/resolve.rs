use crate::output;
use kanban_domain::{slugify, DropTarget};

pub fn handle_resolve(id: &str) -> anyhow::Result<()> {
    let target = DropTarget::parse(id)?;
    output::output_success(&target)
}

pub fn handle_slug(name: &str) -> anyhow::Result<()> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        anyhow::bail!("status name must not be empty");
    }
    output::output_success(serde_json::json!({
        "name": trimmed,
        "id": slugify(name),
    }))
}
