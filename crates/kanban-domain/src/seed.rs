//! Boards every fresh session starts with.

use crate::{Board, Status, Task};

fn task(id: &str, board_id: &str, status: &str, title: &str, description: &str) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        status: status.to_string(),
        board_id: board_id.to_string(),
    }
}

pub fn initial_boards() -> Vec<Board> {
    let mut development = Board::with_default_statuses(
        "board-1".to_string(),
        "Development Board".to_string(),
    );
    development.tasks = vec![
        task(
            "task-1",
            "board-1",
            "todo",
            "Research competitors",
            "Analyze top 5 competitors in the market",
        ),
        task(
            "task-2",
            "board-1",
            "todo",
            "Design homepage",
            "Create wireframes for the new homepage",
        ),
        task(
            "task-3",
            "board-1",
            "in-progress",
            "Implement authentication",
            "Set up user login and registration",
        ),
        task(
            "task-4",
            "board-1",
            "review",
            "Write API documentation",
            "Document all API endpoints",
        ),
        task(
            "task-5",
            "board-1",
            "done",
            "Fix navigation bug",
            "Mobile menu doesn't close on selection",
        ),
    ];

    let mut marketing = Board::new(
        "board-2".to_string(),
        "Marketing Board".to_string(),
        vec![
            Status::new("backlog", "Backlog"),
            Status::new("planning", "Planning"),
            Status::new("in-progress", "In Progress"),
            Status::new("completed", "Completed"),
        ],
    );
    marketing.tasks = vec![
        task(
            "task-6",
            "board-2",
            "backlog",
            "Create social media calendar",
            "Plan posts for next month",
        ),
        task(
            "task-7",
            "board-2",
            "planning",
            "Design email newsletter",
            "Create template for monthly newsletter",
        ),
        task(
            "task-8",
            "board-2",
            "in-progress",
            "Analyze campaign results",
            "Review metrics from last campaign",
        ),
    ];

    vec![development, marketing]
}
