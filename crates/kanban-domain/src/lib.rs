pub mod action;
pub mod board;
pub mod commands;
pub mod drag;
pub mod drop_target;
pub mod ids;
pub mod reducer;
pub mod seed;
pub mod snapshot;
pub mod status;
pub mod store;
pub mod task;

pub use action::Action;
pub use board::{check_collection, Board, BoardId, BoardTemplate, BoardUpdate};
pub use drag::{ActiveDrag, DragSession};
pub use drop_target::DropTarget;
pub use ids::{IdGenerator, UuidIdGenerator};
pub use snapshot::Snapshot;
pub use status::{slugify, Status, StatusId, DEFAULT_STATUS_ID};
pub use store::BoardStore;
pub use task::{Task, TaskId, TaskUpdate};
