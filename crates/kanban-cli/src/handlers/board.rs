use crate::context::CliContext;
use crate::output;
use kanban_domain::Board;
use serde::Serialize;

#[derive(Serialize)]
struct BoardsOutput<'a> {
    boards: &'a [Board],
    count: usize,
}

pub fn handle_show(ctx: &CliContext) -> anyhow::Result<()> {
    let boards = ctx.boards();
    output::output_success(BoardsOutput {
        boards,
        count: boards.len(),
    })
}
