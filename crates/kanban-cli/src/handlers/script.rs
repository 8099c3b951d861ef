use crate::context::{CliContext, RunOutput};
use crate::output;
use anyhow::Context;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

pub fn handle_run(ctx: &mut CliContext, script: Option<&Path>) -> anyhow::Result<()> {
    let report = match script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open script {}", path.display()))?;
            ctx.run_script(BufReader::new(file))?
        }
        None => ctx.run_script(io::stdin().lock())?,
    };

    output::output_success(RunOutput {
        report,
        boards: ctx.boards(),
    })
}
