use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kanban")]
#[command(about = "An in-memory kanban board engine driven by action scripts", long_about = None)]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_COMMIT_HASH"), ")"))]
pub struct Cli {
    /// Start from a JSON snapshot instead of the built-in boards (or set KANBAN_INPUT env var)
    #[arg(long, global = true, value_name = "FILE", env = "KANBAN_INPUT")]
    pub input: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the starting boards
    Show,
    /// Replay a JSON-lines action script and print the resulting boards
    Run {
        /// Script file; reads stdin when omitted
        #[arg(value_name = "SCRIPT")]
        script: Option<PathBuf>,
    },
    /// Parse a droppable column id such as `board-1:column-todo`
    Resolve {
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Print the status id a column name would get
    Slug {
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
