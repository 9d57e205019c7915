//! CLI argument definitions

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use super::{add::AddArgs, done::DoneArgs, edit::EditArgs, list::ListArgs};

#[derive(Parser)]
#[command(name = "punch", version, about = "Terminal to-do list")]
pub struct Cli {
    /// Path to the list file (overrides the configured default)
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Append a task to the list
    Add(AddArgs),

    /// Print the list
    List(ListArgs),

    /// Toggle a task's completion state
    Done(DoneArgs),

    /// Replace a task's text
    Edit(EditArgs),

    /// Generate shell completions
    Completion {
        #[arg(value_enum)]
        shell: Shell,
    },
}
