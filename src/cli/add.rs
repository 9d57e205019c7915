//! `punch add` command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::task::Storage;

#[derive(Args)]
pub struct AddArgs {
    /// Task text
    pub text: String,

    /// Mark the new task completed
    #[arg(long)]
    pub done: bool,
}

pub fn run(path: &Path, args: AddArgs) -> Result<()> {
    let storage = Storage::new(path);
    let mut tasks = storage.load()?;

    tasks.append(args.done, &args.text);
    storage.save(&tasks)?;

    let checkbox = if args.done { "[x]" } else { "[ ]" };
    println!("Added {} {} {}", tasks.len() - 1, checkbox, args.text);

    Ok(())
}
