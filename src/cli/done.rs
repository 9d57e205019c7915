//! `punch done` command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::task::Storage;

#[derive(Args)]
pub struct DoneArgs {
    /// Task index, as shown by `punch list`
    pub index: usize,
}

pub fn run(path: &Path, args: DoneArgs) -> Result<()> {
    let storage = Storage::new(path);
    let mut tasks = storage.load()?;

    tasks.toggle(args.index)?;
    storage.save(&tasks)?;

    if let Some(task) = tasks.get(args.index) {
        println!("{} {}", task.checkbox(), task.text);
    }

    Ok(())
}
