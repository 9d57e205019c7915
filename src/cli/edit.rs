//! `punch edit` command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::task::Storage;

#[derive(Args)]
pub struct EditArgs {
    /// Task index, as shown by `punch list`
    pub index: usize,

    /// Replacement text
    pub text: String,
}

pub fn run(path: &Path, args: EditArgs) -> Result<()> {
    let storage = Storage::new(path);
    let mut tasks = storage.load()?;

    tasks.set_text(args.index, &args.text)?;
    storage.save(&tasks)?;

    if let Some(task) = tasks.get(args.index) {
        println!("{} {}", task.checkbox(), task.text);
    }

    Ok(())
}
