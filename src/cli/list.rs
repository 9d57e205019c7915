//! `punch list` command implementation

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::Path;

use crate::task::Storage;

const TABLE_COL_TEXT: usize = 60;

#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct TaskJson {
    index: usize,
    done: bool,
    text: String,
}

pub fn run(path: &Path, args: ListArgs) -> Result<()> {
    let storage = Storage::new(path);
    let tasks = storage.load()?;

    if args.json {
        let entries: Vec<TaskJson> = tasks
            .iter()
            .enumerate()
            .map(|(index, task)| TaskJson {
                index,
                done: task.done,
                text: task.text.clone(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if tasks.is_empty() {
        println!("No tasks in {}.", storage.path().display());
        return Ok(());
    }

    for (index, task) in tasks.iter().enumerate() {
        println!(
            "{:>3} {} {}",
            index,
            task.checkbox(),
            super::truncate(&task.text, TABLE_COL_TEXT)
        );
    }

    let open = tasks.iter().filter(|t| !t.done).count();
    println!("\nTotal: {} tasks, {} open", tasks.len(), open);

    Ok(())
}
