//! Punchlist - terminal to-do list with flat-file persistence

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use punchlist::cli::{self, Cli, Commands};
use punchlist::config::Config;
use punchlist::tui;

fn main() -> Result<()> {
    if std::env::var("PUNCHLIST_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("punchlist=debug")
            .init();
    }

    let cli = Cli::parse();

    // Completion needs neither config nor list file
    match cli.command {
        Some(Commands::Completion { shell }) => {
            generate(shell, &mut Cli::command(), "punch", &mut std::io::stdout());
            return Ok(());
        }
        _ => {}
    }

    let config = Config::load()?;
    let list_path = cli::resolve_list_path(cli.file, &config);

    match cli.command {
        Some(Commands::Add(args)) => cli::add::run(&list_path, args),
        Some(Commands::List(args)) => cli::list::run(&list_path, args),
        Some(Commands::Done(args)) => cli::done::run(&list_path, args),
        Some(Commands::Edit(args)) => cli::edit::run(&list_path, args),
        None => tui::run(&config, &list_path),
        _ => unreachable!(),
    }
}
