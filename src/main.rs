use std::io;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use todo_cli::app::AppContext;
use todo_cli::cli::menu::Menu;
use todo_cli::cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with menu output
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut ctx = AppContext::new(cli.config.as_deref())?;

    match cli.command() {
        Commands::Menu => {
            let stdin = io::stdin();
            let mut menu = Menu::new(stdin.lock(), io::stdout());
            menu.run(&mut ctx)?;
        }
        Commands::Tui => {
            todo_cli::tui::run(&mut ctx)?;
        }
    }

    Ok(())
}
