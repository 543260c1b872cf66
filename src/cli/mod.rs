pub mod menu;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "todo-cli")]
#[command(about = "An interactive in-memory to-do list", long_about = None)]
pub struct Cli {
    /// Load configuration from this file instead of ~/.config/todo-cli/config.toml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Numbered text menu (default)
    Menu,
    /// Launch the TUI
    Tui,
}

impl Cli {
    pub fn command(&self) -> Commands {
        self.command.unwrap_or(Commands::Menu)
    }
}
