//! # todo-cli
//!
//! An interactive, in-memory to-do list for the terminal.
//!
//! Items live only for the lifetime of the process. The [`store`] assigns
//! each item a sequential id that is never reused, keeps items in insertion
//! order, and reports unknown ids as [`TodoError::ItemNotFound`](app::TodoError).
//!
//! ## Quick Start
//!
//! ```bash
//! # Numbered text menu
//! todo-cli
//!
//! # Full-screen interface
//! todo-cli tui
//! ```

/// Application context and error handling.
///
/// [`AppContext`](app::AppContext) owns the store and the loaded
/// configuration; interaction loops borrow it instead of reaching for
/// global state.
pub mod app;

/// Command-line interface using clap, plus the numbered text menu.
pub mod cli;

/// Configuration loaded from `~/.config/todo-cli/config.toml`:
/// date display, TUI colors and keybindings.
pub mod config;

/// Core domain models: [`Item`](domain::Item) and [`ItemUpdate`](domain::ItemUpdate).
pub mod domain;

/// Item storage.
///
/// - [`Store`](store::Store): Trait defining the item operations
/// - [`MemoryStore`](store::MemoryStore): Vec-backed implementation
pub mod store;

/// Terminal user interface built with ratatui.
///
/// Keybindings (configurable): j/k navigate, a adds, e edits the title,
/// Space toggles completion, d deletes after confirmation, q quits.
pub mod tui;
