//! Numbered text menu over any line-based input and output.

use std::io::{self, BufRead, Write};

use crate::app::{AppContext, Result, TodoError};
use crate::domain::ItemUpdate;
use crate::store::Store;

const NOT_FOUND: &str = "No item matches that ID";
const BAD_ID: &str = "ID must be a number";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Update,
    Delete,
    ToggleCompleted,
    Quit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::List),
            "3" => Some(MenuChoice::Update),
            "4" => Some(MenuChoice::Delete),
            "5" => Some(MenuChoice::ToggleCompleted),
            "0" => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

pub struct Menu<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the user quits or input ends.
    pub fn run(&mut self, ctx: &mut AppContext) -> Result<()> {
        tracing::info!("Menu started");
        loop {
            match self.step(ctx) {
                Ok(true) => {}
                Ok(false) => break,
                Err(TodoError::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    tracing::info!("Input closed");
                    writeln!(self.output)?;
                    break;
                }
                Err(e) => return Err(e),
            }
        }
        tracing::info!("Menu finished with {} items", ctx.store.len());
        Ok(())
    }

    /// Show the menu and handle one choice. Returns false once the user quits.
    fn step(&mut self, ctx: &mut AppContext) -> Result<bool> {
        self.print_menu()?;
        let choice = self.prompt("Select an option: ")?;

        match MenuChoice::parse(&choice) {
            Some(MenuChoice::Add) => self.add_item(ctx)?,
            Some(MenuChoice::List) => self.list_items(ctx)?,
            Some(MenuChoice::Update) => self.update_item(ctx)?,
            Some(MenuChoice::Delete) => self.delete_item(ctx)?,
            Some(MenuChoice::ToggleCompleted) => self.toggle_item(ctx)?,
            Some(MenuChoice::Quit) => {
                writeln!(self.output, "Goodbye")?;
                return Ok(false);
            }
            None => writeln!(self.output, "Invalid option")?,
        }
        Ok(true)
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "\n===== TODO =====\n\
             1. Add item\n\
             2. List items\n\
             3. Update item\n\
             4. Delete item\n\
             5. Toggle completed\n\
             0. Quit"
        )?;
        Ok(())
    }

    fn add_item(&mut self, ctx: &mut AppContext) -> Result<()> {
        let title = self.prompt("Title: ")?;
        let item = ctx.store.add(&title);
        writeln!(self.output, "Added item: ID={}, title=\"{}\"", item.id, item.title)?;
        Ok(())
    }

    fn list_items(&mut self, ctx: &AppContext) -> Result<()> {
        let items = ctx.store.list_all();
        if items.is_empty() {
            writeln!(self.output, "No items")?;
            return Ok(());
        }

        let display = &ctx.config.display;
        writeln!(self.output, "===== Items =====")?;
        for item in items {
            writeln!(
                self.output,
                "{}: {} {} (created: {})",
                item.id,
                item.status_marker(),
                item.title,
                item.format_created_at(&display.date_format, display.local_time)
            )?;
        }
        Ok(())
    }

    fn update_item(&mut self, ctx: &mut AppContext) -> Result<()> {
        let Some(id) = self.prompt_id("ID of the item to update: ")? else {
            return Ok(());
        };

        let current = match ctx.store.get(id) {
            Ok(item) => item,
            Err(e) if e.is_not_found() => {
                writeln!(self.output, "{}", NOT_FOUND)?;
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        writeln!(self.output, "Current title: {}", current.title)?;
        let title = self.prompt("New title (leave empty to keep): ")?;
        let completed = self.prompt(&format!(
            "Completed (current: {}) [y/n]: ",
            current.completed
        ))?;

        let update = ItemUpdate {
            title: (!title.is_empty()).then_some(title),
            completed: match completed.trim().to_lowercase().as_str() {
                "y" => Some(true),
                "n" => Some(false),
                _ => None,
            },
        };

        match ctx.store.update(id, &update) {
            Ok(item) => writeln!(
                self.output,
                "Updated: ID={}, title=\"{}\", completed={}",
                item.id, item.title, item.completed
            )?,
            Err(e) if e.is_not_found() => writeln!(self.output, "{}", NOT_FOUND)?,
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn delete_item(&mut self, ctx: &mut AppContext) -> Result<()> {
        let Some(id) = self.prompt_id("ID of the item to delete: ")? else {
            return Ok(());
        };

        match ctx.store.delete(id) {
            Ok(()) => writeln!(self.output, "Deleted item ID={}", id)?,
            Err(e) if e.is_not_found() => writeln!(self.output, "{}", NOT_FOUND)?,
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn toggle_item(&mut self, ctx: &mut AppContext) -> Result<()> {
        let Some(id) = self.prompt_id("ID of the item to toggle: ")? else {
            return Ok(());
        };

        match ctx.store.toggle_completed(id) {
            Ok(item) => {
                let state = if item.completed {
                    "completed"
                } else {
                    "not completed"
                };
                writeln!(self.output, "Item ID={} marked as {}", id, state)?;
            }
            Err(e) if e.is_not_found() => writeln!(self.output, "{}", NOT_FOUND)?,
            Err(e) => return Err(e),
        }
        Ok(())
    }

    /// Read an id. Prints the parse error and yields None for non-integers.
    fn prompt_id(&mut self, message: &str) -> Result<Option<i64>> {
        let raw = self.prompt(message)?;
        match raw.trim().parse::<i64>() {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                writeln!(self.output, "{}", BAD_ID)?;
                Ok(None)
            }
        }
    }

    /// Read one line without its line terminator. End of input is `UnexpectedEof`.
    fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
        }
        Ok(line.trim_end_matches(&['\n', '\r'][..]).to_string())
    }
}
