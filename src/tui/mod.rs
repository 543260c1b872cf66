pub mod app;
pub mod event;
pub mod layout;

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::{AppContext, Result};
use crate::domain::ItemUpdate;
use crate::store::Store;

use self::app::{InputMode, TuiApp};
use self::event::{Action, AppEvent, EventHandler};

type Tui = Terminal<CrosstermBackend<Stdout>>;

pub fn run(ctx: &mut AppContext) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, ctx);
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_app(terminal: &mut Tui, ctx: &mut AppContext) -> Result<()> {
    let mut tui_app = TuiApp::new();
    let event_handler = EventHandler::new(Duration::from_millis(100));
    tracing::info!("TUI started");

    load_items(&mut tui_app, ctx);

    loop {
        terminal.draw(|frame| layout::render(frame, &mut tui_app, &ctx.config))?;

        match event_handler.next()? {
            AppEvent::Key(key) => handle_key(&mut tui_app, ctx, key)?,
            AppEvent::Tick => {}
        }

        if tui_app.should_quit {
            break;
        }
    }

    tracing::info!("TUI finished with {} items", ctx.store.len());
    Ok(())
}

/// Apply one key press to the UI state and the store.
pub fn handle_key(tui_app: &mut TuiApp, ctx: &mut AppContext, key: KeyEvent) -> Result<()> {
    if tui_app.is_editing() {
        return handle_input_key(tui_app, ctx, key);
    }

    // Handle pending delete confirmation
    if let Some((item_id, title)) = tui_app.pending_delete.take() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                let result = ctx.store.delete(item_id);
                match result {
                    Ok(()) => tui_app.set_status(format!("Deleted item {}: {}", item_id, title)),
                    Err(e) if e.is_not_found() => tui_app.set_status(e.to_string()),
                    Err(e) => return Err(e),
                }
                load_items(tui_app, ctx);
            }
            _ => tui_app.set_status("Delete cancelled".to_string()),
        }
        return Ok(());
    }

    tui_app.clear_status();
    let action = ctx.config.keybindings.get_action(&key);
    match action {
        Action::Quit => {
            tui_app.should_quit = true;
        }
        Action::MoveUp => {
            tui_app.move_up();
        }
        Action::MoveDown => {
            tui_app.move_down();
        }
        Action::NextPage => {
            tui_app.next_page();
        }
        Action::PrevPage => {
            tui_app.prev_page();
        }
        Action::AddItem => {
            tui_app.start_adding();
        }
        Action::EditItem => {
            tui_app.start_editing();
        }
        Action::DeleteItem => {
            let target = tui_app
                .selected_item()
                .map(|item| (item.id, item.display_title().to_string()));
            if target.is_some() {
                tui_app.pending_delete = target;
            }
        }
        Action::ToggleCompleted => {
            let item_id = tui_app.selected_item().map(|item| item.id);
            if let Some(item_id) = item_id {
                match ctx.store.toggle_completed(item_id) {
                    Ok(item) => tui_app.replace_item(item),
                    Err(e) if e.is_not_found() => {
                        tui_app.set_status(e.to_string());
                        load_items(tui_app, ctx);
                    }
                    Err(e) => return Err(e),
                }
            }
        }
        Action::None => {}
    }

    Ok(())
}

fn handle_input_key(tui_app: &mut TuiApp, ctx: &mut AppContext, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => {
            tui_app.finish_input();
            tui_app.set_status("Cancelled".to_string());
        }
        KeyCode::Enter => {
            let mode = tui_app.input_mode.clone();
            let text = tui_app.finish_input();
            submit_input(tui_app, ctx, mode, text)?;
        }
        KeyCode::Backspace => {
            tui_app.input.pop();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            tui_app.input.push(c);
        }
        _ => {}
    }
    Ok(())
}

fn submit_input(
    tui_app: &mut TuiApp,
    ctx: &mut AppContext,
    mode: InputMode,
    text: String,
) -> Result<()> {
    match mode {
        InputMode::Adding => {
            let item = ctx.store.add(&text);
            load_items(tui_app, ctx);
            tui_app.select_last();
            tui_app.set_status(format!("Added item {}", item.id));
        }
        InputMode::Editing(_) if text.is_empty() => {
            tui_app.set_status("Title unchanged".to_string());
        }
        InputMode::Editing(item_id) => match ctx.store.update(item_id, &ItemUpdate::title(text)) {
            Ok(item) => {
                tui_app.set_status(format!("Updated item {}", item.id));
                tui_app.replace_item(item);
            }
            Err(e) if e.is_not_found() => {
                tui_app.set_status(e.to_string());
                load_items(tui_app, ctx);
            }
            Err(e) => return Err(e),
        },
        InputMode::Normal => {}
    }
    Ok(())
}

fn load_items(tui_app: &mut TuiApp, ctx: &AppContext) {
    tui_app.set_items(ctx.store.list_all().to_vec());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(tui_app: &mut TuiApp, ctx: &mut AppContext, code: KeyCode) {
        handle_key(tui_app, ctx, KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn type_text(tui_app: &mut TuiApp, ctx: &mut AppContext, text: &str) {
        for c in text.chars() {
            press(tui_app, ctx, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_add_item_through_input() {
        let mut ctx = AppContext::in_memory();
        let mut tui_app = TuiApp::new();

        press(&mut tui_app, &mut ctx, KeyCode::Char('a'));
        assert_eq!(tui_app.input_mode, InputMode::Adding);
        // 'q' is text while typing, not quit
        type_text(&mut tui_app, &mut ctx, "Buy quinoa");
        press(&mut tui_app, &mut ctx, KeyCode::Backspace);
        press(&mut tui_app, &mut ctx, KeyCode::Enter);

        assert!(!tui_app.should_quit);
        assert_eq!(ctx.store.get(1).unwrap().title, "Buy quino");
        assert_eq!(tui_app.items.len(), 1);
        assert_eq!(tui_app.status_message.as_deref(), Some("Added item 1"));
    }

    #[test]
    fn test_escape_cancels_add() {
        let mut ctx = AppContext::in_memory();
        let mut tui_app = TuiApp::new();

        press(&mut tui_app, &mut ctx, KeyCode::Char('a'));
        type_text(&mut tui_app, &mut ctx, "nope");
        press(&mut tui_app, &mut ctx, KeyCode::Esc);

        assert!(ctx.store.is_empty());
        assert!(!tui_app.is_editing());
    }

    #[test]
    fn test_new_item_is_selected() {
        let mut ctx = AppContext::in_memory();
        ctx.store.add("first");
        let mut tui_app = TuiApp::new();
        load_items(&mut tui_app, &ctx);

        press(&mut tui_app, &mut ctx, KeyCode::Char('a'));
        type_text(&mut tui_app, &mut ctx, "second");
        press(&mut tui_app, &mut ctx, KeyCode::Enter);

        assert_eq!(tui_app.selected_item().unwrap().title, "second");
    }

    #[test]
    fn test_edit_title() {
        let mut ctx = AppContext::in_memory();
        ctx.store.add("Walk dog");
        let mut tui_app = TuiApp::new();
        load_items(&mut tui_app, &ctx);

        press(&mut tui_app, &mut ctx, KeyCode::Char('e'));
        for _ in 0.."dog".len() {
            press(&mut tui_app, &mut ctx, KeyCode::Backspace);
        }
        type_text(&mut tui_app, &mut ctx, "the dog");
        press(&mut tui_app, &mut ctx, KeyCode::Enter);

        assert_eq!(ctx.store.get(1).unwrap().title, "Walk the dog");
        assert_eq!(tui_app.items[0].title, "Walk the dog");
    }

    #[test]
    fn test_empty_edit_keeps_title() {
        let mut ctx = AppContext::in_memory();
        ctx.store.add("Keep");
        let mut tui_app = TuiApp::new();
        load_items(&mut tui_app, &ctx);

        press(&mut tui_app, &mut ctx, KeyCode::Enter);
        for _ in 0..4 {
            press(&mut tui_app, &mut ctx, KeyCode::Backspace);
        }
        press(&mut tui_app, &mut ctx, KeyCode::Enter);

        assert_eq!(ctx.store.get(1).unwrap().title, "Keep");
        assert_eq!(tui_app.status_message.as_deref(), Some("Title unchanged"));
    }

    #[test]
    fn test_toggle_selected_item() {
        let mut ctx = AppContext::in_memory();
        ctx.store.add("a");
        ctx.store.add("b");
        let mut tui_app = TuiApp::new();
        load_items(&mut tui_app, &ctx);

        press(&mut tui_app, &mut ctx, KeyCode::Char('j'));
        press(&mut tui_app, &mut ctx, KeyCode::Char(' '));

        assert!(!ctx.store.get(1).unwrap().completed);
        assert!(ctx.store.get(2).unwrap().completed);
        assert!(tui_app.items[1].completed);

        press(&mut tui_app, &mut ctx, KeyCode::Char('x'));
        assert!(!ctx.store.get(2).unwrap().completed);
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut ctx = AppContext::in_memory();
        ctx.store.add("a");
        ctx.store.add("b");
        let mut tui_app = TuiApp::new();
        load_items(&mut tui_app, &ctx);

        press(&mut tui_app, &mut ctx, KeyCode::Char('d'));
        assert_eq!(tui_app.pending_delete, Some((1, "a".to_string())));
        press(&mut tui_app, &mut ctx, KeyCode::Char('n'));
        assert_eq!(ctx.store.len(), 2);
        assert_eq!(tui_app.status_message.as_deref(), Some("Delete cancelled"));

        press(&mut tui_app, &mut ctx, KeyCode::Delete);
        press(&mut tui_app, &mut ctx, KeyCode::Char('y'));
        assert_eq!(ctx.store.len(), 1);
        assert_eq!(tui_app.items.len(), 1);
        assert_eq!(tui_app.items[0].id, 2);
        assert!(ctx.store.get(1).unwrap_err().is_not_found());
    }

    #[test]
    fn test_actions_on_empty_list_are_noops() {
        let mut ctx = AppContext::in_memory();
        let mut tui_app = TuiApp::new();

        press(&mut tui_app, &mut ctx, KeyCode::Char('d'));
        press(&mut tui_app, &mut ctx, KeyCode::Char(' '));
        press(&mut tui_app, &mut ctx, KeyCode::Char('e'));

        assert!(tui_app.pending_delete.is_none());
        assert!(!tui_app.is_editing());
        assert!(ctx.store.is_empty());
    }

    #[test]
    fn test_stale_item_reports_not_found() {
        let mut ctx = AppContext::in_memory();
        ctx.store.add("a");
        let mut tui_app = TuiApp::new();
        load_items(&mut tui_app, &ctx);
        ctx.store.delete(1).unwrap();

        press(&mut tui_app, &mut ctx, KeyCode::Char(' '));
        assert_eq!(tui_app.status_message.as_deref(), Some("Item not found: 1"));
        assert!(tui_app.items.is_empty());
    }

    #[test]
    fn test_edit_of_deleted_item_reports_not_found() {
        let mut ctx = AppContext::in_memory();
        ctx.store.add("a");
        ctx.store.add("b");
        let mut tui_app = TuiApp::new();
        load_items(&mut tui_app, &ctx);

        press(&mut tui_app, &mut ctx, KeyCode::Char('e'));
        assert_eq!(tui_app.input_mode, InputMode::Editing(1));
        ctx.store.delete(1).unwrap();
        type_text(&mut tui_app, &mut ctx, "!");
        press(&mut tui_app, &mut ctx, KeyCode::Enter);

        assert_eq!(tui_app.status_message.as_deref(), Some("Item not found: 1"));
        assert!(!tui_app.is_editing());
        assert_eq!(tui_app.items.len(), 1);
        assert_eq!(tui_app.items[0].id, 2);
        assert_eq!(ctx.store.get(2).unwrap().title, "b");
        assert_eq!(ctx.store.len(), 1);
    }

    #[test]
    fn test_quit() {
        let mut ctx = AppContext::in_memory();
        let mut tui_app = TuiApp::new();
        handle_key(
            &mut tui_app,
            &mut ctx,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        )
        .unwrap();
        assert!(tui_app.should_quit);
    }
}
