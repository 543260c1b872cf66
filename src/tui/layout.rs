use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::config::{Config, KeybindingConfig};
use crate::tui::app::{InputMode, TuiApp};

pub fn render(frame: &mut Frame, app: &mut TuiApp, config: &Config) {
    if app.is_editing() {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Items pane
                Constraint::Length(3), // Title input
                Constraint::Length(1), // Status bar
            ])
            .split(frame.area());

        render_items_pane(frame, app, chunks[0], config);
        render_input(frame, app, chunks[1], config);
        render_status_bar(frame, app, chunks[2], config);
    } else {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(frame.area());

        render_items_pane(frame, app, chunks[0], config);
        render_status_bar(frame, app, chunks[1], config);
    }
}

fn render_items_pane(frame: &mut Frame, app: &mut TuiApp, area: Rect, config: &Config) {
    let colors = &config.colors;
    let display = &config.display;

    let rows: Vec<ListItem> = app
        .items
        .iter()
        .map(|item| {
            let content = format!(
                "{} {:>3}  {}  ({})",
                item.status_marker(),
                item.id,
                item.display_title(),
                item.format_created_at(&display.date_format, display.local_time)
            );

            let style = if item.completed {
                Style::default()
                    .fg(colors.completed_item)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(colors.pending_item)
            };

            ListItem::new(content).style(style)
        })
        .collect();

    let title = format!(" Items ({}/{} done) ", app.completed_count(), app.items.len());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.active_border));

    if rows.is_empty() {
        let hint = format!(
            "No items. Press {} to add one.",
            KeybindingConfig::hint(&config.keybindings.add_item)
        );
        frame.render_widget(Paragraph::new(hint).block(block), area);
        return;
    }

    let list = List::new(rows).block(block).highlight_style(
        Style::default()
            .bg(colors.selection_bg)
            .fg(colors.selection_fg)
            .add_modifier(Modifier::BOLD),
    );

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn render_input(frame: &mut Frame, app: &TuiApp, area: Rect, config: &Config) {
    let title = match app.input_mode {
        InputMode::Editing(id) => format!(" Edit item {} (Enter: save, Esc: cancel) ", id),
        _ => " New item (Enter: add, Esc: cancel) ".to_string(),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(config.colors.active_border));

    let paragraph = Paragraph::new(app.input.as_str())
        .style(Style::default().fg(config.colors.input_fg))
        .block(block);
    frame.render_widget(paragraph, area);

    // Cursor after the last typed character, inside the border
    let typed = u16::try_from(app.input.chars().count()).unwrap_or(u16::MAX);
    let x = area
        .x
        .saturating_add(1)
        .saturating_add(typed)
        .min(area.right().saturating_sub(2));
    frame.set_cursor_position((x, area.y.saturating_add(1)));
}

fn render_status_bar(frame: &mut Frame, app: &TuiApp, area: Rect, config: &Config) {
    let keys = &config.keybindings;
    let status = if let Some((id, title)) = &app.pending_delete {
        format!("Delete item {} \"{}\"? (y/n)", id, title)
    } else if let Some(ref msg) = app.status_message {
        msg.clone()
    } else {
        format!(
            "{}/{}:Navigate  {}:Add  {}:Edit  {}:Toggle  {}:Delete  {}:Quit",
            KeybindingConfig::hint(&keys.move_down),
            KeybindingConfig::hint(&keys.move_up),
            KeybindingConfig::hint(&keys.add_item),
            KeybindingConfig::hint(&keys.edit_item),
            KeybindingConfig::hint(&keys.toggle_completed),
            KeybindingConfig::hint(&keys.delete_item),
            KeybindingConfig::hint(&keys.quit),
        )
    };

    let paragraph = Paragraph::new(status).style(
        Style::default()
            .fg(config.colors.status_fg)
            .bg(config.colors.status_bg),
    );

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Item;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &mut TuiApp, config: &Config) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        terminal.draw(|frame| render(frame, app, config)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_empty_list() {
        let mut app = TuiApp::new();
        let screen = draw(&mut app, &Config::default());
        assert!(screen.contains("Items (0/0 done)"));
        assert!(screen.contains("No items. Press a to add one."));
        assert!(screen.contains("j/k:Navigate"));
    }

    #[test]
    fn test_render_items_with_markers() {
        let mut app = TuiApp::new();
        let mut done = Item::new(2, "Walk dog");
        done.completed = true;
        app.set_items(vec![Item::new(1, "Buy milk"), done]);

        let screen = draw(&mut app, &Config::default());
        assert!(screen.contains("[ ]   1  Buy milk"));
        assert!(screen.contains("[x]   2  Walk dog"));
        assert!(screen.contains("Items (1/2 done)"));
    }

    #[test]
    fn test_render_input_and_confirmation() {
        let mut app = TuiApp::new();
        app.set_items(vec![Item::new(1, "Buy milk")]);
        app.start_editing();
        let screen = draw(&mut app, &Config::default());
        assert!(screen.contains("Edit item 1"));

        app.finish_input();
        app.pending_delete = Some((1, "Buy milk".to_string()));
        let screen = draw(&mut app, &Config::default());
        assert!(screen.contains("Delete item 1 \"Buy milk\"? (y/n)"));
    }

    #[test]
    fn test_render_very_long_input() {
        let mut app = TuiApp::new();
        app.start_adding();
        app.input = "a".repeat(65535);
        let screen = draw(&mut app, &Config::default());
        assert!(screen.contains("New item"));

        app.input.push_str(&"b".repeat(10));
        draw(&mut app, &Config::default());
    }
}
