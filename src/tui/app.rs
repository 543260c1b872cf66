use ratatui::widgets::ListState;

use crate::domain::Item;

pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Adding,
    /// Editing the title of the item with this id
    Editing(i64),
}

pub struct TuiApp {
    pub items: Vec<Item>,
    pub item_index: usize,
    pub list_state: ListState,
    pub should_quit: bool,
    pub status_message: Option<String>,
    pub input_mode: InputMode,
    pub input: String,
    // Pending delete confirmation (item_id, title)
    pub pending_delete: Option<(i64, String)>,
}

impl TuiApp {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            items: Vec::new(),
            item_index: 0,
            list_state,
            should_quit: false,
            status_message: None,
            input_mode: InputMode::Normal,
            input: String::new(),
            pending_delete: None,
        }
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.items.get(self.item_index)
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    /// Replace the visible items, keeping the cursor in range.
    pub fn set_items(&mut self, items: Vec<Item>) {
        self.items = items;
        if self.item_index >= self.items.len() {
            self.item_index = self.items.len().saturating_sub(1);
        }
        self.list_state.select(Some(self.item_index));
    }

    /// Swap in a changed copy of an item already in the list.
    pub fn replace_item(&mut self, item: Item) {
        if let Some(slot) = self.items.iter_mut().find(|i| i.id == item.id) {
            *slot = item;
        }
    }

    pub fn select_last(&mut self) {
        self.item_index = self.items.len().saturating_sub(1);
        self.list_state.select(Some(self.item_index));
    }

    pub fn move_up(&mut self) {
        self.item_index = self.item_index.saturating_sub(1);
        self.list_state.select(Some(self.item_index));
    }

    pub fn move_down(&mut self) {
        if !self.items.is_empty() && self.item_index < self.items.len() - 1 {
            self.item_index += 1;
        }
        self.list_state.select(Some(self.item_index));
    }

    pub fn next_page(&mut self) {
        if !self.items.is_empty() {
            self.item_index = (self.item_index + PAGE_SIZE).min(self.items.len() - 1);
        }
        self.list_state.select(Some(self.item_index));
    }

    pub fn prev_page(&mut self) {
        self.item_index = self.item_index.saturating_sub(PAGE_SIZE);
        self.list_state.select(Some(self.item_index));
    }

    pub fn start_adding(&mut self) {
        self.input_mode = InputMode::Adding;
        self.input.clear();
    }

    pub fn start_editing(&mut self) {
        if let Some(item) = self.selected_item() {
            let (id, title) = (item.id, item.title.clone());
            self.input_mode = InputMode::Editing(id);
            self.input = title;
        }
    }

    /// Leave input mode, handing back what was typed.
    pub fn finish_input(&mut self) -> String {
        self.input_mode = InputMode::Normal;
        std::mem::take(&mut self.input)
    }

    pub fn is_editing(&self) -> bool {
        self.input_mode != InputMode::Normal
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for TuiApp {
    fn default() -> Self {
        Self::new()
    }
}
