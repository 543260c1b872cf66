use crate::app::{Result, TodoError};
use crate::domain::{Item, ItemUpdate};
use crate::store::Store;

/// Insertion-ordered item list with a never-reused id counter.
#[derive(Debug)]
pub struct MemoryStore {
    items: Vec<Item>,
    next_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, id: i64) -> Result<usize> {
        self.items
            .iter()
            .position(|item| item.id == id)
            .ok_or(TodoError::ItemNotFound(id))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for MemoryStore {
    fn add(&mut self, title: &str) -> Item {
        let item = Item::new(self.next_id, title);
        self.next_id += 1;
        self.items.push(item.clone());
        tracing::debug!("Added item {}", item.id);
        item
    }

    fn list_all(&self) -> &[Item] {
        &self.items
    }

    fn get(&self, id: i64) -> Result<Item> {
        let idx = self.position(id)?;
        Ok(self.items[idx].clone())
    }

    fn update(&mut self, id: i64, update: &ItemUpdate) -> Result<Item> {
        let idx = self.position(id)?;
        let item = &mut self.items[idx];
        update.apply(item);
        tracing::debug!("Updated item {}", id);
        Ok(item.clone())
    }

    fn delete(&mut self, id: i64) -> Result<()> {
        let idx = self.position(id)?;
        self.items.remove(idx);
        tracing::debug!("Deleted item {}", id);
        Ok(())
    }

    fn toggle_completed(&mut self, id: i64) -> Result<Item> {
        let idx = self.position(id)?;
        let item = &mut self.items[idx];
        item.completed = !item.completed;
        tracing::debug!("Item {} completed={}", id, item.completed);
        Ok(item.clone())
    }
}
