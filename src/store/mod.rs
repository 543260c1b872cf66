pub mod memory;

use crate::app::Result;
use crate::domain::{Item, ItemUpdate};

pub use memory::MemoryStore;

pub trait Store {
    fn add(&mut self, title: &str) -> Item;
    fn list_all(&self) -> &[Item];
    fn get(&self, id: i64) -> Result<Item>;
    fn update(&mut self, id: i64, update: &ItemUpdate) -> Result<Item>;
    fn delete(&mut self, id: i64) -> Result<()>;
    fn toggle_completed(&mut self, id: i64) -> Result<Item>;
}
