use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("Item not found: {0}")]
    ItemNotFound(i64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl TodoError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, TodoError::ItemNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, TodoError>;
