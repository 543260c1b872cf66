use std::path::Path;

use crate::app::error::Result;
use crate::config::Config;
use crate::store::MemoryStore;

/// Everything an interaction loop needs, constructed once and passed by reference.
pub struct AppContext {
    pub store: MemoryStore,
    pub config: Config,
}

impl AppContext {
    pub fn new(config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        Ok(Self::with_config(config))
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            store: MemoryStore::new(),
            config,
        }
    }

    /// Default configuration without touching the filesystem.
    pub fn in_memory() -> Self {
        Self::with_config(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;

    #[test]
    fn test_contexts_do_not_share_state() {
        let mut first = AppContext::in_memory();
        let second = AppContext::in_memory();
        first.store.add("only in first");
        assert_eq!(first.store.len(), 1);
        assert!(second.store.is_empty());
    }

    #[test]
    fn test_new_with_explicit_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[display]\nlocal_time = false\n").unwrap();

        let ctx = AppContext::new(Some(&path)).unwrap();
        assert!(!ctx.config.display.local_time);
        assert!(ctx.store.is_empty());
    }

    #[test]
    fn test_new_with_bad_config_path() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppContext::new(Some(&dir.path().join("missing.toml")));
        assert!(result.is_err());
    }
}
