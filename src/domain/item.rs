use std::fmt::Write;

use chrono::{DateTime, Local, Utc};

/// A single to-do entry.
///
/// Items are issued by the store, which owns `id` and `created_at`; outside the
/// crate both are read through [`Item::id`] and [`Item::created_at`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub(crate) id: i64,
    pub title: String,
    pub completed: bool,
    pub(crate) created_at: DateTime<Utc>,
}

impl Item {
    pub(crate) fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "(Untitled)"
        } else {
            &self.title
        }
    }

    pub fn status_marker(&self) -> &'static str {
        if self.completed {
            "[x]"
        } else {
            "[ ]"
        }
    }

    /// Render the creation time with a strftime pattern, optionally in the local zone.
    /// Falls back to RFC 3339 when the pattern is invalid.
    pub fn format_created_at(&self, format: &str, local_time: bool) -> String {
        let mut out = String::new();
        let written = if local_time {
            write!(out, "{}", self.created_at.with_timezone(&Local).format(format))
        } else {
            write!(out, "{}", self.created_at.format(format))
        };

        if written.is_err() {
            return self.created_at.to_rfc3339();
        }
        out
    }
}

/// Field changes applied by `Store::update`. `None` leaves a field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemUpdate {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

impl ItemUpdate {
    /// Replace both the title and the completion flag.
    pub fn new(title: impl Into<String>, completed: bool) -> Self {
        Self {
            title: Some(title.into()),
            completed: Some(completed),
        }
    }

    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            completed: None,
        }
    }

    pub(crate) fn apply(&self, item: &mut Item) {
        if let Some(title) = &self.title {
            item.title.clone_from(title);
        }
        if let Some(completed) = self.completed {
            item.completed = completed;
        }
    }
}
