use std::fmt;

use chrono::{DateTime, Utc};

/// Direction of a single-step page lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    Next,
    Previous,
}

impl PageDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageDirection::Next => "next",
            PageDirection::Previous => "previous",
        }
    }
}

impl fmt::Display for PageDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller position in the `(update_at, id)` ordering of bank records.
///
/// With only `update_at` set the lookup is a strict timestamp comparison.
/// Setting `id` turns the cursor into a composite key so callers can step
/// through records that share one `update_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    pub update_at: DateTime<Utc>,
    pub id: Option<i64>,
}

impl PageCursor {
    pub fn at(update_at: DateTime<Utc>) -> Self {
        Self { update_at, id: None }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}
