//! Todo list model

use serde::{Deserialize, Serialize};

use super::require_title;
use crate::error::{Result, StoreError};

row_id!(
    /// Todo list identifier
    ListId
);

/// Todo list row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct TodoList {
    pub id: ListId,
    pub title: String,
    pub description: String,
    pub done: bool,
}

/// Payload for creating a list
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewList {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub done: bool,
}

impl NewList {
    /// Create a list payload with just a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Validate before insert
    pub fn validate(&self) -> Result<()> {
        require_title(&self.title)
    }
}

/// Partial update for a list
///
/// `None` leaves the stored column untouched. `Some` overwrites it, including
/// `Some(String::new())` and `Some(false)`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateListInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub done: Option<bool>,
}

impl UpdateListInput {
    /// True if no field is set
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.done.is_none()
    }

    /// Validate before update
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(StoreError::invalid("update", "update has no values"));
        }
        Ok(())
    }
}
