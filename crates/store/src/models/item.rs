//! Todo item model

use serde::{Deserialize, Serialize};

use super::require_title;
use crate::error::{Result, StoreError};

row_id!(
    /// Todo item identifier
    ItemId
);

/// Todo item row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct TodoItem {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub done: bool,
}

/// Payload for creating an item
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewItem {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub done: bool,
}

impl NewItem {
    /// Create an item payload with just a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Validate before insert
    pub fn validate(&self) -> Result<()> {
        require_title(&self.title)
    }
}

/// Partial update for an item
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateItemInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub done: Option<bool>,
}

impl UpdateItemInput {
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
