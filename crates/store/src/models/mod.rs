//! Store models
//!
//! Row types and input payloads for users, lists and items.

/// Declares an integer row identifier newtype
macro_rules! row_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
            sqlx::Type,
        )]
        #[serde(transparent)]
        #[sqlx(transparent)]
        pub struct $name(pub i64);

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

mod item;
mod list;
mod user;

pub use item::{ItemId, NewItem, TodoItem, UpdateItemInput};
pub use list::{ListId, NewList, TodoList, UpdateListInput};
pub use user::{UserId, UserRecord};

/// Rejects titles that are empty after trimming
pub(crate) fn require_title(title: &str) -> crate::Result<()> {
    if title.trim().is_empty() {
        return Err(crate::StoreError::invalid("title", "must not be empty"));
    }
    Ok(())
}
