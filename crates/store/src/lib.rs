//! Tasks - Store
//!
//! Relational persistence for users, lists and items, plus the
//! ownership-scoped services the HTTP layer calls.
//!
//! # Ownership
//!
//! A list belongs to exactly one user (`users_lists`), an item to exactly one
//! list (`lists_items`). Every list and item statement is qualified by the
//! caller's user id, so a row owned by someone else is indistinguishable from
//! a missing one.
//!
//! # Example
//!
//! ```ignore
//! use tasks_store::{Database, ListService, NewList};
//!
//! let db = Database::open("data/tasks.db").await?;
//! let user = db.users().create("alice", &hash).await?;
//! let lists = ListService::new(db.lists());
//! let id = lists.create(user, NewList::new("groceries")).await?;
//! ```

pub mod db;
pub mod error;
pub mod models;
pub mod repos;
pub mod services;

pub use db::Database;
pub use error::{Result, StoreError};
pub use models::{
    ItemId, ListId, NewItem, NewList, TodoItem, TodoList, UpdateItemInput, UpdateListInput,
    UserId, UserRecord,
};
pub use repos::{ItemRepo, ListRepo, UserRepo};
pub use services::{ItemService, ListService};

// Re-exported so callers can name `sqlx::Error` without a direct dependency.
pub use sqlx;
