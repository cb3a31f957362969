//! Ownership-scoped services
//!
//! Thin orchestration over the repositories: validate the payload, then run
//! the owner-qualified statement. Each operation takes the caller's
//! [`UserId`](crate::UserId) first.

mod items;
mod lists;

pub use items::ItemService;
pub use lists::ListService;
