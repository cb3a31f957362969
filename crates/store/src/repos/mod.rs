//! Repositories
//!
//! Every list and item query takes the caller's user id and joins through the
//! ownership chain (`users_lists`, and `lists_items` for items). Rows outside
//! the caller's ownership never match, so there is no fetch-then-check step.

mod items;
mod lists;
mod users;


pub use items::ItemRepo;
pub use lists::ListRepo;
pub use users::UserRepo;

use sqlx::{QueryBuilder, Sqlite};

/// Start an `UPDATE <table> SET ...` that assigns only the fields present
///
/// The caller appends the owner-qualified `WHERE` clause. At least one field
/// must be present.
pub(crate) fn partial_update<'args>(
    table: &'static str,
    title: Option<&str>,
    description: Option<&str>,
    done: Option<bool>,
) -> QueryBuilder<'args, Sqlite> {
    let mut qb = QueryBuilder::new(format!("UPDATE {table} SET "));

    let mut fields = qb.separated(", ");
    if let Some(title) = title {
        fields.push("title = ");
        fields.push_bind_unseparated(title.to_string());
    }
    if let Some(description) = description {
        fields.push("description = ");
        fields.push_bind_unseparated(description.to_string());
    }
    if let Some(done) = done {
        fields.push("done = ");
        fields.push_bind_unseparated(done);
    }

    qb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_update_only_present_fields() {
        let qb = partial_update("todo_lists", None, None, Some(true));
        assert_eq!(qb.sql(), "UPDATE todo_lists SET done = ?");

        let qb = partial_update("todo_items", Some("a"), Some(""), None);
        assert_eq!(qb.sql(), "UPDATE todo_items SET title = ?, description = ?");
    }
}
