//! List repository
//!
//! All statements are qualified by the `users_lists` ownership relation.

use sqlx::SqlitePool;
use tracing::debug;

use super::partial_update;
use crate::error::{Result, StoreError};
use crate::models::{ListId, NewList, TodoList, UpdateListInput, UserId};

/// Lists owned by `user_id` (bind: user_id, list_id)
const OWNED_LIST: &str = "SELECT list_id FROM users_lists WHERE user_id = ? AND list_id = ?";

/// List repository
#[derive(Debug, Clone)]
pub struct ListRepo {
    pool: SqlitePool,
}

impl ListRepo {
    /// Create a new list repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a list and link it to its owner in one transaction
    pub async fn create(&self, user_id: UserId, list: &NewList) -> Result<ListId> {
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query("INSERT INTO todo_lists (title, description, done) VALUES (?, ?, ?)")
            .bind(&list.title)
            .bind(&list.description)
            .bind(list.done)
            .execute(&mut *tx)
            .await?
            .last_insert_rowid();

        // A failure here drops `tx`, rolling back the list insert.
        sqlx::query("INSERT INTO users_lists (user_id, list_id) VALUES (?, ?)")
            .bind(user_id)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        let id = ListId(id);
        debug!(user_id = %user_id, list_id = %id, "Created list");
        Ok(id)
    }

    /// All lists owned by the user, ordered by id
    pub async fn list_for_owner(&self, user_id: UserId) -> Result<Vec<TodoList>> {
        let lists = sqlx::query_as::<_, TodoList>(
            r#"
            SELECT tl.id, tl.title, tl.description, tl.done
            FROM todo_lists tl
            INNER JOIN users_lists ul ON ul.list_id = tl.id
            WHERE ul.user_id = ?
            ORDER BY tl.id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(lists)
    }

    /// Get a list by id if the user owns it
    pub async fn get_for_owner(&self, user_id: UserId, list_id: ListId) -> Result<TodoList> {
        sqlx::query_as::<_, TodoList>(
            r#"
            SELECT tl.id, tl.title, tl.description, tl.done
            FROM todo_lists tl
            INNER JOIN users_lists ul ON ul.list_id = tl.id
            WHERE ul.user_id = ? AND ul.list_id = ?
            "#,
        )
        .bind(user_id)
        .bind(list_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| StoreError::not_found("list", list_id))
    }

    /// Check whether the user owns the list
    pub async fn is_owned_by(&self, user_id: UserId, list_id: ListId) -> Result<bool> {
        let owned: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM users_lists WHERE user_id = ? AND list_id = ?)",
        )
        .bind(user_id)
        .bind(list_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(owned)
    }

    /// Apply a partial update to a list the user owns
    pub async fn update_for_owner(
        &self,
        user_id: UserId,
        list_id: ListId,
        input: &UpdateListInput,
    ) -> Result<()> {
        if input.is_empty() {
            return Err(StoreError::invalid("update", "update has no values"));
        }

        let mut qb = partial_update(
            "todo_lists",
            input.title.as_deref(),
            input.description.as_deref(),
            input.done,
        );
        qb.push(" WHERE id IN (SELECT list_id FROM users_lists WHERE user_id = ")
            .push_bind(user_id)
            .push(" AND list_id = ")
            .push_bind(list_id)
            .push(")");

        let result = qb.build().execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::not_found("list", list_id));
        }

        debug!(user_id = %user_id, list_id = %list_id, "Updated list");
        Ok(())
    }

    /// Delete a list the user owns, with its items and relations
    ///
    /// Runs in one transaction: either everything is removed or nothing is.
    pub async fn delete_for_owner(&self, user_id: UserId, list_id: ListId) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let items = sqlx::query(
            r#"
            DELETE FROM todo_items WHERE id IN (
                SELECT li.item_id FROM lists_items li
                INNER JOIN users_lists ul ON ul.list_id = li.list_id
                WHERE ul.user_id = ? AND ul.list_id = ?
            )
            "#,
        )
        .bind(user_id)
        .bind(list_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        sqlx::query(&format!(
            "DELETE FROM lists_items WHERE list_id IN ({OWNED_LIST})"
        ))
        .bind(user_id)
        .bind(list_id)
        .execute(&mut *tx)
        .await?;

        let deleted = sqlx::query(&format!("DELETE FROM todo_lists WHERE id IN ({OWNED_LIST})"))
            .bind(user_id)
            .bind(list_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if deleted == 0 {
            return Err(StoreError::not_found("list", list_id));
        }

        sqlx::query("DELETE FROM users_lists WHERE user_id = ? AND list_id = ?")
            .bind(user_id)
            .bind(list_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        debug!(user_id = %user_id, list_id = %list_id, items, "Deleted list");
        Ok(())
    }
}
