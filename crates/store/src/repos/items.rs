//! Item repository
//!
//! Items are reached through `lists_items` and then `users_lists`, so every
//! statement resolves ownership item → list → user.

use sqlx::SqlitePool;
use tracing::debug;

use super::partial_update;
use crate::error::{Result, StoreError};
use crate::models::{ItemId, ListId, NewItem, TodoItem, UpdateItemInput, UserId};

/// Items owned by `user_id` (bind: user_id, item_id)
const OWNED_ITEM: &str = r#"
    SELECT li.item_id FROM lists_items li
    INNER JOIN users_lists ul ON ul.list_id = li.list_id
    WHERE ul.user_id = ? AND li.item_id = ?
"#;

/// Item repository
#[derive(Debug, Clone)]
pub struct ItemRepo {
    pool: SqlitePool,
}

impl ItemRepo {
    /// Create a new item repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert an item into a list the user owns
    ///
    /// The link row is inserted only when the list belongs to `user_id`;
    /// otherwise the transaction is dropped and the item insert rolls back.
    pub async fn create(&self, user_id: UserId, list_id: ListId, item: &NewItem) -> Result<ItemId> {
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query("INSERT INTO todo_items (title, description, done) VALUES (?, ?, ?)")
            .bind(&item.title)
            .bind(&item.description)
            .bind(item.done)
            .execute(&mut *tx)
            .await?
            .last_insert_rowid();

        let linked = sqlx::query(
            r#"
            INSERT INTO lists_items (list_id, item_id)
            SELECT ul.list_id, ? FROM users_lists ul
            WHERE ul.user_id = ? AND ul.list_id = ?
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(list_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if linked == 0 {
            return Err(StoreError::not_found("list", list_id));
        }

        tx.commit().await?;

        let id = ItemId(id);
        debug!(user_id = %user_id, list_id = %list_id, item_id = %id, "Created item");
        Ok(id)
    }

    /// All items of a list the user owns, ordered by id
    ///
    /// Returns an empty vector for an unowned list; callers check ownership
    /// first when they need to tell the two apart.
    pub async fn list_for_owner(&self, user_id: UserId, list_id: ListId) -> Result<Vec<TodoItem>> {
        let items = sqlx::query_as::<_, TodoItem>(
            r#"
            SELECT ti.id, ti.title, ti.description, ti.done
            FROM todo_items ti
            INNER JOIN lists_items li ON li.item_id = ti.id
            INNER JOIN users_lists ul ON ul.list_id = li.list_id
            WHERE ul.user_id = ? AND li.list_id = ?
            ORDER BY ti.id
            "#,
        )
        .bind(user_id)
        .bind(list_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    /// Get an item by id if the user owns its list
    pub async fn get_for_owner(&self, user_id: UserId, item_id: ItemId) -> Result<TodoItem> {
        sqlx::query_as::<_, TodoItem>(
            r#"
            SELECT ti.id, ti.title, ti.description, ti.done
            FROM todo_items ti
            INNER JOIN lists_items li ON li.item_id = ti.id
            INNER JOIN users_lists ul ON ul.list_id = li.list_id
            WHERE ul.user_id = ? AND ti.id = ?
            "#,
        )
        .bind(user_id)
        .bind(item_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| StoreError::not_found("item", item_id))
    }

    /// Apply a partial update to an item the user owns
    pub async fn update_for_owner(
        &self,
        user_id: UserId,
        item_id: ItemId,
        input: &UpdateItemInput,
    ) -> Result<()> {
        if input.is_empty() {
            return Err(StoreError::invalid("update", "update has no values"));
        }

        let mut qb = partial_update(
            "todo_items",
            input.title.as_deref(),
            input.description.as_deref(),
            input.done,
        );
        qb.push(
            " WHERE id IN (SELECT li.item_id FROM lists_items li \
             INNER JOIN users_lists ul ON ul.list_id = li.list_id WHERE ul.user_id = ",
        )
        .push_bind(user_id)
        .push(" AND li.item_id = ")
        .push_bind(item_id)
        .push(")");

        let result = qb.build().execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::not_found("item", item_id));
        }

        debug!(user_id = %user_id, item_id = %item_id, "Updated item");
        Ok(())
    }

    /// Delete an item the user owns, with its list link
    pub async fn delete_for_owner(&self, user_id: UserId, item_id: ItemId) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let deleted = sqlx::query(&format!("DELETE FROM todo_items WHERE id IN ({OWNED_ITEM})"))
            .bind(user_id)
            .bind(item_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if deleted == 0 {
            return Err(StoreError::not_found("item", item_id));
        }

        // Already gone via ON DELETE CASCADE when foreign keys are on.
        sqlx::query("DELETE FROM lists_items WHERE item_id = ?")
            .bind(item_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        debug!(user_id = %user_id, item_id = %item_id, "Deleted item");
        Ok(())
    }
}
