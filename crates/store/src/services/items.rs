//! Item service
//!
//! Needs the list repository as well: listing items of a list the caller
//! does not own must fail rather than return an empty collection.

use crate::error::{Result, StoreError};
use crate::models::{ItemId, ListId, NewItem, TodoItem, UpdateItemInput, UserId};
use crate::repos::{ItemRepo, ListRepo};

/// Item operations for an authenticated user
#[derive(Debug, Clone)]
pub struct ItemService {
    items: ItemRepo,
    lists: ListRepo,
}

impl ItemService {
    pub fn new(items: ItemRepo, lists: ListRepo) -> Self {
        Self { items, lists }
    }

    /// Create an item in a list owned by `user_id`
    pub async fn create(&self, user_id: UserId, list_id: ListId, item: NewItem) -> Result<ItemId> {
        item.validate()?;
        self.items.create(user_id, list_id, &item).await
    }

    /// All items of a list owned by `user_id`
    ///
    /// Fails with not found for a missing or foreign list.
    pub async fn get_all(&self, user_id: UserId, list_id: ListId) -> Result<Vec<TodoItem>> {
        if !self.lists.is_owned_by(user_id, list_id).await? {
            return Err(StoreError::not_found("list", list_id));
        }
        self.items.list_for_owner(user_id, list_id).await
    }

    pub async fn get_by_id(&self, user_id: UserId, item_id: ItemId) -> Result<TodoItem> {
        self.items.get_for_owner(user_id, item_id).await
    }

    pub async fn update(
        &self,
        user_id: UserId,
        item_id: ItemId,
        input: UpdateItemInput,
    ) -> Result<()> {
        input.validate()?;
        self.items.update_for_owner(user_id, item_id, &input).await
    }

    pub async fn delete(&self, user_id: UserId, item_id: ItemId) -> Result<()> {
        self.items.delete_for_owner(user_id, item_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;
    use crate::models::NewList;

    async fn setup() -> (Database, ItemService, UserId, UserId, ListId) {
        let db = Database::in_memory().await.unwrap();
        let alice = db.users().create("alice", "h").await.unwrap();
        let bob = db.users().create("bob", "h").await.unwrap();
        let list = db.lists().create(alice, &NewList::new("L")).await.unwrap();
        let svc = ItemService::new(db.items(), db.lists());
        (db, svc, alice, bob, list)
    }

    #[tokio::test]
    async fn test_get_all_foreign_list_is_not_found() {
        let (_db, svc, alice, bob, list) = setup().await;
        svc.create(alice, list, NewItem::new("a")).await.unwrap();

        assert_eq!(svc.get_all(alice, list).await.unwrap().len(), 1);
        assert!(svc.get_all(bob, list).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_get_all_deleted_list_is_not_found() {
        let (db, svc, alice, _, list) = setup().await;
        db.lists().delete_for_owner(alice, list).await.unwrap();

        assert!(svc.get_all(alice, list).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_get_all_empty_owned_list() {
        let (_db, svc, alice, _, list) = setup().await;
        assert!(svc.get_all(alice, list).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_blank_title() {
        let (_db, svc, alice, _, list) = setup().await;
        let err = svc.create(alice, list, NewItem::new("")).await.unwrap_err();
        assert!(matches!(err, StoreError::Invalid { field: "title", .. }));
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let (_db, svc, alice, bob, list) = setup().await;
        let id = svc.create(alice, list, NewItem::new("a")).await.unwrap();

        let input = UpdateItemInput {
            done: Some(true),
            ..Default::default()
        };
        svc.update(alice, id, input).await.unwrap();
        assert!(svc.get_by_id(alice, id).await.unwrap().done);

        assert!(svc.delete(bob, id).await.unwrap_err().is_not_found());
        svc.delete(alice, id).await.unwrap();
        assert!(svc.get_by_id(alice, id).await.unwrap_err().is_not_found());
    }
}
