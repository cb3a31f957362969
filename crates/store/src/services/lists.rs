//! List service

use crate::error::Result;
use crate::models::{ListId, NewList, TodoList, UpdateListInput, UserId};
use crate::repos::ListRepo;

/// List operations for an authenticated user
#[derive(Debug, Clone)]
pub struct ListService {
    lists: ListRepo,
}

impl ListService {
    pub fn new(lists: ListRepo) -> Self {
        Self { lists }
    }

    /// Create a list owned by `user_id`
    pub async fn create(&self, user_id: UserId, list: NewList) -> Result<ListId> {
        list.validate()?;
        self.lists.create(user_id, &list).await
    }

    /// All lists owned by `user_id`
    pub async fn get_all(&self, user_id: UserId) -> Result<Vec<TodoList>> {
        self.lists.list_for_owner(user_id).await
    }

    pub async fn get_by_id(&self, user_id: UserId, list_id: ListId) -> Result<TodoList> {
        self.lists.get_for_owner(user_id, list_id).await
    }

    /// Partially update a list; an input with no fields is rejected
    pub async fn update(
        &self,
        user_id: UserId,
        list_id: ListId,
        input: UpdateListInput,
    ) -> Result<()> {
        input.validate()?;
        self.lists.update_for_owner(user_id, list_id, &input).await
    }

    /// Delete a list together with its items
    pub async fn delete(&self, user_id: UserId, list_id: ListId) -> Result<()> {
        self.lists.delete_for_owner(user_id, list_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;
    use crate::error::StoreError;

    async fn setup() -> (ListService, UserId, UserId) {
        let db = Database::in_memory().await.unwrap();
        let alice = db.users().create("alice", "h").await.unwrap();
        let bob = db.users().create("bob", "h").await.unwrap();
        (ListService::new(db.lists()), alice, bob)
    }

    #[tokio::test]
    async fn test_create_rejects_blank_title() {
        let (svc, alice, _) = setup().await;
        let err = svc.create(alice, NewList::new("  ")).await.unwrap_err();
        assert!(matches!(err, StoreError::Invalid { field: "title", .. }));
        assert!(svc.get_all(alice).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_lifecycle() {
        let (svc, alice, bob) = setup().await;

        let id = svc.create(alice, NewList::new("trip")).await.unwrap();
        assert_eq!(svc.get_all(alice).await.unwrap().len(), 1);
        assert!(svc.get_all(bob).await.unwrap().is_empty());

        let input = UpdateListInput {
            title: Some("holiday".into()),
            ..Default::default()
        };
        svc.update(alice, id, input).await.unwrap();
        assert_eq!(svc.get_by_id(alice, id).await.unwrap().title, "holiday");

        assert!(svc.delete(bob, id).await.unwrap_err().is_not_found());
        svc.delete(alice, id).await.unwrap();
        assert!(svc.get_by_id(alice, id).await.unwrap_err().is_not_found());
    }
}
