use async_trait::async_trait;
use chrono::{SubsecRound, Utc};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::{
    error::{ItemError, ItemResult},
    models::Item,
    repository::ItemRepository,
};

/// Process-local item store
///
/// One write lock covers the duplicate check and the insert. Ids come from
/// a counter that only moves forward.
#[derive(Default)]
pub struct InMemoryItemRepository {
    state: RwLock<State>,
}

#[derive(Default)]
struct State {
    items: BTreeMap<i64, Item>,
    last_id: i64,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn insert(&self, name: &str, description: Option<String>) -> ItemResult<Item> {
        let mut state = self.state.write().await;

        if state.items.values().any(|item| item.name == name) {
            return Err(ItemError::DuplicateName(name.to_owned()));
        }

        state.last_id += 1;
        let item = Item::new(
            state.last_id,
            name.to_owned(),
            description,
            Utc::now().trunc_subsecs(6),
        );
        state.items.insert(item.id, item.clone());

        tracing::info!(item_id = item.id, "Created item");
        Ok(item)
    }

    async fn list_all(&self) -> ItemResult<Vec<Item>> {
        let state = self.state.read().await;
        Ok(state.items.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> ItemResult<Item> {
        let state = self.state.read().await;
        state.items.get(&id).cloned().ok_or(ItemError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let repo = InMemoryItemRepository::new();

        let first = repo.insert("first", None).await.unwrap();
        let second = repo.insert("second", Some("d".into())).await.unwrap();

        assert_eq!(first.id(), 1);
        assert_eq!(second.id(), 2);
        assert_eq!(second.description(), Some("d"));
    }

    #[tokio::test]
    async fn test_duplicate_name_leaves_store_unchanged() {
        let repo = InMemoryItemRepository::new();
        repo.insert("dup", None).await.unwrap();

        let result = repo.insert("dup", Some("other".into())).await;
        assert!(matches!(result, Err(ItemError::DuplicateName(ref n)) if n == "dup"));
        assert_eq!(repo.list_all().await.unwrap().len(), 1);

        // failed insert does not burn an id
        assert_eq!(repo.insert("next", None).await.unwrap().id(), 2);
    }

    #[tokio::test]
    async fn test_names_are_case_sensitive() {
        let repo = InMemoryItemRepository::new();
        repo.insert("Widget", None).await.unwrap();
        assert!(repo.insert("widget", None).await.is_ok());
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let repo = InMemoryItemRepository::new();
        assert!(matches!(
            repo.get_by_id(7).await,
            Err(ItemError::NotFound(7))
        ));
    }

    #[tokio::test]
    async fn test_concurrent_duplicate_inserts() {
        let repo = Arc::new(InMemoryItemRepository::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.insert("race", None).await })
            })
            .collect();

        let mut ok = 0;
        let mut dup = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => ok += 1,
                Err(ItemError::DuplicateName(_)) => dup += 1,
                Err(other) => panic!("unexpected error: {:?}", other),
            }
        }

        assert_eq!(ok, 1);
        assert_eq!(dup, 7);
    }
}
