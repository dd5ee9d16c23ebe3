//! Item Service - validation in front of the repository

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item};
use crate::repository::ItemRepository;

/// Item service providing business logic operations
///
/// Holds no state of its own; every call is validated and then delegated to
/// the repository. Nothing is retried.
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new ItemService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new item
    ///
    /// Input is validated before the store is touched. The name is stored
    /// trimmed, so uniqueness is checked on the trimmed name.
    #[instrument(skip(self, input), fields(item_name = %input.name))]
    pub async fn create_item(&self, input: CreateItem) -> ItemResult<Item> {
        input.validate()?;

        self.repository
            .insert(input.name.trim(), input.description)
            .await
    }

    /// List all items in ascending id order
    #[instrument(skip(self))]
    pub async fn list_items(&self) -> ItemResult<Vec<Item>> {
        self.repository.list_all().await
    }

    /// Get an item by ID
    #[instrument(skip(self))]
    pub async fn get_item(&self, id: i64) -> ItemResult<Item> {
        if id <= 0 {
            return Err(ItemError::validation("id", "must be a positive integer"));
        }

        self.repository.get_by_id(id).await
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
