use async_trait::async_trait;

use crate::error::ItemResult;
use crate::models::Item;

/// Repository trait for Item persistence
///
/// Implementations own the item collection and enforce name uniqueness
/// themselves: `insert` must check and write as one atomic step, so two
/// concurrent inserts of the same name yield exactly one success and one
/// [`ItemError::DuplicateName`](crate::error::ItemError::DuplicateName).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Persist a new item, assigning the next id and the creation time
    async fn insert(&self, name: &str, description: Option<String>) -> ItemResult<Item>;

    /// All items in ascending id order
    async fn list_all(&self) -> ItemResult<Vec<Item>>;

    /// Fetch one item or fail with `NotFound`
    async fn get_by_id(&self, id: i64) -> ItemResult<Item>;
}
