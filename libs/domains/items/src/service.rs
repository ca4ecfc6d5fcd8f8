use std::sync::Arc;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, StoredItem};
use crate::repository::ItemRepository;

/// Service layer for item business logic
///
/// Field-shape validation happens in the HTTP layer before input reaches
/// this service; the only business rule, name uniqueness, is enforced by
/// the repository itself.
#[derive(Clone)]
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new item
    pub async fn create_item(&self, input: CreateItem) -> ItemResult<StoredItem> {
        self.repository.create(input).await
    }

    /// Get an item by its identifier
    pub async fn get_item(&self, id: u64) -> ItemResult<StoredItem> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ItemError::NotFound(id))
    }

    /// List all items in creation order
    pub async fn list_items(&self) -> ItemResult<Vec<StoredItem>> {
        self.repository.list_all().await
    }

    /// Count all items
    pub async fn count_items(&self) -> ItemResult<usize> {
        self.repository.count().await
    }
}
