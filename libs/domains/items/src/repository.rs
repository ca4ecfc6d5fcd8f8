use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item, StoredItem};

/// Repository trait for item persistence
///
/// This trait defines the data access interface for catalog items.
/// Implementations can use different storage backends (in-memory, etc.)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Create a new item, enforcing name uniqueness
    async fn create(&self, input: CreateItem) -> ItemResult<StoredItem>;

    /// Get an item by its identifier
    async fn get_by_id(&self, id: u64) -> ItemResult<Option<StoredItem>>;

    /// List all items in creation order (ascending identifier)
    async fn list_all(&self) -> ItemResult<Vec<StoredItem>>;

    /// Count all items
    async fn count(&self) -> ItemResult<usize>;
}

/// In-memory implementation of ItemRepository.
///
/// The whole catalog lives behind one `RwLock`: the duplicate-name check,
/// identifier allocation and insertion all happen under a single write
/// guard, so two concurrent creates with the same name can never both
/// succeed, and reads only ever observe fully inserted items.
#[derive(Debug, Default, Clone)]
pub struct InMemoryItemRepository {
    state: Arc<RwLock<CatalogState>>,
}

#[derive(Debug, Default)]
struct CatalogState {
    /// Items keyed by identifier; BTreeMap iteration yields creation order.
    items: BTreeMap<u64, Item>,
    /// Highest identifier handed out so far. Identifiers are never reused.
    last_item_id: u64,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn create(&self, input: CreateItem) -> ItemResult<StoredItem> {
        let mut state = self.state.write().await;

        // Uniqueness is a case-sensitive exact match on the name.
        if state.items.values().any(|i| i.name == input.name) {
            return Err(ItemError::DuplicateName(input.name));
        }

        // Allocate after the uniqueness check: a failed create must not
        // consume an identifier.
        let item_id = state.last_item_id + 1;
        let item = Item::from(input);
        state.items.insert(item_id, item.clone());
        state.last_item_id = item_id;

        tracing::info!(item_id, name = %item.name, "Created item");
        Ok(StoredItem { item_id, item })
    }

    async fn get_by_id(&self, id: u64) -> ItemResult<Option<StoredItem>> {
        let state = self.state.read().await;
        Ok(state.items.get(&id).map(|item| StoredItem {
            item_id: id,
            item: item.clone(),
        }))
    }

    async fn list_all(&self) -> ItemResult<Vec<StoredItem>> {
        let state = self.state.read().await;
        Ok(state
            .items
            .iter()
            .map(|(&item_id, item)| StoredItem {
                item_id,
                item: item.clone(),
            })
            .collect())
    }

    async fn count(&self) -> ItemResult<usize> {
        let state = self.state.read().await;
        Ok(state.items.len())
    }
}
