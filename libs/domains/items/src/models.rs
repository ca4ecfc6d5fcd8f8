use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// An item as supplied by the client and held in the catalog.
///
/// This is the shape the listing and lookup endpoints expose: the
/// repository-assigned identifier is deliberately not part of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Display name, unique across the whole catalog (case-sensitive)
    pub name: String,
    /// Optional free-form description; serialized as null when absent
    pub description: Option<String>,
    /// Non-negative price
    pub price: f64,
    /// Free-form labels; order preserved, duplicates allowed
    #[serde(default)]
    pub tags: Vec<String>,
}

/// DTO for creating a new item
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateItem {
    #[validate(length(min = 1))]
    pub name: String,
    pub description: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<CreateItem> for Item {
    fn from(input: CreateItem) -> Self {
        Self {
            name: input.name,
            description: input.description,
            price: input.price,
            tags: input.tags,
        }
    }
}

/// An item plus the identifier the repository assigned at creation time.
///
/// Identifiers are positive, start at 1, strictly increase in creation
/// order and are never reused.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredItem {
    pub item_id: u64,
    pub item: Item,
}

/// DTO for the create-item response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateItemResponse {
    pub item_id: u64,
    pub item: Item,
    pub message: String,
}

/// DTO for the list-items response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListItemsResponse {
    pub items: Vec<Item>,
    pub count: usize,
}
