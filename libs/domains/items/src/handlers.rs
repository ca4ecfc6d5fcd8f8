use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    AuditEvent, AuditOutcome, ValidatedJson,
    errors::responses::{BadRequestResponse, NotFoundResponse, ValidationErrorResponse},
    extract_ip_from_headers, extract_user_agent,
};
use serde_json::json;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ItemResult;
use crate::models::{CreateItem, CreateItemResponse, Item, ListItemsResponse};
use crate::repository::ItemRepository;
use crate::service::ItemService;

/// OpenAPI documentation for the Items API
#[derive(OpenApi)]
#[openapi(
    paths(list_items, create_item, get_item),
    components(
        schemas(Item, CreateItem, CreateItemResponse, ListItemsResponse),
        responses(NotFoundResponse, BadRequestResponse, ValidationErrorResponse)
    ),
    tags(
        (name = "items", description = "Item catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the items router with all HTTP endpoints
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/{id}", get(get_item))
        .with_state(shared_service)
}

/// List all items in creation order
#[utoipa::path(
    get,
    path = "",
    tag = "items",
    responses(
        (status = 200, description = "All items currently in the catalog", body = ListItemsResponse)
    )
)]
async fn list_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
) -> ItemResult<Json<ListItemsResponse>> {
    let items = service.list_items().await?;

    let response = ListItemsResponse {
        count: items.len(),
        items: items.into_iter().map(|stored| stored.item).collect(),
    };

    Ok(Json(response))
}

/// Create a new item
#[utoipa::path(
    post,
    path = "",
    tag = "items",
    request_body = CreateItem,
    responses(
        (status = 201, description = "Item created successfully", body = CreateItemResponse),
        (status = 400, response = BadRequestResponse),
        (status = 422, response = ValidationErrorResponse)
    )
)]
async fn create_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    headers: HeaderMap,
    ValidatedJson(input): ValidatedJson<CreateItem>,
) -> ItemResult<impl IntoResponse> {
    let stored = service.create_item(input).await?;

    // Audit log successful creation
    AuditEvent::new(
        None, // TODO: Add user_id when authentication is implemented
        "item.create",
        Some(format!("item:{}", stored.item_id)),
        AuditOutcome::Success,
    )
    .with_ip(extract_ip_from_headers(&headers))
    .with_user_agent(extract_user_agent(&headers))
    .with_details(json!({
        "item_name": stored.item.name,
        "price": stored.item.price,
    }))
    .log();

    let response = CreateItemResponse {
        item_id: stored.item_id,
        item: stored.item,
        message: "Item created successfully".to_string(),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Get an item by its identifier
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "items",
    params(
        ("id" = u64, Path, description = "Item identifier")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn get_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    Path(id): Path<u64>,
) -> ItemResult<Json<Item>> {
    let stored = service.get_item(id).await?;
    Ok(Json(stored.item))
}
