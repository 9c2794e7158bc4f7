use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    ValidatedJson,
    errors::responses::{
        BadRequestValidationResponse, ConflictResponse, NotFoundResponse,
        UnprocessableEntityResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ItemResult;
use crate::models::{
    CreateItem, Item, ItemAdded, ItemResponse, ItemUpdated, MessageResponse, UpdateItem,
};
use crate::service::ItemService;
use crate::store::ItemStore;

/// OpenAPI documentation for Items API
#[derive(OpenApi)]
#[openapi(
    paths(list_items, create_item, get_item, update_item, delete_item),
    components(
        schemas(
            Item,
            CreateItem,
            UpdateItem,
            ItemResponse,
            ItemAdded,
            ItemUpdated,
            MessageResponse
        ),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            ConflictResponse,
            UnprocessableEntityResponse
        )
    ),
    tags(
        (name = "Items", description = "Inventory item management")
    )
)]
pub struct ApiDoc;

/// Item routes relative to their mount point; the app nests them at `/items`.
pub fn router<S: ItemStore + 'static>(service: ItemService<S>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_items).post(create_item))
        .route(
            "/{name}",
            get(get_item).patch(update_item).delete(delete_item),
        )
        .with_state(shared_service)
}

/// List all items
#[utoipa::path(
    get,
    path = "",
    tag = "Items",
    responses(
        (status = 200, description = "All items in insertion order", body = Vec<Item>)
    )
)]
async fn list_items<S: ItemStore>(
    State(service): State<Arc<ItemService<S>>>,
) -> ItemResult<Json<Vec<Item>>> {
    let items = service.list_items().await?;
    Ok(Json(items))
}

/// Create a new item
#[utoipa::path(
    post,
    path = "",
    tag = "Items",
    request_body = CreateItem,
    responses(
        (status = 201, description = "Item created", body = ItemAdded),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse),
        (status = 422, response = UnprocessableEntityResponse)
    )
)]
async fn create_item<S: ItemStore>(
    State(service): State<Arc<ItemService<S>>>,
    ValidatedJson(input): ValidatedJson<CreateItem>,
) -> ItemResult<impl IntoResponse> {
    let added = service.create_item(input).await?;
    Ok((StatusCode::CREATED, Json(ItemAdded { added })))
}

/// Get an item by name
#[utoipa::path(
    get,
    path = "/{name}",
    tag = "Items",
    params(
        ("name" = String, Path, description = "Item name")
    ),
    responses(
        (status = 200, description = "Item found", body = ItemResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn get_item<S: ItemStore>(
    State(service): State<Arc<ItemService<S>>>,
    Path(name): Path<String>,
) -> ItemResult<Json<ItemResponse>> {
    let item = service.get_item(&name).await?;
    Ok(Json(ItemResponse { item }))
}

/// Partially update an item
///
/// A request without a body is treated as an empty patch.
#[utoipa::path(
    patch,
    path = "/{name}",
    tag = "Items",
    params(
        ("name" = String, Path, description = "Current item name")
    ),
    request_body = UpdateItem,
    responses(
        (status = 200, description = "Item updated", body = ItemUpdated),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse)
    )
)]
async fn update_item<S: ItemStore>(
    State(service): State<Arc<ItemService<S>>>,
    Path(name): Path<String>,
    input: Option<ValidatedJson<UpdateItem>>,
) -> ItemResult<Json<ItemUpdated>> {
    let input = input.map(|ValidatedJson(patch)| patch).unwrap_or_default();
    let updated = service.update_item(&name, input).await?;
    Ok(Json(ItemUpdated { updated }))
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/{name}",
    tag = "Items",
    params(
        ("name" = String, Path, description = "Item name")
    ),
    responses(
        (status = 200, description = "Item deleted", body = MessageResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn delete_item<S: ItemStore>(
    State(service): State<Arc<ItemService<S>>>,
    Path(name): Path<String>,
) -> ItemResult<Json<MessageResponse>> {
    service.delete_item(&name).await?;
    Ok(Json(MessageResponse::deleted()))
}
