use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::domain::types::Item;
use crate::error::ResourceServiceError;
use crate::handlers::{json_body, path_param};
use crate::state::AppState;
use crate::usecase::item::{
    CreateItemUseCase, DeleteItemUseCase, GetItemUseCase, ItemInput, ListItemsUseCase,
    UpdateItemUseCase,
};

#[derive(Deserialize)]
pub struct ItemRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl From<ItemRequest> for ItemInput {
    fn from(body: ItemRequest) -> Self {
        Self {
            name: body.name,
            description: body.description,
        }
    }
}

#[derive(Serialize)]
pub struct ItemResponse {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
        }
    }
}

#[derive(Serialize)]
pub struct DeleteItemResponse {
    pub message: &'static str,
}

// ── GET /items ───────────────────────────────────────────────────────────────

pub async fn list_items(
    State(state): State<AppState>,
) -> Result<Json<Vec<ItemResponse>>, ResourceServiceError> {
    let usecase = ListItemsUseCase {
        repo: state.item_repo(),
    };
    let items = usecase.execute().await?;
    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}

// ── POST /items ──────────────────────────────────────────────────────────────

pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<ItemRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ItemResponse>), ResourceServiceError> {
    let body = json_body(payload)?;
    let usecase = CreateItemUseCase {
        repo: state.item_repo(),
    };
    let item = usecase.execute(body.into()).await?;
    Ok((StatusCode::CREATED, Json(item.into())))
}

// ── GET /items/{id} ──────────────────────────────────────────────────────────

pub async fn get_item(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<ItemResponse>, ResourceServiceError> {
    let id = path_param(id)?;
    let usecase = GetItemUseCase {
        repo: state.item_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

// ── PUT /items/{id} ──────────────────────────────────────────────────────────

pub async fn update_item(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<ItemRequest>, JsonRejection>,
) -> Result<Json<ItemResponse>, ResourceServiceError> {
    let id = path_param(id)?;
    let body = json_body(payload)?;
    let usecase = UpdateItemUseCase {
        repo: state.item_repo(),
    };
    Ok(Json(usecase.execute(id, body.into()).await?.into()))
}

// ── DELETE /items/{id} ───────────────────────────────────────────────────────

pub async fn delete_item(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<DeleteItemResponse>, ResourceServiceError> {
    let id = path_param(id)?;
    let usecase = DeleteItemUseCase {
        repo: state.item_repo(),
    };
    usecase.execute(id).await?;
    Ok(Json(DeleteItemResponse {
        message: "item deleted",
    }))
}
