use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        item::{CreateItemDto, ItemDto, UpdateItemDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::item::{CreateItemParam, UpdateItemParam},
        service::item::ItemService,
        state::AppState,
    },
};

pub static ITEM_TAG: &str = "item";

#[utoipa::path(
    get,
    path = "/api/collection",
    tag = ITEM_TAG,
    responses(
        (status = 200, description = "Successfully retrieved items", body = Vec<ItemDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn list_items(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt_secret, &headers).require()?;

    let items = ItemService::new(&state.db).list().await?;

    let dto: Vec<ItemDto> = items.into_iter().map(|item| item.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    post,
    path = "/api/collection",
    tag = ITEM_TAG,
    request_body = CreateItemDto,
    responses(
        (status = 201, description = "Successfully created item", body = ItemDto),
        (status = 400, description = "Invalid item data", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateItemDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt_secret, &headers).require()?;
    let Json(payload) = payload?;

    let item = ItemService::new(&state.db)
        .create(CreateItemParam::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(item.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/collection/{id}",
    tag = ITEM_TAG,
    params(
        ("id" = i32, Path, description = "Item ID")
    ),
    request_body = UpdateItemDto,
    responses(
        (status = 200, description = "Successfully updated item", body = ItemDto),
        (status = 400, description = "Invalid item data", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    payload: Result<Json<UpdateItemDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt_secret, &headers).require()?;
    let Json(payload) = payload?;

    let Some(item) = ItemService::new(&state.db)
        .update(id, UpdateItemParam::from(payload))
        .await?
    else {
        return Err(AppError::NotFound("Not Found".to_string()));
    };

    Ok((StatusCode::OK, Json(item.into_dto())))
}

/// Same as `update_item`; both verbs merge the provided fields.
#[utoipa::path(
    patch,
    path = "/api/collection/{id}",
    tag = ITEM_TAG,
    params(
        ("id" = i32, Path, description = "Item ID")
    ),
    request_body = UpdateItemDto,
    responses(
        (status = 200, description = "Successfully updated item", body = ItemDto),
        (status = 400, description = "Invalid item data", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn patch_item(
    state: State<AppState>,
    headers: HeaderMap,
    id: Path<i32>,
    payload: Result<Json<UpdateItemDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    update_item(state, headers, id, payload).await
}

#[utoipa::path(
    delete,
    path = "/api/collection/{id}",
    tag = ITEM_TAG,
    params(
        ("id" = i32, Path, description = "Item ID")
    ),
    responses(
        (status = 204, description = "Item deleted (or did not exist)"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt_secret, &headers).require()?;

    ItemService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
