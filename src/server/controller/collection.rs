use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        collection::{CollectionDto, CollectionInfoDto, SlotDeltaDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        model::{collection::CollectionInfoParams, slot::SlotDelta},
        service::collection::CollectionService,
        state::AppState,
    },
};

/// Tag for grouping collection endpoints in OpenAPI documentation
pub static COLLECTION_TAG: &str = "collection";

/// List the current user's collections.
///
/// # Returns
/// - `200 OK` - Every collection owned by the user
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database or cache error
#[utoipa::path(
    get,
    path = "/api/v1/collection/all",
    tag = COLLECTION_TAG,
    responses(
        (status = 200, description = "User collections", body = Vec<CollectionDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_collections(
    State(state): State<AppState>,
    session: AuthSession,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let collections = CollectionService::new(&state.db, &state.caches)
        .get_all(user.id)
        .await?;

    let collections_dto: Vec<CollectionDto> =
        collections.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(collections_dto)))
}

/// Create an empty collection.
///
/// # Returns
/// - `201 Created` - The new collection
/// - `400 Bad Request` - Name shorter than 3 characters
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - User isn't verified
/// - `500 Internal Server Error` - Database or cache error
#[utoipa::path(
    post,
    path = "/api/v1/collection",
    tag = COLLECTION_TAG,
    request_body = CollectionInfoDto,
    responses(
        (status = 201, description = "Collection created", body = CollectionDto),
        (status = 400, description = "Invalid collection data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not verified", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_collection(
    State(state): State<AppState>,
    session: AuthSession,
    payload: Result<Json<CollectionInfoDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;
    let Json(payload) = payload?;

    let collection = CollectionService::new(&state.db, &state.caches)
        .create(user.id, CollectionInfoParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(collection.into_dto())))
}

/// Get one of the current user's collections.
///
/// # Returns
/// - `200 OK` - The collection with its cards
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Missing or owned by another user
#[utoipa::path(
    get,
    path = "/api/v1/collection/{id}",
    tag = COLLECTION_TAG,
    params(("id" = i32, Path, description = "Collection id")),
    responses(
        (status = 200, description = "Collection found", body = CollectionDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Collection not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_collection(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let collection = CollectionService::new(&state.db, &state.caches)
        .get_by_id(user.id, id)
        .await?;

    Ok((StatusCode::OK, Json(collection.into_dto())))
}

/// Add or remove copies of a card in a collection.
///
/// A positive amount adds copies and a negative one removes them. The slot is
/// dropped once its amount reaches 0.
///
/// # Returns
/// - `200 OK` - The collection after the change
/// - `400 Bad Request` - Removing copies of a card that isn't in the collection
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - User isn't verified
/// - `404 Not Found` - Card or collection not found
#[utoipa::path(
    post,
    path = "/api/v1/collection/{id}",
    tag = COLLECTION_TAG,
    params(("id" = i32, Path, description = "Collection id")),
    request_body = SlotDeltaDto,
    responses(
        (status = 200, description = "Collection updated", body = CollectionDto),
        (status = 400, description = "Invalid slot change", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not verified", body = ErrorDto),
        (status = 404, description = "Card or collection not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn edit_collection_slot(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<i32>,
    payload: Result<Json<SlotDeltaDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;
    let Json(payload) = payload?;

    let collection = CollectionService::new(&state.db, &state.caches)
        .edit_slot(user.id, id, SlotDelta::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(collection.into_dto())))
}

/// Rename a collection and replace its description.
#[utoipa::path(
    patch,
    path = "/api/v1/collection/{id}",
    tag = COLLECTION_TAG,
    params(("id" = i32, Path, description = "Collection id")),
    request_body = CollectionInfoDto,
    responses(
        (status = 200, description = "Collection updated", body = CollectionDto),
        (status = 400, description = "Invalid collection data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not verified", body = ErrorDto),
        (status = 404, description = "Collection not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_collection_info(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<i32>,
    payload: Result<Json<CollectionInfoDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;
    let Json(payload) = payload?;

    let collection = CollectionService::new(&state.db, &state.caches)
        .update_info(user.id, id, CollectionInfoParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(collection.into_dto())))
}

/// Delete a collection.
///
/// # Returns
/// - `204 No Content` - Collection deleted
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - User isn't verified
/// - `404 Not Found` - Missing or owned by another user
#[utoipa::path(
    delete,
    path = "/api/v1/collection/{id}",
    tag = COLLECTION_TAG,
    params(("id" = i32, Path, description = "Collection id")),
    responses(
        (status = 204, description = "Collection deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not verified", body = ErrorDto),
        (status = 404, description = "Collection not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_collection(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    CollectionService::new(&state.db, &state.caches)
        .delete(user.id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
