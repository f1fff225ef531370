use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        cart::CartDto,
        collection::SlotDeltaDto,
        user::PrivateUserInfoDto,
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        model::slot::SlotDelta,
        service::{cart::CartService, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get the current user's profile.
///
/// # Returns
/// - `200 OK` - Private profile of the authenticated user
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/api/v1/user",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Current user", body = PrivateUserInfoDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: AuthSession,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let user = UserService::new(&state.db).by_id(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_private_dto())))
}

/// Get the current user's cart.
#[utoipa::path(
    get,
    path = "/api/v1/user/cart",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Cart contents", body = CartDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_cart(
    State(state): State<AppState>,
    session: AuthSession,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let cart = CartService::new(&state.db, &state.caches)
        .get(user.id)
        .await?;

    Ok((StatusCode::OK, Json(cart.into_dto())))
}

/// Add or remove copies of a card in the current user's cart.
///
/// # Returns
/// - `200 OK` - The cart after the change
/// - `400 Bad Request` - Removing copies of a card that isn't in the cart
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Card not found
#[utoipa::path(
    post,
    path = "/api/v1/user/cart",
    tag = USER_TAG,
    request_body = SlotDeltaDto,
    responses(
        (status = 200, description = "Cart updated", body = CartDto),
        (status = 400, description = "Invalid slot change", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn edit_cart_slot(
    State(state): State<AppState>,
    session: AuthSession,
    payload: Result<Json<SlotDeltaDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;
    let Json(payload) = payload?;

    let cart = CartService::new(&state.db, &state.caches)
        .edit_slot(user.id, SlotDelta::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(cart.into_dto())))
}
