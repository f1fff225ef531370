use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, RegisterDto, TokenDto},
        user::PrivateUserInfoDto,
    },
    server::{
        error::AppError,
        middleware::session::token_cookie,
        model::user::{LoginParams, RegisterParams},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Creates an unverified user together with an empty cart.
///
/// # Returns
/// - `201 Created` - The new user's private profile
/// - `400 Bad Request` - Invalid fields, taken username or email taken by a verified user
/// - `500 Internal Server Error` - Database, cache or hashing error
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "User registered", body = PrivateUserInfoDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let user = AuthService::new(&state.db, &state.caches, &state.tokens)
        .register(RegisterParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_private_dto())))
}

/// Log in with a username and password.
///
/// The signed token is returned in the body and also set as the HTTP-only `token`
/// cookie. Either can be used to authenticate later requests.
///
/// # Returns
/// - `200 OK` - Token and its expiry
/// - `401 Unauthorized` - Incorrect username or password
/// - `500 Internal Server Error` - Database or signing error
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = TokenDto),
        (status = 401, description = "Incorrect username or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<LoginDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let issued = AuthService::new(&state.db, &state.caches, &state.tokens)
        .login(LoginParams::from_dto(payload))
        .await?;

    let jar = jar.add(token_cookie(&issued));

    Ok((
        StatusCode::OK,
        jar,
        Json(TokenDto {
            token: issued.token,
            expire: issued.expire,
        }),
    ))
}
