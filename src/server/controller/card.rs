use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        card::{
            CardDto, CardQueryParams, CardQueryResultDto, ExpansionDto, LanguageDto, PostCardDto,
            PriceUpdateDto, StockedAmountUpdateDto,
        },
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            session::AuthSession,
        },
        model::{card::CardParams, card_query::CardQuery},
        service::card::CardService,
        state::AppState,
    },
};

/// Tag for grouping card endpoints in OpenAPI documentation
pub static CARD_TAG: &str = "card";

/// Search cards.
///
/// Every filter is optional. Structured filters are combined with AND while the
/// space separated keywords in `t` widen the search: a card matches when any keyword
/// matches its language, type, expansion, name or card key. Price bounds are exclusive.
///
/// # Returns
/// - `200 OK` - One page of matching cards with the total match count
/// - `400 Bad Request` - Unparseable query, too many keywords or a page out of range
/// - `500 Internal Server Error` - Database or cache error
#[utoipa::path(
    get,
    path = "/api/v1/card",
    tag = CARD_TAG,
    params(CardQueryParams),
    responses(
        (status = 200, description = "Matching cards", body = CardQueryResultDto),
        (status = 400, description = "Invalid card query", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn query_cards(
    State(state): State<AppState>,
    params: Result<Query<CardQueryParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) =
        params.map_err(|_| AppError::BadRequest("invalid card query".to_string()))?;
    let query = CardQuery::from_params(params, state.query_keyword_limit)?;

    let result = CardService::new(&state.db, &state.caches)
        .query(query, state.card_page_size)
        .await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}

/// Get a single card.
///
/// # Returns
/// - `200 OK` - The card
/// - `404 Not Found` - No card with that id
/// - `500 Internal Server Error` - Database or cache error
#[utoipa::path(
    get,
    path = "/api/v1/card/{id}",
    tag = CARD_TAG,
    params(("id" = i32, Path, description = "Card id")),
    responses(
        (status = 200, description = "Card found", body = CardDto),
        (status = 404, description = "Card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_card(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let card = CardService::new(&state.db, &state.caches)
        .get_by_id(id)
        .await?;

    Ok((StatusCode::OK, Json(card.into_dto())))
}

/// List every card language.
#[utoipa::path(
    get,
    path = "/api/v1/card/languages",
    tag = CARD_TAG,
    responses(
        (status = 200, description = "All languages", body = Vec<LanguageDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_languages(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let languages = CardService::new(&state.db, &state.caches)
        .languages()
        .await?;

    let languages_dto: Vec<LanguageDto> = languages.into_iter().map(|l| l.into_dto()).collect();

    Ok((StatusCode::OK, Json(languages_dto)))
}

/// List every expansion.
#[utoipa::path(
    get,
    path = "/api/v1/card/expansions",
    tag = CARD_TAG,
    responses(
        (status = 200, description = "All expansions", body = Vec<ExpansionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_expansions(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let expansions = CardService::new(&state.db, &state.caches)
        .expansions()
        .await?;

    let expansions_dto: Vec<ExpansionDto> =
        expansions.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(expansions_dto)))
}

/// Post a new card listing.
///
/// # Access Control
/// - `Admin` and `Verified` - Only verified admins can post cards
///
/// # Returns
/// - `201 Created` - The stored card
/// - `400 Bad Request` - Invalid fields or unknown reference ids
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - User isn't a verified admin
/// - `500 Internal Server Error` - Database or cache error
#[utoipa::path(
    post,
    path = "/api/v1/card",
    tag = CARD_TAG,
    request_body = PostCardDto,
    responses(
        (status = 201, description = "Card created", body = CardDto),
        (status = 400, description = "Invalid card data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a verified admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn post_card(
    State(state): State<AppState>,
    session: AuthSession,
    payload: Result<Json<PostCardDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin, Permission::Verified])
        .await?;
    let Json(payload) = payload?;

    let card = CardService::new(&state.db, &state.caches)
        .add(user.id, CardParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(card.into_dto())))
}

/// Replace every field of a card listing.
///
/// # Access Control
/// - `Admin` and `Verified` - Only verified admins can edit cards
///
/// # Returns
/// - `200 OK` - The updated card
/// - `400 Bad Request` - Invalid fields or unknown reference ids
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - User isn't a verified admin
/// - `404 Not Found` - No card with that id
/// - `500 Internal Server Error` - Database or cache error
#[utoipa::path(
    patch,
    path = "/api/v1/card/{id}",
    tag = CARD_TAG,
    params(("id" = i32, Path, description = "Card id")),
    request_body = PostCardDto,
    responses(
        (status = 200, description = "Card updated", body = CardDto),
        (status = 400, description = "Invalid card data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a verified admin", body = ErrorDto),
        (status = 404, description = "Card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_card(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<i32>,
    payload: Result<Json<PostCardDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin, Permission::Verified])
        .await?;
    let Json(payload) = payload?;

    let card = CardService::new(&state.db, &state.caches)
        .update(id, CardParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(card.into_dto())))
}

/// Change the price of a card listing.
///
/// # Access Control
/// - `Admin` and `Verified` - Only verified admins can edit cards
///
/// # Returns
/// - `200 OK` - The updated card
/// - `400 Bad Request` - Price isn't greater than 0
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - User isn't a verified admin
/// - `404 Not Found` - No card with that id
#[utoipa::path(
    patch,
    path = "/api/v1/card/price/{id}",
    tag = CARD_TAG,
    params(("id" = i32, Path, description = "Card id")),
    request_body = PriceUpdateDto,
    responses(
        (status = 200, description = "Price updated", body = CardDto),
        (status = 400, description = "Invalid price", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a verified admin", body = ErrorDto),
        (status = 404, description = "Card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_price(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<i32>,
    payload: Result<Json<PriceUpdateDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin, Permission::Verified])
        .await?;
    let Json(payload) = payload?;

    let card = CardService::new(&state.db, &state.caches)
        .update_price(id, payload.new_price)
        .await?;

    Ok((StatusCode::OK, Json(card.into_dto())))
}

/// Change the stocked amount of a card listing.
///
/// # Access Control
/// - `Admin` and `Verified` - Only verified admins can edit cards
///
/// # Returns
/// - `200 OK` - The updated card
/// - `400 Bad Request` - Negative amount
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - User isn't a verified admin
/// - `404 Not Found` - No card with that id
#[utoipa::path(
    patch,
    path = "/api/v1/card/stocked/{id}",
    tag = CARD_TAG,
    params(("id" = i32, Path, description = "Card id")),
    request_body = StockedAmountUpdateDto,
    responses(
        (status = 200, description = "Stocked amount updated", body = CardDto),
        (status = 400, description = "Invalid amount", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a verified admin", body = ErrorDto),
        (status = 404, description = "Card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_stocked_amount(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<i32>,
    payload: Result<Json<StockedAmountUpdateDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin, Permission::Verified])
        .await?;
    let Json(payload) = payload?;

    let card = CardService::new(&state.db, &state.caches)
        .update_in_stock_amount(id, payload.new_amount)
        .await?;

    Ok((StatusCode::OK, Json(card.into_dto())))
}
