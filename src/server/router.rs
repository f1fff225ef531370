use axum::{
    routing::{get, patch, post},
    Router,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, RegisterDto, TokenDto},
        card::{
            CardDto, CardQueryResultDto, CardTypeDto, ExpansionDto, FoilingDto, LanguageDto,
            PostCardDto, PriceUpdateDto, StockedAmountUpdateDto,
        },
        cart::{CartDto, CartSlotDto},
        collection::{CollectionDto, CollectionInfoDto, CollectionSlotDto, SlotDeltaDto},
        user::PrivateUserInfoDto,
    },
    server::{
        controller::{
            auth::{self, AUTH_TAG},
            card::{self, CARD_TAG},
            collection::{self, COLLECTION_TAG},
            user::{self, USER_TAG},
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "cardstore", description = "Card marketplace API"),
    paths(
        auth::register,
        auth::login,
        card::query_cards,
        card::get_card,
        card::get_languages,
        card::get_expansions,
        card::post_card,
        card::update_card,
        card::update_price,
        card::update_stocked_amount,
        collection::get_collections,
        collection::create_collection,
        collection::get_collection,
        collection::edit_collection_slot,
        collection::update_collection_info,
        collection::delete_collection,
        user::get_user,
        user::get_cart,
        user::edit_cart_slot,
    ),
    components(schemas(
        ErrorDto,
        RegisterDto,
        LoginDto,
        TokenDto,
        CardDto,
        CardTypeDto,
        LanguageDto,
        ExpansionDto,
        FoilingDto,
        PostCardDto,
        PriceUpdateDto,
        StockedAmountUpdateDto,
        CardQueryResultDto,
        CartDto,
        CartSlotDto,
        CollectionDto,
        CollectionSlotDto,
        CollectionInfoDto,
        SlotDeltaDto,
        PrivateUserInfoDto,
    )),
    modifiers(&BearerAuth),
    tags(
        (name = AUTH_TAG, description = "Registration and login"),
        (name = CARD_TAG, description = "Card listings and search"),
        (name = COLLECTION_TAG, description = "User card collections"),
        (name = USER_TAG, description = "Current user and cart"),
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Builds the `/api/v1` routes together with the Swagger UI.
pub fn router() -> Router<AppState> {
    let api = Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/card", get(card::query_cards).post(card::post_card))
        .route("/card/languages", get(card::get_languages))
        .route("/card/expansions", get(card::get_expansions))
        .route("/card/price/{id}", patch(card::update_price))
        .route("/card/stocked/{id}", patch(card::update_stocked_amount))
        .route("/card/{id}", get(card::get_card).patch(card::update_card))
        .route("/collection", post(collection::create_collection))
        .route("/collection/all", get(collection::get_collections))
        .route(
            "/collection/{id}",
            get(collection::get_collection)
                .post(collection::edit_collection_slot)
                .patch(collection::update_collection_info)
                .delete(collection::delete_collection),
        )
        .route("/user", get(user::get_user))
        .route("/user/cart", get(user::get_cart).post(user::edit_cart_slot));

    Router::new()
        .nest("/api/v1", api)
        .merge(SwaggerUi::new("/api/v1/docs").url("/api/v1/openapi.json", ApiDoc::openapi()))
}
