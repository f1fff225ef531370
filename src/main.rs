mod model;
mod server;

use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::server::{
    config::Config, error::AppError, router, service::auth::token::TokenService, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::load()?;

    let db = startup::connect_to_database(&config).await?;
    let caches = startup::build_caches(&config)?;
    let tokens = TokenService::new(&config.auth_key, &config.jwt_realm);

    let state = AppState::new(
        db,
        caches,
        tokens,
        config.cards_page_size,
        config.query_keyword_limit,
    );

    let app = router::router()
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.address()).await?;
    tracing::info!("Listening on {}", config.address());

    axum::serve(listener, app).await?;

    Ok(())
}
