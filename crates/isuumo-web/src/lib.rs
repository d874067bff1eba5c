use anyhow::{Context, Result};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
};
use tracing::info;

use isuumo_core::Isuumo;

mod dto;
mod error;
mod gate;
mod handlers;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub(crate) struct WebState {
    pub(crate) app: Isuumo,
}

impl WebState {
    const fn new(app: Isuumo) -> Self {
        Self { app }
    }
}

/// Start the HTTP service and block until shutdown.
///
/// # Errors
/// Returns an error when the runtime cannot be created, the socket cannot be
/// bound, or the server exits with a runtime failure.
pub fn serve_web(app: Isuumo, host: &str, port: u16) -> Result<()> {
    let state = WebState::new(app);
    let bind_addr = format!("{host}:{port}");
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to build web runtime")?;

    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind(&bind_addr)
            .await
            .with_context(|| format!("failed to bind web server at {bind_addr}"))?;
        info!(addr = %listener.local_addr()?, "isuumo listening");

        axum::serve(listener, app_router(state))
            .with_graceful_shutdown(async {
                let _ = tokio::signal::ctrl_c().await;
            })
            .await
            .context("web server failed")
    })
}

pub(crate) fn app_router(state: WebState) -> Router {
    Router::new()
        .route("/initialize", post(handlers::initialize))
        .route("/api/chair/search", get(handlers::search_chairs))
        .route("/api/chair/low_priced", get(handlers::low_priced_chairs))
        .route(
            "/api/chair/search/condition",
            get(handlers::chair_search_condition),
        )
        .route("/api/chair/buy/{id}", post(handlers::buy_chair))
        .route("/api/chair/{id}", get(handlers::chair_detail))
        .route(
            "/api/chair",
            post(handlers::post_chairs).layer(DefaultBodyLimit::disable()),
        )
        .route("/api/estate/search", get(handlers::search_estates))
        .route("/api/estate/low_priced", get(handlers::low_priced_estates))
        .route(
            "/api/estate/search/condition",
            get(handlers::estate_search_condition),
        )
        .route("/api/estate/req_doc/{id}", post(handlers::request_estate_document))
        .route("/api/estate/nazotte", post(handlers::nazotte_search))
        .route("/api/estate/{id}", get(handlers::estate_detail))
        .route(
            "/api/estate",
            post(handlers::post_estates).layer(DefaultBodyLimit::disable()),
        )
        .route(
            "/api/recommended_estate/{id}",
            get(handlers::recommended_estates),
        )
        .layer(middleware::from_fn(gate::user_agent_gate))
        .with_state(state)
}
