use crate::registry::Cookbook;
use axum::Router;
use axum::routing::{get, post};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;

pub mod error;
mod routes;

pub use error::{ApiError, ErrorBody};
pub use routes::{ParseRequest, ParseResponse, SummaryQuery};

/// State shared by every request handler.
///
/// Inserts hold the write lock; a summary holds the read lock for the whole
/// resolution so it never observes a half-registered entry.
#[derive(Clone, Default)]
pub struct AppState {
    pub cookbook: Arc<RwLock<Cookbook>>,
}

impl AppState {
    pub fn new(cookbook: Cookbook) -> Self {
        Self {
            cookbook: Arc::new(RwLock::new(cookbook)),
        }
    }
}

/// Build the router with all cookbook endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/parse", post(routes::parse))
        .route("/entry", post(routes::create_entry))
        .route("/summary", get(routes::summary))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds `addr` and serves the cookbook API until the process exits.
pub async fn serve(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("cookbook server listening on {}", listener.local_addr()?);
    axum::serve(listener, build_router(state)).await
}
