use axum::{
    Json, Router,
    http::{StatusCode, Uri},
    routing::get,
};

use crate::{
    graphql::graphql_handler,
    response::ApiResponse,
    state::AppState,
};

pub mod doc;
pub mod health;

// Build the router without binding state; it will be provided at the top level.
pub fn create_app_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/graphql", get(graphql_handler).post(graphql_handler))
        .merge(doc::scalar_docs())
        .fallback(not_found)
}

async fn not_found(uri: Uri) -> (StatusCode, Json<ApiResponse<()>>) {
    let body = ApiResponse::error(format!("No route for {}", uri.path()));
    (StatusCode::NOT_FOUND, Json(body))
}
