//! GraphQL surface of the service: one mutation to place an order and a
//! liveness query.

use std::sync::Arc;

use async_graphql::{EmptySubscription, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use sea_orm::DatabaseConnection;

use crate::{context::RequestContext, state::AppState};

pub mod mutation;
pub mod query;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

pub type OrderSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with the database connection injected as context data.
pub fn build_schema(db: Arc<DatabaseConnection>) -> OrderSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(db)
        .finish()
}

/// Schema in SDL form, for publishing to a gateway or diffing in review.
pub fn export_schema_sdl(db: Arc<DatabaseConnection>) -> String {
    build_schema(db).sdl()
}

#[utoipa::path(
    post,
    path = "/graphql",
    request_body(content = String, description = "GraphQL request", content_type = "application/json"),
    params(
        ("x-hasura-user-id" = Option<String>, Header, description = "Id of the calling user"),
        ("x-hasura-allowed-roles" = Option<String>, Header, description = "Roles of the calling user")
    ),
    responses(
        (status = 200, description = "GraphQL response; failures are reported in the errors array")
    ),
    tag = "GraphQL"
)]
pub async fn graphql_handler(
    State(state): State<AppState>,
    ctx: RequestContext,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let request = req.into_inner().data(ctx);
    state.schema.execute(request).await.into()
}
