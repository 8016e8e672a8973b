use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    graphql,
    models::{Order, OrderStatus},
    response::ApiResponse,
    routes::health::{self, HealthData},
};

#[derive(OpenApi)]
#[openapi(
    paths(health::health_check, graphql::graphql_handler),
    components(schemas(Order, OrderStatus, HealthData, ApiResponse<HealthData>)),
    tags(
        (name = "Health", description = "Liveness endpoint"),
        (name = "GraphQL", description = "Order mutations and health query"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
