use async_graphql::Object;

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Liveness only. Storage is not probed.
    async fn order_service_health(&self) -> Option<bool> {
        Some(true)
    }
}
