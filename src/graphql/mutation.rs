use std::sync::Arc;

use async_graphql::{Context, ErrorExtensions, Object};
use sea_orm::DatabaseConnection;

use crate::{
    context::RequestContext,
    dto::orders::OrderInput,
    error::AppError,
    services::order_service,
};

#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Creates order and returns the id of the created order.
    async fn create_order(
        &self,
        ctx: &Context<'_>,
        order: Option<OrderInput>,
    ) -> async_graphql::Result<Option<String>> {
        let db = ctx.data::<Arc<DatabaseConnection>>()?;
        let user = ctx
            .data_opt::<RequestContext>()
            .map(|request| request.user.clone())
            .unwrap_or_default();

        let result = match order {
            Some(order) => order_service::create_order(db.as_ref(), &user, &order).await,
            None => Err(AppError::Validation("order is required".into())),
        };

        // Failures null this field only, so `data` stays an object.
        match result {
            Ok(id) => Ok(Some(id.to_string())),
            Err(err) => {
                ctx.add_error(err.extend().into_server_error(ctx.item.pos));
                Ok(None)
            }
        }
    }
}
