use anyhow::Context;
use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Set};
use serde_json::Value;
use uuid::Uuid;

use crate::{
    context::UserIdentity,
    dto::orders::OrderInput,
    entity::order::{ActiveModel as OrderActive, Entity as Orders, Model as OrderModel},
    error::AppResult,
    models::{Order, OrderStatus},
};

/// Persist a new order and return the id generated by the database.
///
/// The payload is stored as one JSON document. An absent user id is stored as
/// an empty string. There is no deduplication: calling this twice with the
/// same input creates two orders.
pub async fn create_order<C>(db: &C, user: &UserIdentity, order: &OrderInput) -> AppResult<Uuid>
where
    C: ConnectionTrait,
{
    let pizza = order_document(order)?;
    let user_id = user.user_id.clone().unwrap_or_default();

    let created = OrderActive {
        id: NotSet,
        pizza: Set(pizza),
        status: Set(OrderStatus::New.as_str().to_owned()),
        user_id: Set(user_id),
        created_at: NotSet,
    }
    .insert(db)
    .await?;

    tracing::info!(
        order_id = %created.id,
        user_id = %created.user_id,
        pizzas = order.pizzas.len(),
        "order created"
    );

    Ok(created.id)
}

pub async fn find_order<C>(db: &C, id: Uuid) -> AppResult<Option<Order>>
where
    C: ConnectionTrait,
{
    let order = Orders::find_by_id(id).one(db).await?;
    Ok(order.map(order_from_entity))
}

fn order_document(order: &OrderInput) -> AppResult<Value> {
    let value = serde_json::to_value(order).context("failed to serialize order payload")?;
    Ok(value)
}

fn order_from_entity(model: OrderModel) -> Order {
    Order {
        id: model.id,
        pizza: model.pizza,
        status: model.status,
        user_id: model.user_id,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
