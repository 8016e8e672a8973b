use async_graphql::InputObject;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, InputObject)]
pub struct ToppingInput {
    #[graphql(validator(min_length = 1))]
    pub name: String,
    #[graphql(validator(min_length = 1))]
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, InputObject)]
pub struct PizzaInput {
    pub toppings: Vec<ToppingInput>,
    pub comment: String,
}

/// Order payload as received over GraphQL. It is persisted as a single JSON
/// document; pizzas and toppings are not split into their own rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, InputObject)]
pub struct OrderInput {
    #[graphql(validator(min_items = 1))]
    pub pizzas: Vec<PizzaInput>,
    pub comment: String,
}
