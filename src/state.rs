use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::graphql::{OrderSchema, build_schema};

#[derive(Clone)]
pub struct AppState {
    pub schema: OrderSchema,
}

impl AppState {
    pub fn new(orm: Arc<DatabaseConnection>) -> Self {
        Self {
            schema: build_schema(orm),
        }
    }
}
