use async_graphql::ErrorExtensions;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Storage unavailable")]
    Storage(#[from] sea_orm::DbErr),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Stable code exposed to GraphQL clients under `extensions.code`.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_FAILURE",
            AppError::Storage(_) => "STORAGE_UNAVAILABLE",
            AppError::Internal(_) => "INTERNAL",
        }
    }
}

impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        match self {
            AppError::Storage(err) => tracing::error!(error = %err, "storage failure"),
            AppError::Internal(err) => tracing::error!(error = %err, "internal failure"),
            AppError::Validation(_) => {}
        }

        async_graphql::Error::new(self.to_string()).extend_with(|_, ext| ext.set("code", self.code()))
    }
}

pub type AppResult<T> = Result<T, AppError>;
