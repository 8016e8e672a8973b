use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, request::Parts},
};

pub const ALLOWED_ROLES_HEADER: &str = "x-hasura-allowed-roles";
pub const USER_ID_HEADER: &str = "x-hasura-user-id";

/// Caller identity as forwarded by the upstream gateway. Values are taken
/// verbatim; nothing here authenticates or authorizes them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserIdentity {
    pub roles: Option<String>,
    pub user_id: Option<String>,
}

impl UserIdentity {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            roles: header_value(headers, ALLOWED_ROLES_HEADER),
            user_id: header_value(headers, USER_ID_HEADER),
        }
    }
}

/// Per-request data handed to GraphQL resolvers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    pub user: UserIdentity,
}

impl RequestContext {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            user: UserIdentity::from_headers(headers),
        }
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(RequestContext::from_headers(&parts.headers))
    }
}
