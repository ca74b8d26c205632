use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::models::role::Role;
use crate::services::token_service::TokenService;

pub const TOKEN_NOT_FOUND: &str = "token not found";
pub const ROLE_NOT_ALLOWED: &str = "role don't have permission";

pub const COMPANY_ONLY: &[Role] = &[Role::Company];
pub const ADMIN_ONLY: &[Role] = &[Role::Admin];

/// Identity of the caller, inserted into request extensions by [`require_role`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub email: String,
    pub role: Role,
}

/// Middleware state: the token checker and the roles a route group admits.
#[derive(Clone)]
pub struct RoleGuard {
    pub tokens: TokenService,
    pub allowed: &'static [Role],
}

impl RoleGuard {
    pub fn new(tokens: TokenService, allowed: &'static [Role]) -> Self {
        Self { tokens, allowed }
    }
}

fn reject(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}

/// Accepts `Bearer <token>` or the bare token.
fn extract_token(header: &str) -> Option<&str> {
    let token = header.strip_prefix("Bearer ").unwrap_or(header).trim();
    (!token.is_empty()).then_some(token)
}

pub async fn require_role(State(guard): State<RoleGuard>, mut req: Request, next: Next) -> Response {
    let Some(token) = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(extract_token)
    else {
        return reject(StatusCode::UNAUTHORIZED, TOKEN_NOT_FOUND);
    };

    let claims = match guard.tokens.validate(token) {
        Ok(claims) => claims,
        Err(err) => {
            tracing::debug!(error = %err, "Rejected bearer token");
            return reject(StatusCode::UNAUTHORIZED, &err.to_string());
        }
    };

    if !guard.allowed.contains(&claims.role) {
        return reject(StatusCode::FORBIDDEN, ROLE_NOT_ALLOWED);
    }

    req.extensions_mut().insert(AuthContext {
        email: claims.email,
        role: claims.role,
    });
    next.run(req).await
}

#[cfg(test)]
mod tests {
    use super::extract_token;

    #[test]
    fn bearer_prefix_is_optional() {
        assert_eq!(extract_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(extract_token("abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(extract_token("Bearer "), None);
        assert_eq!(extract_token(""), None);
    }
}
