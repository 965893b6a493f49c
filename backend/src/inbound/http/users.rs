//! Session endpoints.
//!
//! ```text
//! POST /api/v1/login
//! GET  /api/v1/me
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::LoginCredentials;
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::Envelope;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::require_field;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Account name.
    pub username: Option<String>,
    /// Password.
    pub password: Option<String>,
}

/// Authenticated identity payload.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionUserResponse {
    /// The authenticated user's id.
    pub user_id: String,
}

/// Authenticate and issue the session cookie.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = LoginRequest,
    security([]),
    responses(
        (status = 200, description = "Session established", body = Envelope<SessionUserResponse>),
        (status = 400, description = "Invalid request", body = crate::inbound::http::schemas::ErrorEnvelopeSchema),
        (status = 401, description = "Invalid credentials", body = crate::inbound::http::schemas::ErrorEnvelopeSchema)
    ),
    tags = ["session"],
    operation_id = "login"
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<Envelope<SessionUserResponse>>> {
    let payload = payload.into_inner();
    let credentials = LoginCredentials {
        username: require_field(payload.username, "username")?,
        password: require_field(payload.password, "password")?,
    };
    let user_id = state.login.login(credentials).await?;
    session.persist_user(&user_id)?;
    Ok(web::Json(Envelope::ok(SessionUserResponse {
        user_id: user_id.to_string(),
    })))
}

/// Return the authenticated user's identity.
#[utoipa::path(
    get,
    path = "/api/v1/me",
    responses(
        (status = 200, description = "Authenticated identity", body = Envelope<SessionUserResponse>),
        (status = 401, description = "No valid session", body = crate::inbound::http::schemas::ErrorEnvelopeSchema)
    ),
    tags = ["session"],
    operation_id = "currentUser"
)]
#[get("/me")]
pub async fn current_user(
    session: SessionContext,
) -> ApiResult<web::Json<Envelope<SessionUserResponse>>> {
    let user_id = session.require_user_id()?;
    Ok(web::Json(Envelope::ok(SessionUserResponse {
        user_id: user_id.to_string(),
    })))
}

#[cfg(test)]
#[path = "users_tests.rs"]
mod tests;
