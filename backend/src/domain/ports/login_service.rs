//! Driving port for session login.
//!
//! Credential verification is an external concern; this port exists so the
//! HTTP adapter can issue a session cookie without knowing how identities
//! are checked. The fixture accepts a single development credential pair.

use async_trait::async_trait;

use crate::domain::{Error, UserId};

/// Credentials presented at login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    /// Account name.
    pub username: String,
    /// Plain-text password as submitted; never logged.
    pub password: String,
}

/// Port resolving credentials to a user identity.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Verify credentials and return the authenticated user's id.
    async fn login(&self, credentials: LoginCredentials) -> Result<UserId, Error>;
}

/// Development credential contract used until a real identity provider is
/// wired in.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureLoginService;

/// Username accepted by [`FixtureLoginService`].
pub const FIXTURE_LOGIN_USERNAME: &str = "admin";
/// Password accepted by [`FixtureLoginService`].
pub const FIXTURE_LOGIN_PASSWORD: &str = "password";
/// User id issued by [`FixtureLoginService`].
pub const FIXTURE_LOGIN_USER_ID: &str = "123e4567-e89b-12d3-a456-426614174000";

#[async_trait]
impl LoginService for FixtureLoginService {
    async fn login(&self, credentials: LoginCredentials) -> Result<UserId, Error> {
        if credentials.username == FIXTURE_LOGIN_USERNAME
            && credentials.password == FIXTURE_LOGIN_PASSWORD
        {
            UserId::new(FIXTURE_LOGIN_USER_ID)
                .map_err(|err| Error::internal(format!("fixture user id invalid: {err}")))
        } else {
            Err(Error::unauthorized("invalid credentials"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixture_accepts_dev_credentials() {
        let service = FixtureLoginService;
        let user = service
            .login(LoginCredentials {
                username: FIXTURE_LOGIN_USERNAME.to_owned(),
                password: FIXTURE_LOGIN_PASSWORD.to_owned(),
            })
            .await
            .expect("fixture login succeeds");
        assert_eq!(user.to_string(), FIXTURE_LOGIN_USER_ID);
    }

    #[tokio::test]
    async fn fixture_rejects_unknown_credentials() {
        let service = FixtureLoginService;
        let err = service
            .login(LoginCredentials {
                username: "guest".to_owned(),
                password: "guest".to_owned(),
            })
            .await
            .expect_err("fixture login fails");
        assert_eq!(err.code(), crate::domain::ErrorCode::Unauthorized);
    }
}
