//! Mock sessions over the auth record.

use super::{StorageKey, Store};
use chrono::Utc;
use mockdesk_core::error::MockError;
use mockdesk_core::models::{
    AuthRecord, AuthUser, LoginRequest, LoginResponse, ACCESS_TOKEN_PREFIX,
};
use tracing::info;
use uuid::Uuid;

impl Store {
    /// Accept any password, persist the session user and issue a token.
    ///
    /// The token itself is never stored.
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, MockError> {
        request.validate()?;
        let user = AuthUser::for_login(&request.email, Utc::now());
        self.set(StorageKey::Auth, &AuthRecord { user: user.clone() })
            .await?;
        info!("login {}", user.email);
        Ok(LoginResponse {
            user,
            access_token: format!("{ACCESS_TOKEN_PREFIX}{}", Uuid::new_v4()),
        })
    }

    /// Drop the session, if any.
    pub async fn logout(&self) -> Result<(), MockError> {
        self.remove(StorageKey::Auth).await?;
        info!("logout");
        Ok(())
    }

    /// The persisted session user, or `Unauthorized`.
    pub async fn me(&self) -> Result<AuthUser, MockError> {
        self.get::<AuthRecord>(StorageKey::Auth)
            .await?
            .map(|record| record.user)
            .ok_or(MockError::Unauthorized)
    }
}
