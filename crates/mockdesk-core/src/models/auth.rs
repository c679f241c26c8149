use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::require_email;
use crate::error::MockError;

/// Account number handed to every mock session.
pub const MOCK_ACCOUNT_NO: &str = "ACC001";

/// Prefix of issued bearer tokens.
pub const ACCESS_TOKEN_PREFIX: &str = "mock-access-token-";

/// Session lifetime.
pub const SESSION_TTL_HOURS: i64 = 24;

/// The signed-in user as the dashboard sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub account_no: String,
    pub email: String,
    pub role: Vec<String>,
    /// Expiry, epoch milliseconds.
    pub exp: i64,
}

impl AuthUser {
    /// Session user for `email`, expiring [`SESSION_TTL_HOURS`] after `now`.
    pub fn for_login(email: &str, now: DateTime<Utc>) -> Self {
        Self {
            account_no: MOCK_ACCOUNT_NO.to_string(),
            email: email.to_string(),
            role: vec!["user".to_string()],
            exp: (now + Duration::hours(SESSION_TTL_HOURS)).timestamp_millis(),
        }
    }
}

/// Persisted under the auth key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthRecord {
    pub user: AuthUser,
}

/// `POST /api/auth/login` body. The password is accepted as-is.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), MockError> {
        require_email("email", &self.email)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: AuthUser,
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_expires_in_a_day() {
        let now = Utc::now();
        let user = AuthUser::for_login("a@b.com", now);
        assert_eq!(user.account_no, "ACC001");
        assert_eq!(user.role, vec!["user".to_string()]);
        assert_eq!(user.exp - now.timestamp_millis(), 24 * 60 * 60 * 1000);
    }

    #[test]
    fn test_login_response_shape() {
        let resp = LoginResponse {
            user: AuthUser::for_login("a@b.com", Utc::now()),
            access_token: format!("{ACCESS_TOKEN_PREFIX}abc"),
        };
        let v = serde_json::to_value(resp).unwrap();
        assert_eq!(v["user"]["accountNo"], "ACC001");
        assert_eq!(v["accessToken"], "mock-access-token-abc");
    }
}
