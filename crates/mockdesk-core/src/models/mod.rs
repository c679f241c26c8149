//! Entity records, request payloads and patch types.
//!
//! Records use the dashboard's camelCase JSON shape so that seeded data and
//! handler-written data are interchangeable. Request types reject unknown
//! fields; patch types treat every field as omittable and the optional
//! record fields as explicitly nullable.

mod app;
mod auth;
mod chat;
mod dashboard;
mod task;
mod user;

pub use app::*;
pub use auth::*;
pub use chat::*;
pub use dashboard::*;
pub use task::*;
pub use user::*;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Deserializer};

use crate::error::MockError;

/// Deserialize a patch field where absent, `null` and a value all differ.
///
/// Use with `#[serde(default, deserialize_with = "nullable")]`:
/// absent → `None`, `null` → `Some(None)`, value → `Some(Some(v))`.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Next `updatedAt` for a record last touched at `previous`.
///
/// Always strictly later than `previous`, even when the wall clock has not
/// moved (or moved backwards) since.
pub fn advance_timestamp(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + Duration::milliseconds(1)
    }
}

pub(crate) fn require_non_blank(field: &str, value: &str) -> Result<(), MockError> {
    if value.trim().is_empty() {
        return Err(MockError::validation(field, "must not be empty"));
    }
    Ok(())
}

pub(crate) fn require_email(field: &str, value: &str) -> Result<(), MockError> {
    match value.split_once('@') {
        Some((local, domain)) if !local.trim().is_empty() && !domain.trim().is_empty() => Ok(()),
        _ => Err(MockError::validation(field, "must be an email address")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_timestamp_is_strictly_later() {
        let future = Utc::now() + Duration::seconds(60);
        let next = advance_timestamp(future);
        assert!(next > future);

        let past = Utc::now() - Duration::seconds(60);
        assert!(advance_timestamp(past) > past);
    }

    #[test]
    fn test_require_email() {
        assert!(require_email("email", "a@b.com").is_ok());
        assert!(require_email("email", "nobody").is_err());
        assert!(require_email("email", "@b.com").is_err());
        assert!(require_email("email", "a@").is_err());
    }

    #[test]
    fn test_require_non_blank() {
        assert!(require_non_blank("title", "x").is_ok());
        let err = require_non_blank("title", "   ").unwrap_err();
        assert!(matches!(err, MockError::Validation { ref field, .. } if field == "title"));
    }
}
