use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{advance_timestamp, nullable, require_email, require_non_blank};
use crate::error::MockError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
    Invited,
    Suspended,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Invited => "invited",
            Self::Suspended => "suspended",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Superadmin,
    Admin,
    Manager,
    Cashier,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Superadmin => "superadmin",
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Cashier => "cashier",
        }
    }
}

/// A user record as stored under the users key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub status: UserStatus,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// `firstName_lastName`, lowercased. Uniqueness is not checked.
    pub fn derive_username(first_name: &str, last_name: &str) -> String {
        format!("{}_{}", first_name.to_lowercase(), last_name.to_lowercase())
    }

    /// Shallow-merge `patch` over this record and bump `updatedAt`.
    ///
    /// `username` stays as created even when the name changes.
    pub fn apply(&mut self, patch: UpdateUserRequest) {
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone_number) = patch.phone_number {
            self.phone_number = phone_number;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        self.updated_at = advance_timestamp(self.updated_at);
    }
}

/// `POST /api/users` body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    pub role: UserRole,
}

impl CreateUserRequest {
    pub fn validate(&self) -> Result<(), MockError> {
        require_non_blank("firstName", &self.first_name)?;
        require_non_blank("lastName", &self.last_name)?;
        require_email("email", &self.email)
    }

    /// New users start out `active`.
    pub fn into_user(self, id: String, now: DateTime<Utc>) -> User {
        User {
            id,
            username: User::derive_username(&self.first_name, &self.last_name),
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone_number: self.phone_number,
            status: UserStatus::Active,
            role: self.role,
            created_at: now,
            updated_at: now,
        }
    }
}

/// `PUT /api/users/:id` body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub phone_number: Option<Option<String>>,
    #[serde(default)]
    pub status: Option<UserStatus>,
    #[serde(default)]
    pub role: Option<UserRole>,
}

impl UpdateUserRequest {
    pub fn validate(&self) -> Result<(), MockError> {
        if let Some(first_name) = &self.first_name {
            require_non_blank("firstName", first_name)?;
        }
        if let Some(last_name) = &self.last_name {
            require_non_blank("lastName", last_name)?;
        }
        if let Some(email) = &self.email {
            require_email("email", email)?;
        }
        Ok(())
    }
}

/// `POST /api/users/invite` body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InviteUserRequest {
    pub email: String,
    pub role: UserRole,
}

impl InviteUserRequest {
    pub fn validate(&self) -> Result<(), MockError> {
        require_email("email", &self.email)
    }

    /// Placeholder name, username from the email's local part, `invited`.
    pub fn into_user(self, id: String, now: DateTime<Utc>) -> User {
        let username = self
            .email
            .split('@')
            .next()
            .unwrap_or_default()
            .to_string();
        User {
            id,
            first_name: "Invited".to_string(),
            last_name: "User".to_string(),
            username,
            email: self.email,
            phone_number: None,
            status: UserStatus::Invited,
            role: self.role,
            created_at: now,
            updated_at: now,
        }
    }
}
