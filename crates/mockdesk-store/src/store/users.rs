//! User CRUD and invitations.

use super::{StorageKey, Store};
use chrono::Utc;
use mockdesk_core::error::MockError;
use mockdesk_core::models::{CreateUserRequest, InviteUserRequest, UpdateUserRequest, User};
use mockdesk_core::query::{Page, UserQuery};
use tracing::info;
use uuid::Uuid;

impl Store {
    pub async fn list_users(&self, query: &UserQuery) -> Result<Page<User>, MockError> {
        let users = self.load::<User>(StorageKey::Users).await?;
        Ok(query.run(users))
    }

    pub async fn get_user(&self, id: &str) -> Result<User, MockError> {
        self.load::<User>(StorageKey::Users)
            .await?
            .into_iter()
            .find(|u| u.id == id)
            .ok_or(MockError::NotFound("User"))
    }

    pub async fn create_user(&self, request: CreateUserRequest) -> Result<User, MockError> {
        request.validate()?;
        let user = request.into_user(Uuid::new_v4().to_string(), Utc::now());
        self.prepend_user(user).await
    }

    /// Create an `invited` placeholder user for `request.email`.
    pub async fn invite_user(&self, request: InviteUserRequest) -> Result<User, MockError> {
        request.validate()?;
        let user = request.into_user(Uuid::new_v4().to_string(), Utc::now());
        self.prepend_user(user).await
    }

    async fn prepend_user(&self, user: User) -> Result<User, MockError> {
        let record = user.clone();
        self.mutate(StorageKey::Users, move |users: &mut Vec<User>| {
            users.insert(0, record);
            Ok(())
        })
        .await?;
        info!("user created {} ({})", user.id, user.status.as_str());
        Ok(user)
    }

    pub async fn update_user(&self, id: &str, patch: UpdateUserRequest) -> Result<User, MockError> {
        patch.validate()?;
        let user = self
            .mutate(StorageKey::Users, |users: &mut Vec<User>| {
                let user = users
                    .iter_mut()
                    .find(|u| u.id == id)
                    .ok_or(MockError::NotFound("User"))?;
                user.apply(patch);
                Ok(user.clone())
            })
            .await?;
        info!("user updated {}", user.id);
        Ok(user)
    }

    /// Remove a user. A missing id is not an error.
    pub async fn delete_user(&self, id: &str) -> Result<bool, MockError> {
        let removed = self
            .mutate(StorageKey::Users, |users: &mut Vec<User>| {
                let before = users.len();
                users.retain(|u| u.id != id);
                Ok(users.len() != before)
            })
            .await?;
        info!("user delete {id} (removed: {removed})");
        Ok(removed)
    }
}
