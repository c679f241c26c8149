//! App listing and connect/disconnect toggles.

use super::{StorageKey, Store};
use mockdesk_core::error::MockError;
use mockdesk_core::models::App;
use mockdesk_core::query::{AppQuery, Listing};
use tracing::info;

impl Store {
    pub async fn list_apps(&self, query: &AppQuery) -> Result<Listing<App>, MockError> {
        let apps = self.load::<App>(StorageKey::Apps).await?;
        Ok(query.run(apps))
    }

    pub async fn get_app(&self, id: &str) -> Result<App, MockError> {
        self.load::<App>(StorageKey::Apps)
            .await?
            .into_iter()
            .find(|a| a.id == id)
            .ok_or(MockError::NotFound("App"))
    }

    pub async fn connect_app(&self, id: &str) -> Result<App, MockError> {
        self.set_app_connected(id, true).await
    }

    pub async fn disconnect_app(&self, id: &str) -> Result<App, MockError> {
        self.set_app_connected(id, false).await
    }

    /// Toggle `connected` in place; the app keeps its position.
    async fn set_app_connected(&self, id: &str, connected: bool) -> Result<App, MockError> {
        let app = self
            .mutate(StorageKey::Apps, |apps: &mut Vec<App>| {
                let app = apps
                    .iter_mut()
                    .find(|a| a.id == id)
                    .ok_or(MockError::NotFound("App"))?;
                app.connected = connected;
                Ok(app.clone())
            })
            .await?;
        info!("app {} connected={}", app.id, app.connected);
        Ok(app)
    }
}
