use dc_auth::JwtValidator;
use dc_db::{SqliteProfileStore, Store};
use dc_core::ExperienceEditor;

use std::sync::Arc;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    /// `None` runs the API in development mode, trusting `X-User-Id`
    pub jwt_validator: Option<Arc<JwtValidator>>,
}

impl AppState {
    pub fn new(store: Store, jwt_validator: Option<Arc<JwtValidator>>) -> Self {
        Self {
            store,
            jwt_validator,
        }
    }

    pub fn experience_editor(&self) -> ExperienceEditor<SqliteProfileStore> {
        ExperienceEditor::new(SqliteProfileStore::new(self.store.pool().clone()))
    }
}
