use std::sync::Arc;

use crate::config::Config;
use crate::credentials::CredentialService;
use crate::database::AccountStore;

pub struct AppState {
    pub db: Arc<dyn AccountStore>,
    pub credentials: CredentialService,
}

impl AppState {
    pub fn new(db: Arc<dyn AccountStore>, config: &Config) -> Self {
        Self {
            db,
            credentials: CredentialService::new(config),
        }
    }
}
