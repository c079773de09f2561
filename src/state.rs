use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::identity::IdentityProvider;
use crate::services::mail::Mailer;
use crate::services::uploads::FileStore;
use crate::store::Store;

/// Shared per-request state: configuration plus the store and the three
/// external collaborators, all behind trait objects so real implementations
/// can be substituted without touching handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub store: Arc<dyn Store>,
    pub identity: Arc<dyn IdentityProvider>,
    pub mailer: Arc<dyn Mailer>,
    pub uploads: Arc<dyn FileStore>,
}
