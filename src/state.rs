use std::sync::Arc;
use tokio::sync::mpsc;

use crate::application::services::IdentityService;
use crate::domain::resolution_event::ResolutionEvent;
use crate::infrastructure::persistence::RedirectStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RedirectStore>,
    pub identity: Arc<IdentityService>,
    pub audit_tx: mpsc::Sender<ResolutionEvent>,
}

impl AppState {
    pub fn new(
        store: Arc<RedirectStore>,
        identity: Arc<IdentityService>,
        audit_tx: mpsc::Sender<ResolutionEvent>,
    ) -> Self {
        Self {
            store,
            identity,
            audit_tx,
        }
    }
}
