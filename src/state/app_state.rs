// ============================================================================
// APP STATE - Global application state
// ============================================================================

use std::rc::Rc;

use crate::services::TokenStore;
use crate::state::{AuthState, RequestTracker};

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthState,
    pub requests: Rc<RequestTracker>,
}

impl AppState {
    pub fn new(store: Rc<dyn TokenStore>) -> Self {
        Self {
            auth: AuthState::new(store),
            requests: Rc::new(RequestTracker::new()),
        }
    }
}
