// ============================================================================
// AUTH STATE - Session token, mirrored into the persistent slot
// ============================================================================

use std::rc::Rc;

use crate::services::TokenStore;
use crate::state::ReactiveState;

#[derive(Clone)]
pub struct AuthState {
    token: Rc<ReactiveState<Option<String>>>,
    store: Rc<dyn TokenStore>,
}

impl AuthState {
    pub fn new(store: Rc<dyn TokenStore>) -> Self {
        Self {
            token: Rc::new(ReactiveState::new(None)),
            store,
        }
    }

    /// Load the token left by a previous page load. Returns whether one was found.
    pub fn restore(&self) -> bool {
        let token = self.store.load().filter(|t| !t.is_empty());
        let found = token.is_some();
        self.token.set(token);
        found
    }

    pub fn token(&self) -> Option<String> {
        self.token.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Store a token issued by the server. The in-memory session is set even if
    /// persisting fails; the error is returned for logging.
    pub fn sign_in(&self, token: &str) -> Result<(), String> {
        let persisted = self.store.save(token);
        self.token.set(Some(token.to_string()));
        persisted
    }

    pub fn sign_out(&self) -> Result<(), String> {
        let cleared = self.store.clear();
        self.token.set(None);
        cleared
    }

    /// Called with `true`/`false` whenever the token is set or cleared
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(bool) + 'static,
    {
        self.token.subscribe(move |token| callback(token.is_some()));
    }
}
