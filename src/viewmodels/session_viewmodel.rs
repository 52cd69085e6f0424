// ============================================================================
// SESSION VIEWMODEL - Register, login, logout
// ============================================================================
// Talks to the API, updates AuthState and returns the effects to show.
// Section visibility is not an effect: views follow AuthState directly.
// ============================================================================

use crate::error::ApiError;
use crate::models::{AuthResponse, CredentialsForm};
use crate::services::ApiClient;
use crate::state::{AppState, Region};
use crate::utils::GENERIC_ERROR_MESSAGE;
use crate::viewmodels::{Effect, Toast};

/// Page sections, shown or hidden depending on the session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Register,
    Login,
    Account,
    Calculator,
    Create,
    Packages,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Register,
        Section::Login,
        Section::Account,
        Section::Calculator,
        Section::Create,
        Section::Packages,
    ];

    pub fn element_id(&self) -> &'static str {
        match self {
            Section::Register => "registerSection",
            Section::Login => "loginSection",
            Section::Account => "accountSection",
            Section::Calculator => "calcSection",
            Section::Create => "createSection",
            Section::Packages => "packagesSection",
        }
    }

    pub fn requires_auth(&self) -> bool {
        !matches!(self, Section::Register | Section::Login)
    }
}

/// Sections to show for the given session state
pub fn visible_sections(authenticated: bool) -> Vec<Section> {
    Section::ALL
        .iter()
        .copied()
        .filter(|section| section.requires_auth() == authenticated)
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthAction {
    Register,
    Login,
}

impl AuthAction {
    fn success_message(&self) -> &'static str {
        match self {
            AuthAction::Register => "Registration successful",
            AuthAction::Login => "Logged in",
        }
    }
}

pub struct SessionViewModel {
    state: AppState,
    api: ApiClient,
}

impl SessionViewModel {
    pub fn new(state: &AppState) -> Self {
        Self::with_client(state, ApiClient::new())
    }

    pub fn with_client(state: &AppState, api: ApiClient) -> Self {
        Self {
            state: state.clone(),
            api,
        }
    }

    /// Pick up the token of a previous visit
    pub fn restore(&self) -> bool {
        let restored = self.state.auth.restore();
        if restored {
            log::info!("💾 [SESSION] Session restored from storage");
        }
        restored
    }

    pub async fn register(&self, form: &CredentialsForm) -> Vec<Effect> {
        let credentials = match form.validate() {
            Ok(credentials) => credentials,
            Err(message) => return vec![Effect::error(message)],
        };
        let result = self.api.register(&credentials).await;
        self.apply_auth(AuthAction::Register, result)
    }

    pub async fn login(&self, form: &CredentialsForm) -> Vec<Effect> {
        let credentials = match form.validate() {
            Ok(credentials) => credentials,
            Err(message) => return vec![Effect::error(message)],
        };
        let result = self.api.login(&credentials).await;
        self.apply_auth(AuthAction::Login, result)
    }

    /// Store the token on success; one notification either way
    pub fn apply_auth(&self, action: AuthAction, result: Result<AuthResponse, ApiError>) -> Vec<Effect> {
        match result {
            Ok(response) => match response.token() {
                Some(token) => {
                    if let Err(e) = self.state.auth.sign_in(token) {
                        log::error!("❌ [SESSION] Token not persisted: {}", e);
                    }
                    log::info!("✅ [SESSION] {:?} succeeded", action);
                    vec![Effect::Notify(Toast::success(action.success_message()))]
                }
                None => {
                    log::warn!("⚠️ [SESSION] {:?} answered without a token", action);
                    let message = response.message().unwrap_or(GENERIC_ERROR_MESSAGE);
                    vec![Effect::error(message)]
                }
            },
            Err(err) => {
                log::warn!("⚠️ [SESSION] {:?} failed: {}", action, err);
                vec![Effect::error(err.user_message())]
            }
        }
    }

    /// Forget the session and everything shown for it
    pub fn logout(&self) -> Vec<Effect> {
        if let Err(e) = self.state.auth.sign_out() {
            log::error!("❌ [SESSION] Token not removed from storage: {}", e);
        }
        self.state.requests.invalidate_all();
        log::info!("👋 [SESSION] Logged out");

        let mut effects: Vec<Effect> = Region::ALL.iter().map(|region| Effect::Clear(*region)).collect();
        effects.push(Effect::Notify(Toast::info("You have been logged out")));
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{MemoryTokenStore, TokenStore};
    use crate::viewmodels::ToastKind;
    use futures::FutureExt;
    use std::rc::Rc;

    fn setup() -> (Rc<MemoryTokenStore>, AppState, SessionViewModel) {
        let store = Rc::new(MemoryTokenStore::new());
        let state = AppState::new(store.clone());
        let vm = SessionViewModel::with_client(&state, ApiClient::with_base_url("http://test/api"));
        (store, state, vm)
    }

    fn token_response(token: &str) -> AuthResponse {
        AuthResponse { token: Some(token.into()), ..Default::default() }
    }

    fn notifications(effects: &[Effect]) -> Vec<&Toast> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::Notify(toast) => Some(toast),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn sections_follow_the_session() {
        assert_eq!(visible_sections(false), vec![Section::Register, Section::Login]);
        assert_eq!(
            visible_sections(true),
            vec![Section::Account, Section::Calculator, Section::Create, Section::Packages]
        );
    }

    #[test]
    fn login_success_stores_token() {
        let (store, state, vm) = setup();
        let effects = vm.apply_auth(AuthAction::Login, Ok(token_response("jwt-1")));

        assert_eq!(store.load().as_deref(), Some("jwt-1"));
        assert!(state.auth.is_authenticated());
        assert_eq!(effects, vec![Effect::Notify(Toast::success("Logged in"))]);
    }

    #[test]
    fn register_success_stores_token() {
        let (store, state, vm) = setup();
        vm.apply_auth(AuthAction::Register, Ok(token_response("jwt-2")));
        assert_eq!(store.load().as_deref(), Some("jwt-2"));
        assert_eq!(visible_sections(state.auth.is_authenticated())[0], Section::Account);
    }

    #[test]
    fn http_error_shows_server_message_once() {
        let (store, state, vm) = setup();
        let err = ApiError::Http { status: 401, message: "Invalid credentials".into() };
        let effects = vm.apply_auth(AuthAction::Login, Err(err));

        assert_eq!(store.load(), None);
        assert!(!state.auth.is_authenticated());
        let toasts = notifications(&effects);
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind, ToastKind::Error);
        assert_eq!(toasts[0].message, "Invalid credentials");
    }

    #[test]
    fn ok_without_token_is_a_failure() {
        let (store, _state, vm) = setup();
        let effects = vm.apply_auth(AuthAction::Register, Ok(AuthResponse::default()));
        assert_eq!(store.load(), None);
        assert_eq!(effects, vec![Effect::error(GENERIC_ERROR_MESSAGE)]);
    }

    #[test]
    fn logout_clears_token_regions_and_requests() {
        let (store, state, vm) = setup();
        vm.apply_auth(AuthAction::Login, Ok(token_response("jwt")));
        let in_flight = state.requests.begin(Region::Packages);

        let effects = vm.logout();

        assert_eq!(store.load(), None);
        assert!(!state.auth.is_authenticated());
        assert!(!state.requests.is_current(&in_flight));
        for region in Region::ALL {
            assert!(effects.contains(&Effect::Clear(region)));
        }
        assert_eq!(notifications(&effects).len(), 1);
    }

    #[test]
    fn restore_uses_previous_token() {
        let store = Rc::new(MemoryTokenStore::with_token("kept"));
        let state = AppState::new(store);
        let vm = SessionViewModel::with_client(&state, ApiClient::with_base_url("http://test/api"));
        assert!(vm.restore());
        assert_eq!(state.auth.token().as_deref(), Some("kept"));
    }

    #[test]
    fn incomplete_credentials_are_rejected_locally() {
        let (store, state, vm) = setup();
        let form = CredentialsForm { email: "  ".into(), password: "secret".into() };
        let expected = Some(vec![Effect::error("Please enter your email and password")]);

        assert_eq!(vm.register(&form).now_or_never(), expected);
        assert_eq!(vm.login(&CredentialsForm::default()).now_or_never(), expected);
        assert_eq!(store.load(), None);
        assert!(!state.auth.is_authenticated());
    }
}
