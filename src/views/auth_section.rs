// ============================================================================
// AUTH SECTIONS - Register, login, account
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::app;
use crate::dom::{append_child, on_click, set_busy};
use crate::models::CredentialsForm;
use crate::state::AppState;
use crate::viewmodels::{Section, SessionViewModel};
use crate::views::{button, input_field, section};

/// Form values, updated as the user types
#[derive(Clone, Default)]
struct CredentialInputs {
    email: Rc<RefCell<String>>,
    password: Rc<RefCell<String>>,
}

impl CredentialInputs {
    fn form(&self) -> CredentialsForm {
        CredentialsForm {
            email: self.email.borrow().clone(),
            password: self.password.borrow().clone(),
        }
    }

    fn append_to(&self, parent: &Element, prefix: &str) -> Result<(), JsValue> {
        append_child(
            parent,
            &input_field(
                &format!("{}Email", prefix),
                "Email",
                "email",
                "you@example.com",
                self.email.clone(),
            )?,
        )?;
        append_child(
            parent,
            &input_field(
                &format!("{}Password", prefix),
                "Password",
                "password",
                "Password",
                self.password.clone(),
            )?,
        )
    }
}

pub fn render_register_section(state: &AppState) -> Result<Element, JsValue> {
    let section = section(Section::Register.element_id(), "📝 Register")?;
    let inputs = CredentialInputs::default();
    inputs.append_to(&section, "register")?;

    let submit = button("registerButton", "btn-primary", "Register")?;
    {
        let state = state.clone();
        on_click(&submit, move |_| {
            let vm = SessionViewModel::new(&state);
            let form = inputs.form();
            app::run(&state, async move { vm.register(&form).await });
        })?;
    }
    append_child(&section, &submit)?;

    Ok(section)
}

/// Login shows a busy button while the request is in flight
pub fn render_login_section(state: &AppState) -> Result<Element, JsValue> {
    let section = section(Section::Login.element_id(), "🔐 Log in")?;
    let inputs = CredentialInputs::default();
    inputs.append_to(&section, "login")?;

    let submit = button("loginButton", "btn-primary", "Log in")?;
    {
        let state = state.clone();
        let target = submit.clone();
        on_click(&submit, move |_| {
            let vm = SessionViewModel::new(&state);
            let form = inputs.form();
            let target = target.clone();
            let _ = set_busy(&target, true);
            app::run(&state, async move {
                let effects = vm.login(&form).await;
                let _ = set_busy(&target, false);
                effects
            });
        })?;
    }
    append_child(&section, &submit)?;

    Ok(section)
}

pub fn render_account_section(state: &AppState) -> Result<Element, JsValue> {
    let section = section(Section::Account.element_id(), "👤 Account")?;

    let logout = button("logoutButton", "btn-secondary", "Log out")?;
    {
        let state = state.clone();
        on_click(&logout, move |_| {
            let effects = SessionViewModel::new(&state).logout();
            app::dispatch(&state, effects);
        })?;
    }
    append_child(&section, &logout)?;

    Ok(section)
}
