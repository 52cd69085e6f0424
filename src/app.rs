// ============================================================================
// APP - Mounts the page and applies view-model effects to the DOM
// ============================================================================

use std::future::Future;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, clear_children, get_element_by_id};
use crate::services::default_token_store;
use crate::state::AppState;
use crate::utils::APP_ROOT_ID;
use crate::viewmodels::{Effect, PackageViewModel, SessionViewModel};
use crate::views::{apply_visibility, clear_region, render_app, render_region, show_toast};

pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id(APP_ROOT_ID)
            .ok_or_else(|| JsValue::from_str(&format!("No #{} element found", APP_ROOT_ID)))?;

        let state = AppState::new(default_token_store());
        state.auth.subscribe(apply_visibility);

        Ok(Self { state, root })
    }

    pub fn render(&self) -> Result<(), JsValue> {
        clear_children(&self.root);
        append_child(&self.root, &render_app(&self.state)?)?;

        SessionViewModel::new(&self.state).restore();
        apply_visibility(self.state.auth.is_authenticated());
        log::info!("✅ [APP] Rendered");
        Ok(())
    }
}

/// Run a view-model call in the background and apply what it returns
pub fn run<F>(state: &AppState, future: F)
where
    F: Future<Output = Vec<Effect>> + 'static,
{
    let state = state.clone();
    spawn_local(async move {
        let effects = future.await;
        dispatch(&state, effects);
    });
}

pub fn dispatch(state: &AppState, effects: Vec<Effect>) {
    for effect in effects {
        let applied = match &effect {
            Effect::Notify(toast) => show_toast(toast),
            Effect::Render(region, content) => render_region(state, *region, content),
            Effect::Clear(region) => clear_region(*region),
            Effect::RefreshPackages => {
                let vm = PackageViewModel::new(state);
                run(state, async move { vm.load_packages().await });
                Ok(())
            }
        };
        if let Err(e) = applied {
            log::error!("❌ [APP] Could not apply {:?}: {:?}", effect, e);
        }
    }
}
