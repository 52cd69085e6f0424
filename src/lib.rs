// ============================================================================
// PARCEL DESK - Browser client for the delivery API (Rust + WASM)
// ============================================================================
// - Views: functions that build DOM, no logic
// - ViewModels: UI logic, return effects for the views to apply
// - Services: API communication and token storage only
// - State: session token and in-flight requests
// - Models: shapes shared with the backend
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod viewmodels;
pub mod utils;
mod dom;
mod views;
mod app;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::CONFIG;

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Parcel Desk ({}) → {}", CONFIG.environment, CONFIG.api_url);

    let app = App::new()?;
    app.render()?;

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    Ok(())
}
