// ============================================================================
// APP VIEW - Page layout and section visibility
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, set_hidden, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::{visible_sections, Section};
use crate::views::{
    render_account_section, render_calculator_section, render_create_section,
    render_login_section, render_packages_section, render_register_section,
};

pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("main")?.class("app-container").build();

    let header = ElementBuilder::new("header")?
        .class("app-header")
        .child(ElementBuilder::new("h1")?.text("📦 Parcel Desk").build())?
        .build();
    append_child(&container, &header)?;

    append_child(&container, &render_register_section(state)?)?;
    append_child(&container, &render_login_section(state)?)?;
    append_child(&container, &render_account_section(state)?)?;
    append_child(&container, &render_calculator_section(state)?)?;
    append_child(&container, &render_create_section(state)?)?;
    append_child(&container, &render_packages_section(state)?)?;

    Ok(container)
}

/// Show the sections of the current session state, hide the others
pub fn apply_visibility(authenticated: bool) {
    let visible = visible_sections(authenticated);
    for section in Section::ALL {
        let Some(element) = get_element_by_id(section.element_id()) else {
            log::warn!("⚠️ [APP] Section #{} not rendered", section.element_id());
            continue;
        };
        if let Err(e) = set_hidden(&element, !visible.contains(&section)) {
            log::error!("❌ [APP] Could not toggle #{}: {:?}", section.element_id(), e);
        }
    }
}
