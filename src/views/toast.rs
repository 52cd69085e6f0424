// ============================================================================
// TOASTS - Transient notifications
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::{append_child, body, get_element_by_id, remove_element, ElementBuilder};
use crate::utils::TOAST_CONTAINER_ID;
use crate::viewmodels::Toast;

/// The toast container, created on first use
fn toast_container() -> Result<Element, JsValue> {
    if let Some(container) = get_element_by_id(TOAST_CONTAINER_ID) {
        return Ok(container);
    }
    let body = body().ok_or_else(|| JsValue::from_str("No body"))?;
    let container = ElementBuilder::new("div")?
        .id(TOAST_CONTAINER_ID)?
        .attr("role", "status")?
        .build();
    body.append_child(&container)?;
    Ok(container)
}

pub fn show_toast(toast: &Toast) -> Result<(), JsValue> {
    let element = ElementBuilder::new("div")?
        .class(&format!("toast {}", toast.kind.css_class()))
        .text(&toast.message)
        .build();
    append_child(&toast_container()?, &element)?;

    Timeout::new(CONFIG.toast_duration_ms, move || remove_element(&element)).forget();
    Ok(())
}
