// ============================================================================
// ELEMENT HELPERS - Basic DOM manipulation
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlSelectElement, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn body() -> Option<HtmlElement> {
    document()?.body()
}

pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Current value of the `<select>` with the given id
pub fn select_value(id: &str) -> Option<String> {
    get_element_by_id(id)?
        .dyn_into::<HtmlSelectElement>()
        .ok()
        .map(|select| select.value())
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Remove every child of the element
pub fn clear_children(element: &Element) {
    element.set_inner_html("");
}

pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

pub fn remove_element(element: &Element) {
    element.remove();
}

pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

pub fn remove_attribute(element: &Element, name: &str) -> Result<(), JsValue> {
    element.remove_attribute(name)
}

pub fn add_class(element: &Element, class: &str) -> Result<(), JsValue> {
    element.class_list().add_1(class)
}

pub fn remove_class(element: &Element, class: &str) -> Result<(), JsValue> {
    element.class_list().remove_1(class)
}

/// Hide or show an element through the `hidden` class
pub fn set_hidden(element: &Element, hidden: bool) -> Result<(), JsValue> {
    if hidden {
        add_class(element, "hidden")
    } else {
        remove_class(element, "hidden")
    }
}

/// Busy indicator for the control that triggered a request: disabled and
/// marked `loading` while busy, restored afterwards
pub fn set_busy(element: &Element, busy: bool) -> Result<(), JsValue> {
    if busy {
        set_attribute(element, "disabled", "true")?;
        set_attribute(element, "aria-busy", "true")?;
        add_class(element, "loading")
    } else {
        remove_attribute(element, "disabled")?;
        remove_attribute(element, "aria-busy")?;
        remove_class(element, "loading")
    }
}
