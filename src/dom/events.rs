// ============================================================================
// EVENT HANDLING
// ============================================================================
// Listeners are attached once per element and leaked with `forget()`: the
// elements live for the whole page, and removed elements take their
// listeners with them.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement, MouseEvent};

pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Keep `value` in sync with what the user types into an `<input>`
pub fn bind_input(input: &Element, value: Rc<RefCell<String>>) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(move |e: Event| {
        if let Some(target) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
            *value.borrow_mut() = target.value();
        }
    }) as Box<dyn FnMut(Event)>);
    input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
