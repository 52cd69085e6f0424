// ============================================================================
// WIDGETS - Small building blocks shared by the sections
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, bind_input, ElementBuilder};

/// `<section>` with a heading, hidden until visibility is applied
pub fn section(id: &str, title: &str) -> Result<Element, JsValue> {
    let section = ElementBuilder::new("section")?
        .class("section hidden")
        .id(id)?
        .build();
    let heading = ElementBuilder::new("h2")?.text(title).build();
    append_child(&section, &heading)?;
    Ok(section)
}

/// Labelled `<input>` bound to `value`
pub fn input_field(
    id: &str,
    label: &str,
    input_type: &str,
    placeholder: &str,
    value: Rc<RefCell<String>>,
) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?.class("form-group").build();
    let label = ElementBuilder::new("label")?.attr("for", id)?.text(label).build();
    let input = ElementBuilder::new("input")?
        .class("form-input")
        .id(id)?
        .attr("type", input_type)?
        .attr("name", id)?
        .attr("placeholder", placeholder)?
        .build();
    bind_input(&input, value)?;

    append_child(&group, &label)?;
    append_child(&group, &input)?;
    Ok(group)
}

pub fn button(id: &str, class: &str, label: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("button")?
        .attr("type", "button")?
        .id(id)?
        .class(class)
        .text(label)
        .build())
}

/// Output region a handler writes its result into
pub fn result_region(id: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("result")
        .id(id)?
        .attr("aria-live", "polite")?
        .build())
}

/// `<p><strong>label</strong> value</p>`
pub fn card_line(label: &str, value: &str) -> Result<Element, JsValue> {
    let line = ElementBuilder::new("p")?
        .child(ElementBuilder::new("strong")?.text(label).build())?
        .build();
    line.append_with_str_1(&format!(" {}", value))?;
    Ok(line)
}
