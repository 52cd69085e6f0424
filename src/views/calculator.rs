// ============================================================================
// CALCULATOR + CREATE SECTIONS
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::app;
use crate::dom::{append_child, on_click, select_value, ElementBuilder};
use crate::models::PackageForm;
use crate::state::{AppState, Region};
use crate::viewmodels::{PackageViewModel, Section};
use crate::views::{button, input_field, result_region, section};

#[derive(Clone, Default)]
struct PackageInputs {
    weight: Rc<RefCell<String>>,
    from: Rc<RefCell<String>>,
    to: Rc<RefCell<String>>,
    address: Rc<RefCell<String>>,
    length: Rc<RefCell<String>>,
    width: Rc<RefCell<String>>,
    height: Rc<RefCell<String>>,
}

impl PackageInputs {
    /// Snapshot of the inputs; the tariff is read from the selector
    fn form(&self) -> PackageForm {
        PackageForm {
            weight: self.weight.borrow().clone(),
            from: self.from.borrow().clone(),
            to: self.to.borrow().clone(),
            address: self.address.borrow().clone(),
            length: self.length.borrow().clone(),
            width: self.width.borrow().clone(),
            height: self.height.borrow().clone(),
            tariff_code: select_value(Region::Tariffs.element_id()).unwrap_or_default(),
        }
    }

    fn append_package_fields(&self, parent: &Element, prefix: &str) -> Result<(), JsValue> {
        let fields = [
            ("Weight", "Weight, kg", "number", "1.5", &self.weight),
            ("From", "From", "text", "Moscow", &self.from),
            ("To", "To", "text", "Kazan", &self.to),
            ("Address", "Address", "text", "Street, house", &self.address),
        ];
        for (suffix, label, input_type, placeholder, value) in fields {
            let id = format!("{}{}", prefix, suffix);
            append_child(parent, &input_field(&id, label, input_type, placeholder, value.clone())?)?;
        }
        Ok(())
    }

    fn append_dimension_fields(&self, parent: &Element) -> Result<(), JsValue> {
        let row = ElementBuilder::new("div")?.class("form-row").build();
        let fields = [
            ("calcLength", "Length, cm", &self.length),
            ("calcWidth", "Width, cm", &self.width),
            ("calcHeight", "Height, cm", &self.height),
        ];
        for (id, label, value) in fields {
            append_child(&row, &input_field(id, label, "number", "0", value.clone())?)?;
        }
        append_child(parent, &row)
    }
}

fn tariff_select() -> Result<Element, JsValue> {
    let select = ElementBuilder::new("select")?
        .class("form-input")
        .id(Region::Tariffs.element_id())?
        .build();
    let placeholder = ElementBuilder::new("option")?
        .attr("value", "")?
        .text("Choose a tariff")
        .build();
    append_child(&select, &placeholder)?;
    Ok(select)
}

pub fn render_calculator_section(state: &AppState) -> Result<Element, JsValue> {
    let section = section(Section::Calculator.element_id(), "💰 Delivery cost")?;
    let inputs = PackageInputs::default();
    inputs.append_package_fields(&section, "calc")?;

    let calculate = button("calcButton", "btn-primary", "Calculate")?;
    {
        let state = state.clone();
        let inputs = inputs.clone();
        on_click(&calculate, move |_| {
            let vm = PackageViewModel::new(&state);
            let form = inputs.form();
            app::run(&state, async move { vm.calculate(&form).await });
        })?;
    }
    append_child(&section, &calculate)?;

    let by_tariff = ElementBuilder::new("div")?.class("tariff-quote").build();
    append_child(&by_tariff, &ElementBuilder::new("h3")?.text("By tariff").build())?;
    inputs.append_dimension_fields(&by_tariff)?;
    append_child(&by_tariff, &tariff_select()?)?;

    let load_tariffs = button("tariffsButton", "btn-secondary", "Load tariffs")?;
    {
        let state = state.clone();
        on_click(&load_tariffs, move |_| {
            let vm = PackageViewModel::new(&state);
            app::run(&state, async move { vm.load_tariffs().await });
        })?;
    }
    append_child(&by_tariff, &load_tariffs)?;

    let calculate_by_tariff = button("calcTariffButton", "btn-primary", "Calculate by tariff")?;
    {
        let state = state.clone();
        on_click(&calculate_by_tariff, move |_| {
            let vm = PackageViewModel::new(&state);
            let form = inputs.form();
            app::run(&state, async move { vm.calculate_by_tariff(&form).await });
        })?;
    }
    append_child(&by_tariff, &calculate_by_tariff)?;
    append_child(&section, &by_tariff)?;

    append_child(&section, &result_region(Region::Quote.element_id())?)?;
    Ok(section)
}

pub fn render_create_section(state: &AppState) -> Result<Element, JsValue> {
    let section = section(Section::Create.element_id(), "📦 New package")?;
    let inputs = PackageInputs::default();
    inputs.append_package_fields(&section, "create")?;

    let create = button("createButton", "btn-primary", "Create package")?;
    {
        let state = state.clone();
        on_click(&create, move |_| {
            let vm = PackageViewModel::new(&state);
            let form = inputs.form();
            app::run(&state, async move { vm.create_package(&form).await });
        })?;
    }
    append_child(&section, &create)?;

    append_child(&section, &result_region(Region::Created.element_id())?)?;
    Ok(section)
}
