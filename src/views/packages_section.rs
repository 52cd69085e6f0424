// ============================================================================
// PACKAGES SECTION - "My packages" list
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::app;
use crate::dom::{append_child, clear_children, on_click, ElementBuilder};
use crate::state::{AppState, Region};
use crate::utils::NO_PACKAGES_MESSAGE;
use crate::viewmodels::{PackageList, PackageViewModel, Section};
use crate::views::{button, render_package_card, result_region, section};

pub fn render_packages_section(state: &AppState) -> Result<Element, JsValue> {
    let section = section(Section::Packages.element_id(), "📋 My packages")?;

    let refresh = button("packagesButton", "btn-secondary", "🔄 Refresh")?;
    {
        let state = state.clone();
        on_click(&refresh, move |_| {
            let vm = PackageViewModel::new(&state);
            app::run(&state, async move { vm.load_packages().await });
        })?;
    }
    append_child(&section, &refresh)?;

    append_child(&section, &result_region(Region::Packages.element_id())?)?;
    Ok(section)
}

/// Replace the list contents: an empty-state line or one card per package
pub fn render_package_list(state: &AppState, container: &Element, list: &PackageList) -> Result<(), JsValue> {
    clear_children(container);

    match list {
        PackageList::Empty => {
            let empty = ElementBuilder::new("p")?
                .class("empty-state")
                .text(NO_PACKAGES_MESSAGE)
                .build();
            append_child(container, &empty)?;
        }
        PackageList::Cards(cards) => {
            for card in cards {
                append_child(container, &render_package_card(state, card)?)?;
            }
        }
    }

    Ok(())
}
