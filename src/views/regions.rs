// ============================================================================
// REGIONS - Writing results into the output areas
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, clear_children, get_element_by_id, ElementBuilder};
use crate::models::Tariff;
use crate::state::{AppState, Region};
use crate::viewmodels::RegionContent;
use crate::views::{render_created_card, render_package_list, render_quote_card};

fn region_element(region: Region) -> Result<Element, JsValue> {
    get_element_by_id(region.element_id())
        .ok_or_else(|| JsValue::from_str(&format!("Missing #{}", region.element_id())))
}

pub fn render_region(state: &AppState, region: Region, content: &RegionContent) -> Result<(), JsValue> {
    let element = region_element(region)?;

    match content {
        RegionContent::Quote(quote) => replace_with(&element, render_quote_card(quote)?),
        RegionContent::Created(created) => replace_with(&element, render_created_card(created)?),
        RegionContent::Packages(list) => render_package_list(state, &element, list),
        RegionContent::Tariffs(tariffs) => fill_tariffs(&element, tariffs),
    }
}

/// Empty a region; the tariff selector keeps its placeholder option
pub fn clear_region(region: Region) -> Result<(), JsValue> {
    let element = region_element(region)?;
    match region {
        Region::Tariffs => fill_tariffs(&element, &[]),
        _ => {
            clear_children(&element);
            Ok(())
        }
    }
}

fn replace_with(element: &Element, child: Element) -> Result<(), JsValue> {
    clear_children(element);
    append_child(element, &child)
}

fn fill_tariffs(select: &Element, tariffs: &[Tariff]) -> Result<(), JsValue> {
    clear_children(select);
    let placeholder = ElementBuilder::new("option")?
        .attr("value", "")?
        .text("Choose a tariff")
        .build();
    append_child(select, &placeholder)?;

    for tariff in tariffs {
        let option = ElementBuilder::new("option")?
            .attr("value", &tariff.code)?
            .text(&tariff.label())
            .build();
        append_child(select, &option)?;
    }
    Ok(())
}
