// ============================================================================
// CARDS - Quote, created-package and package-list cards
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::app;
use crate::dom::{append_child, on_click, set_busy, ElementBuilder};
use crate::models::{CreatedPackage, PackageRecord, Quote};
use crate::state::AppState;
use crate::utils::{
    format_cost, format_dimensions, format_hours, format_route, format_timestamp, format_weight,
};
use crate::viewmodels::{PackageCard, PackageViewModel};
use crate::views::card_line;

fn card() -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?.class("package-card").build())
}

pub fn render_quote_card(quote: &Quote) -> Result<Element, JsValue> {
    let card = card()?;
    append_child(&card, &card_line("💰 Cost:", &format_cost(quote.cost, &quote.currency))?)?;
    append_child(&card, &card_line("⏱ Delivery time:", &format_hours(quote.estimated_hours))?)?;
    Ok(card)
}

pub fn render_created_card(created: &CreatedPackage) -> Result<Element, JsValue> {
    let card = card()?;
    append_child(&card, &card_line("📦 ID:", &created.package_id)?)?;
    append_child(&card, &card_line("📍 Status:", &created.status)?)?;
    append_child(&card, &card_line("💰 Cost:", &format_cost(created.cost, &created.currency))?)?;
    append_child(&card, &card_line("⏱ Delivery time:", &format_hours(created.estimated_hours))?)?;
    Ok(card)
}

/// Card of the package list, with a pay button for unpaid packages
pub fn render_package_card(state: &AppState, item: &PackageCard) -> Result<Element, JsValue> {
    let package = &item.package;
    let card = ElementBuilder::new("div")?
        .class("package-card")
        .attr("data-package-id", &package.package_id)?
        .build();

    let title = ElementBuilder::new("h4")?
        .text(&format!("📦 {}", format_route(&package.from, &package.to)))
        .build();
    append_child(&card, &title)?;

    for line in package_lines(package) {
        append_child(&card, &card_line(&line.0, &line.1)?)?;
    }

    if item.payable {
        append_child(&card, &pay_button(state, &package.package_id)?)?;
    }

    Ok(card)
}

/// Label/value pairs shown on a package card
fn package_lines(package: &PackageRecord) -> Vec<(String, String)> {
    let mut lines = vec![
        ("Address:".to_string(), package.address.clone()),
        ("Weight:".to_string(), format_weight(package.weight)),
    ];
    if let Some(dimensions) = format_dimensions(package.length, package.width, package.height) {
        lines.push(("Dimensions:".to_string(), dimensions));
    }
    if let Some(tariff) = package.tariff_code() {
        lines.push(("Tariff:".to_string(), tariff.to_string()));
    }
    lines.push(("Cost:".to_string(), format_cost(package.cost, &package.currency)));
    lines.push(("Estimated time:".to_string(), format_hours(package.estimated_hours)));
    if let Some(remaining) = package.remaining_hours.filter(|h| *h > 0) {
        lines.push(("Remaining:".to_string(), format_hours(remaining as f64)));
    }
    lines.push(("Status:".to_string(), package.status.clone()));
    lines.push(("Payment:".to_string(), payment_label(package)));
    if let Some(created_at) = &package.created_at {
        lines.push(("Created:".to_string(), format_timestamp(created_at)));
    }
    lines
}

fn payment_label(package: &PackageRecord) -> String {
    if package.payment_status.is_empty() {
        "not paid".to_string()
    } else {
        package.payment_status.clone()
    }
}

fn pay_button(state: &AppState, package_id: &str) -> Result<Element, JsValue> {
    let button = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-pay")
        .text("💳 Pay")
        .build();

    let state = state.clone();
    let package_id = package_id.to_string();
    let target = button.clone();
    on_click(&button, move |_| {
        let vm = PackageViewModel::new(&state);
        let package_id = package_id.clone();
        let target = target.clone();
        let _ = set_busy(&target, true);
        app::run(&state, async move {
            let effects = vm.pay(&package_id).await;
            let _ = set_busy(&target, false);
            effects
        });
    })?;

    Ok(button)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> PackageRecord {
        serde_json::from_value(serde_json::json!({
            "package_id": "p1",
            "from": "A", "to": "B", "address": "Main st 1",
            "weight": 2, "cost": 99.5, "currency": "RUB",
            "estimated_hours": 12, "status": "created", "payment_status": ""
        }))
        .unwrap()
    }

    fn labels(package: &PackageRecord) -> Vec<String> {
        package_lines(package).into_iter().map(|(label, _)| label).collect()
    }

    #[test]
    fn basic_card_lines() {
        let lines = package_lines(&record());
        assert_eq!(
            labels(&record()),
            vec!["Address:", "Weight:", "Cost:", "Estimated time:", "Status:", "Payment:"]
        );
        assert_eq!(lines[2].1, "99.50 RUB");
        assert_eq!(lines[5].1, "not paid");
    }

    #[test]
    fn optional_fields_are_shown_when_present() {
        let mut package = record();
        package.length = 10;
        package.width = 10;
        package.height = 5;
        package.tariff_code = Some("EXPRESS".into());
        package.remaining_hours = Some(4);
        package.payment_status = "PAID".into();

        let all = labels(&package);
        assert!(all.contains(&"Dimensions:".to_string()));
        assert!(all.contains(&"Tariff:".to_string()));
        assert!(all.contains(&"Remaining:".to_string()));
        assert_eq!(package_lines(&package).last().unwrap().1, "PAID");
    }
}
