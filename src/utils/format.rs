// ============================================================================
// FORMAT - Text shown on result cards
// ============================================================================

use chrono::{DateTime, Utc};

/// Whole numbers without decimals, everything else with two
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

pub fn format_cost(cost: f64, currency: &str) -> String {
    let currency = currency.trim();
    if currency.is_empty() {
        format_number(cost)
    } else {
        format!("{} {}", format_number(cost), currency)
    }
}

/// Fixed precision with trailing zeros dropped: 1.50 -> "1.5", 2.000 -> "2"
fn trim_decimals(value: f64, precision: usize) -> String {
    let text = format!("{:.*}", precision, value);
    if !text.contains('.') {
        return text;
    }
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

pub fn format_hours(hours: f64) -> String {
    format!("{} h", trim_decimals(hours, 2))
}

pub fn format_weight(weight: f64) -> String {
    format!("{} kg", trim_decimals(weight, 3))
}

pub fn format_route(from: &str, to: &str) -> String {
    format!("{} → {}", from, to)
}

/// `None` unless all three dimensions are positive
pub fn format_dimensions(length: i64, width: i64, height: i64) -> Option<String> {
    if length <= 0 || width <= 0 || height <= 0 {
        return None;
    }
    Some(format!("{}×{}×{} cm", length, width, height))
}

pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M UTC").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn cost_keeps_cents_only_when_needed() {
        assert_eq!(format_cost(300.0, "RUB"), "300 RUB");
        assert_eq!(format_cost(12.5, "RUB"), "12.50 RUB");
        assert_eq!(format_cost(7.0, " "), "7");
    }

    #[test]
    fn hours_and_weight_are_compact() {
        assert_eq!(format_hours(36.0), "36 h");
        assert_eq!(format_hours(1.5), "1.5 h");
        assert_eq!(format_hours(2.25), "2.25 h");
        assert_eq!(format_weight(2.0), "2 kg");
        assert_eq!(format_weight(0.75), "0.75 kg");
    }

    #[test]
    fn route_and_dimensions() {
        assert_eq!(format_route("Moscow", "Kazan"), "Moscow → Kazan");
        assert_eq!(format_dimensions(0, 0, 0), None);
        assert_eq!(format_dimensions(-1, 20, 10), None);
        assert_eq!(format_dimensions(30, 0, 10), None);
        assert_eq!(format_dimensions(30, 20, 10).as_deref(), Some("30×20×10 cm"));
    }

    #[test]
    fn timestamp_is_rendered_in_utc() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 9, 7, 0).unwrap();
        assert_eq!(format_timestamp(&ts), "2024-05-01 09:07 UTC");
    }
}
