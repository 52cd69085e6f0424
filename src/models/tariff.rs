use serde::{Deserialize, Serialize};

/// Tariff offered by the calculator service (`GET /tariffs`)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Tariff {
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub base_rate: f64,
    #[serde(default)]
    pub price_per_km: f64,
    #[serde(default)]
    pub price_per_kg: f64,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub volumetric_divider: f64,
    #[serde(default)]
    pub speed_kmph: f64,
}

impl Tariff {
    /// Label for the tariff selector
    pub fn label(&self) -> String {
        if self.name.is_empty() {
            self.code.clone()
        } else {
            format!("{} ({})", self.name, self.code)
        }
    }
}
