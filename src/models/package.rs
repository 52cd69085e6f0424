use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::PAYMENT_STATUS_PAID;

/// Body of `/calculate` and `/create`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PackageRequest {
    pub weight: f64,
    pub from: String,
    pub to: String,
    pub address: String,
}

/// Body of `/calculate-by-tariff`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct TariffQuoteRequest {
    #[serde(flatten)]
    pub package: PackageRequest,
    pub length: u32,
    pub width: u32,
    pub height: u32,
    pub tariff_code: String,
}

/// Cost/time estimate, never persisted
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Quote {
    pub cost: f64,
    pub currency: String,
    pub estimated_hours: f64,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CreatedPackage {
    pub package_id: String,
    pub status: String,
    pub cost: f64,
    pub currency: String,
    pub estimated_hours: f64,
}

/// Package as returned by `/my/packages`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PackageRecord {
    pub package_id: String,
    pub from: String,
    pub to: String,
    pub address: String,
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub estimated_hours: f64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub payment_status: String,

    // Optional fields, shown when the gateway sends them
    // Signed: the gateway stores plain ints and may send zero or negative values
    #[serde(default)]
    pub length: i64,
    #[serde(default)]
    pub width: i64,
    #[serde(default)]
    pub height: i64,
    #[serde(default)]
    pub tariff_code: Option<String>,
    #[serde(default)]
    pub remaining_hours: Option<i64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl PackageRecord {
    pub fn is_paid(&self) -> bool {
        self.payment_status == PAYMENT_STATUS_PAID
    }

    pub fn tariff_code(&self) -> Option<&str> {
        self.tariff_code.as_deref().filter(|code| !code.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD: &str = r#"{
        "package_id": "pkg-1",
        "weight": 2.5,
        "length": 30, "width": 20, "height": 10,
        "from": "Moscow", "to": "Kazan", "address": "Lenina 1",
        "payment_status": "PAID",
        "status": "created",
        "cost": 450, "estimated_hours": 36, "remaining_hours": 12,
        "currency": "RUB",
        "created_at": "2024-05-01T09:07:00Z",
        "updated_at": "2024-05-01T09:07:00Z",
        "tariff_code": ""
    }"#;

    #[test]
    fn gateway_record_is_decoded() {
        let record: PackageRecord = serde_json::from_str(RECORD).unwrap();
        assert_eq!(record.package_id, "pkg-1");
        assert_eq!(record.cost, 450.0);
        assert_eq!(record.remaining_hours, Some(12));
        assert!(record.created_at.is_some());
        assert!(record.is_paid());
        assert_eq!(record.tariff_code(), None);
    }

    #[test]
    fn minimal_record_is_decoded() {
        let record: PackageRecord = serde_json::from_str(
            r#"{"package_id":"p","from":"A","to":"B","address":"x","payment_status":"PENDING"}"#,
        )
        .unwrap();
        assert!(!record.is_paid());
        assert_eq!(record.length, 0);
        assert_eq!(record.created_at, None);
    }

    #[test]
    fn negative_dimension_keeps_the_list() {
        let body = r#"[
            {"package_id":"a","from":"A","to":"B","address":"x","length":30,"width":20,"height":10},
            {"package_id":"b","from":"A","to":"B","address":"y","length":-1,"width":20,"height":10}
        ]"#;
        let records: Vec<PackageRecord> = serde_json::from_str(body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].length, -1);
    }

    #[test]
    fn payment_status_match_is_exact() {
        let mut record: PackageRecord = serde_json::from_str(RECORD).unwrap();
        record.payment_status = "paid".into();
        assert!(!record.is_paid());
    }

    #[test]
    fn tariff_request_is_flat() {
        let req = TariffQuoteRequest {
            package: PackageRequest {
                weight: 1.0,
                from: "A".into(),
                to: "B".into(),
                address: "C".into(),
            },
            length: 1,
            width: 2,
            height: 3,
            tariff_code: "EXPRESS".into(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["weight"], 1.0);
        assert_eq!(json["from"], "A");
        assert_eq!(json["tariff_code"], "EXPRESS");
        assert!(json.get("package").is_none());
    }
}
