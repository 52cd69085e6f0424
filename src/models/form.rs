// ============================================================================
// FORMS - Raw input from the page and its validation
// ============================================================================

use crate::models::{Credentials, PackageRequest, TariffQuoteRequest};

#[derive(Clone, PartialEq, Debug, Default)]
pub struct CredentialsForm {
    pub email: String,
    pub password: String,
}

impl CredentialsForm {
    pub fn validate(&self) -> Result<Credentials, String> {
        let email = self.email.trim();
        if email.is_empty() || self.password.trim().is_empty() {
            return Err("Please enter your email and password".to_string());
        }
        Ok(Credentials {
            email: email.to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct PackageForm {
    pub weight: String,
    pub from: String,
    pub to: String,
    pub address: String,
    // Only used by tariff quotes
    pub length: String,
    pub width: String,
    pub height: String,
    pub tariff_code: String,
}

impl PackageForm {
    pub fn validate(&self) -> Result<PackageRequest, String> {
        let weight = self
            .weight
            .trim()
            .replace(',', ".")
            .parse::<f64>()
            .ok()
            .filter(|w| w.is_finite() && *w > 0.0)
            .ok_or_else(|| "Weight must be a positive number".to_string())?;

        let from = required(&self.from, "Origin city")?;
        let to = required(&self.to, "Destination city")?;
        let address = required(&self.address, "Address")?;

        Ok(PackageRequest { weight, from, to, address })
    }

    pub fn validate_tariff_quote(&self) -> Result<TariffQuoteRequest, String> {
        let package = self.validate()?;
        let tariff_code = self.tariff_code.trim();
        if tariff_code.is_empty() {
            return Err("Please choose a tariff".to_string());
        }

        Ok(TariffQuoteRequest {
            package,
            length: dimension(&self.length, "Length")?,
            width: dimension(&self.width, "Width")?,
            height: dimension(&self.height, "Height")?,
            tariff_code: tariff_code.to_string(),
        })
    }
}

fn required(value: &str, field: &str) -> Result<String, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(format!("{} is required", field));
    }
    Ok(value.to_string())
}

/// Blank means 0 cm
fn dimension(value: &str, field: &str) -> Result<u32, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(0);
    }
    value
        .parse::<u32>()
        .map_err(|_| format!("{} must be a whole number of centimetres", field))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> PackageForm {
        PackageForm {
            weight: " 2.5 ".into(),
            from: "Moscow".into(),
            to: " Kazan ".into(),
            address: "Lenina 1".into(),
            ..Default::default()
        }
    }

    #[test]
    fn valid_form_is_trimmed() {
        let req = filled().validate().unwrap();
        assert_eq!(req.weight, 2.5);
        assert_eq!(req.to, "Kazan");
    }

    #[test]
    fn decimal_comma_is_accepted() {
        let form = PackageForm { weight: "1,25".into(), ..filled() };
        assert_eq!(form.validate().unwrap().weight, 1.25);
    }

    #[test]
    fn bad_weight_is_rejected() {
        for weight in ["", "abc", "0", "-3", "NaN", "inf"] {
            let form = PackageForm { weight: weight.into(), ..filled() };
            assert!(form.validate().is_err(), "weight {:?} should fail", weight);
        }
    }

    #[test]
    fn blank_address_is_rejected() {
        let form = PackageForm { address: "   ".into(), ..filled() };
        assert_eq!(form.validate().unwrap_err(), "Address is required");
    }

    #[test]
    fn tariff_quote_needs_a_tariff() {
        assert!(filled().validate_tariff_quote().is_err());
    }

    #[test]
    fn tariff_quote_dimensions_default_to_zero() {
        let form = PackageForm {
            tariff_code: "STD".into(),
            length: "40".into(),
            ..filled()
        };
        let req = form.validate_tariff_quote().unwrap();
        assert_eq!((req.length, req.width, req.height), (40, 0, 0));
        assert_eq!(req.tariff_code, "STD");
    }

    #[test]
    fn negative_dimension_is_rejected() {
        let form = PackageForm {
            tariff_code: "STD".into(),
            height: "-1".into(),
            ..filled()
        };
        assert!(form.validate_tariff_quote().unwrap_err().starts_with("Height"));
    }

    #[test]
    fn credentials_need_both_fields() {
        let form = CredentialsForm { email: "a@b.c".into(), password: " ".into() };
        assert!(form.validate().is_err());

        let form = CredentialsForm { email: " a@b.c ".into(), password: "secret".into() };
        let creds = form.validate().unwrap();
        assert_eq!(creds.email, "a@b.c");
        assert_eq!(creds.password, "secret");
    }
}
