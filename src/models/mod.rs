pub mod auth;
pub mod package;
pub mod tariff;
pub mod form;

pub use auth::{AuthResponse, Credentials};
pub use package::{CreatedPackage, PackageRecord, PackageRequest, Quote, TariffQuoteRequest};
pub use tariff::Tariff;
pub use form::{CredentialsForm, PackageForm};
