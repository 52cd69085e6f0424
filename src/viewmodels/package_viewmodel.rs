// ============================================================================
// PACKAGE VIEWMODEL - Quotes, package creation, listing, payment
// ============================================================================

use crate::error::ApiError;
use crate::models::{CreatedPackage, PackageForm, PackageRecord, Quote, Tariff};
use crate::services::ApiClient;
use crate::state::{AppState, Region, Ticket};
use crate::viewmodels::{drop_stale, Effect, RegionContent, Toast};

/// One card of the package list
#[derive(Clone, Debug, PartialEq)]
pub struct PackageCard {
    pub package: PackageRecord,
    /// Whether the card offers a payment button
    pub payable: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PackageList {
    Empty,
    Cards(Vec<PackageCard>),
}

impl From<Vec<PackageRecord>> for PackageList {
    fn from(packages: Vec<PackageRecord>) -> Self {
        if packages.is_empty() {
            return PackageList::Empty;
        }
        PackageList::Cards(
            packages
                .into_iter()
                .map(|package| PackageCard {
                    payable: !package.is_paid(),
                    package,
                })
                .collect(),
        )
    }
}

pub fn quote_effects(result: Result<Quote, ApiError>) -> Vec<Effect> {
    match result {
        Ok(quote) => vec![Effect::Render(Region::Quote, RegionContent::Quote(quote))],
        Err(err) => failure(err, Some(Region::Quote)),
    }
}

pub fn created_effects(result: Result<CreatedPackage, ApiError>) -> Vec<Effect> {
    match result {
        Ok(created) => {
            log::info!("✅ [PACKAGES] Package {} created", created.package_id);
            vec![Effect::Render(Region::Created, RegionContent::Created(created))]
        }
        Err(err) => failure(err, Some(Region::Created)),
    }
}

pub fn package_list_effects(result: Result<Vec<PackageRecord>, ApiError>) -> Vec<Effect> {
    match result {
        Ok(packages) => vec![Effect::Render(
            Region::Packages,
            RegionContent::Packages(PackageList::from(packages)),
        )],
        Err(err) => failure(err, None),
    }
}

pub fn tariff_effects(result: Result<Vec<Tariff>, ApiError>) -> Vec<Effect> {
    match result {
        Ok(tariffs) if tariffs.is_empty() => vec![
            Effect::Render(Region::Tariffs, RegionContent::Tariffs(tariffs)),
            Effect::Notify(Toast::info("No tariffs available")),
        ],
        Ok(tariffs) => vec![Effect::Render(Region::Tariffs, RegionContent::Tariffs(tariffs))],
        Err(err) => failure(err, None),
    }
}

/// A successful payment refreshes the list exactly once
pub fn payment_effects(result: Result<String, ApiError>) -> Vec<Effect> {
    match result {
        Ok(message) => vec![Effect::Notify(Toast::success(message)), Effect::RefreshPackages],
        Err(err) => failure(err, None),
    }
}

/// Drop the list refresh when the session ended while the request was in flight
pub fn without_refresh_when_signed_out(effects: Vec<Effect>, authenticated: bool) -> Vec<Effect> {
    if authenticated {
        return effects;
    }
    effects
        .into_iter()
        .filter(|effect| *effect != Effect::RefreshPackages)
        .collect()
}

/// One error notification, plus clearing the region when the operation owns one
fn failure(err: ApiError, clear: Option<Region>) -> Vec<Effect> {
    log::warn!("⚠️ [PACKAGES] {}", err);
    let mut effects = vec![Effect::error(err.user_message())];
    if let Some(region) = clear {
        effects.push(Effect::Clear(region));
    }
    effects
}

pub struct PackageViewModel {
    state: AppState,
}

impl PackageViewModel {
    pub fn new(state: &AppState) -> Self {
        Self {
            state: state.clone(),
        }
    }

    /// Token is read per call so that a login between calls is picked up
    fn client(&self) -> ApiClient {
        ApiClient::new().with_token(self.state.auth.token())
    }

    fn finish(&self, ticket: Ticket, effects: Vec<Effect>) -> Vec<Effect> {
        drop_stale(effects, &ticket, &self.state.requests)
    }

    pub async fn calculate(&self, form: &PackageForm) -> Vec<Effect> {
        let request = match form.validate() {
            Ok(request) => request,
            Err(message) => return vec![Effect::error(message)],
        };
        let ticket = self.state.requests.begin(Region::Quote);
        let result = self.client().calculate(&request).await;
        self.finish(ticket, quote_effects(result))
    }

    pub async fn calculate_by_tariff(&self, form: &PackageForm) -> Vec<Effect> {
        let request = match form.validate_tariff_quote() {
            Ok(request) => request,
            Err(message) => return vec![Effect::error(message)],
        };
        let ticket = self.state.requests.begin(Region::Quote);
        let result = self.client().calculate_by_tariff(&request).await;
        self.finish(ticket, quote_effects(result))
    }

    pub async fn create_package(&self, form: &PackageForm) -> Vec<Effect> {
        let request = match form.validate() {
            Ok(request) => request,
            Err(message) => return vec![Effect::error(message)],
        };
        let ticket = self.state.requests.begin(Region::Created);
        let result = self.client().create_package(&request).await;
        self.finish(ticket, created_effects(result))
    }

    pub async fn load_packages(&self) -> Vec<Effect> {
        let ticket = self.state.requests.begin(Region::Packages);
        let result = self.client().my_packages().await;
        self.finish(ticket, package_list_effects(result))
    }

    pub async fn load_tariffs(&self) -> Vec<Effect> {
        let ticket = self.state.requests.begin(Region::Tariffs);
        let result = self.client().tariffs().await;
        self.finish(ticket, tariff_effects(result))
    }

    pub async fn pay(&self, package_id: &str) -> Vec<Effect> {
        let effects = payment_effects(self.client().pay_for_package(package_id).await);
        without_refresh_when_signed_out(effects, self.state.auth.is_authenticated())
    }
}
