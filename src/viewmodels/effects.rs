// ============================================================================
// EFFECTS - What a view-model asks the view layer to do
// ============================================================================

use crate::models::{CreatedPackage, Quote, Tariff};
use crate::state::{Region, RequestTracker, Ticket};
use crate::viewmodels::PackageList;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
            ToastKind::Info => "toast-info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Error, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Info, message: message.into() }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RegionContent {
    Quote(Quote),
    Created(CreatedPackage),
    Packages(PackageList),
    Tariffs(Vec<Tariff>),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    Notify(Toast),
    Render(Region, RegionContent),
    Clear(Region),
    RefreshPackages,
}

impl Effect {
    pub fn error(message: impl Into<String>) -> Self {
        Effect::Notify(Toast::error(message))
    }

    /// Region this effect writes to, if any
    pub fn region(&self) -> Option<Region> {
        match self {
            Effect::Render(region, _) | Effect::Clear(region) => Some(*region),
            _ => None,
        }
    }
}

/// Strip region writes from the effects of a superseded request.
/// Notifications are kept.
pub fn drop_stale(effects: Vec<Effect>, ticket: &Ticket, tracker: &RequestTracker) -> Vec<Effect> {
    if tracker.is_current(ticket) {
        return effects;
    }
    log::debug!("⏭️ [APP] Stale response for {:?}, region left untouched", ticket.region);
    effects
        .into_iter()
        .filter(|effect| effect.region() != Some(ticket.region))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote() -> Quote {
        Quote { cost: 1.0, currency: "RUB".into(), estimated_hours: 2.0 }
    }

    #[test]
    fn current_ticket_keeps_everything() {
        let tracker = RequestTracker::new();
        let ticket = tracker.begin(Region::Quote);
        let effects = vec![Effect::Render(Region::Quote, RegionContent::Quote(quote()))];
        assert_eq!(drop_stale(effects.clone(), &ticket, &tracker), effects);
    }

    #[test]
    fn stale_ticket_keeps_only_notifications() {
        let tracker = RequestTracker::new();
        let old = tracker.begin(Region::Quote);
        let _new = tracker.begin(Region::Quote);

        let effects = vec![Effect::error("boom"), Effect::Clear(Region::Quote)];
        assert_eq!(drop_stale(effects, &old, &tracker), vec![Effect::error("boom")]);

        let effects = vec![Effect::Render(Region::Quote, RegionContent::Quote(quote()))];
        assert!(drop_stale(effects, &old, &tracker).is_empty());
    }

    #[test]
    fn toast_kinds_map_to_css() {
        assert_eq!(Toast::success("ok").kind.css_class(), "toast-success");
        assert_eq!(Toast::error("no").kind.css_class(), "toast-error");
        assert_eq!(Toast::info("hi").kind.css_class(), "toast-info");
    }
}
