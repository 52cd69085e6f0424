// ============================================================================
// REQUESTS - Latest-request tickets per output region
// ============================================================================
// A response may only touch its region if no newer request was issued for
// that region in the meantime.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    Quote,
    Created,
    Packages,
    Tariffs,
}

impl Region {
    pub const ALL: [Region; 4] = [Region::Quote, Region::Created, Region::Packages, Region::Tariffs];

    /// Element the region renders into
    pub fn element_id(&self) -> &'static str {
        match self {
            Region::Quote => "calcResult",
            Region::Created => "createResult",
            Region::Packages => "packagesResult",
            Region::Tariffs => "tariffSelect",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket {
    pub region: Region,
    seq: u64,
}

#[derive(Default)]
pub struct RequestTracker {
    latest: RefCell<HashMap<Region, u64>>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new request for `region`; older tickets become stale
    pub fn begin(&self, region: Region) -> Ticket {
        let mut latest = self.latest.borrow_mut();
        let seq = latest.entry(region).or_insert(0);
        *seq += 1;
        Ticket { region, seq: *seq }
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        self.latest.borrow().get(&ticket.region).copied() == Some(ticket.seq)
    }

    /// Make every in-flight request stale (logout)
    pub fn invalidate_all(&self) {
        for region in Region::ALL {
            self.begin(region);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_ticket_wins() {
        let tracker = RequestTracker::new();
        let first = tracker.begin(Region::Quote);
        let second = tracker.begin(Region::Quote);
        assert!(!tracker.is_current(&first));
        assert!(tracker.is_current(&second));
    }

    #[test]
    fn regions_are_independent() {
        let tracker = RequestTracker::new();
        let quote = tracker.begin(Region::Quote);
        let _packages = tracker.begin(Region::Packages);
        assert!(tracker.is_current(&quote));
    }

    #[test]
    fn invalidate_all_makes_everything_stale() {
        let tracker = RequestTracker::new();
        let tickets: Vec<_> = Region::ALL.iter().map(|r| tracker.begin(*r)).collect();
        tracker.invalidate_all();
        assert!(tickets.iter().all(|t| !tracker.is_current(t)));
    }
}
