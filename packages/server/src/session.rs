//! The single-user search session.
//!
//! Owns the active [`FilterCriteria`] and the address-search submission
//! counter. Geocoding suspends between submitting an address and applying
//! its result, so a user can submit a second address while the first is
//! still resolving; the counter guarantees last-submission-wins — a stale
//! completion is discarded instead of clobbering the newer search.

use playground_map_query::FilterCriteria;

/// State for one explorer session.
#[derive(Debug, Default)]
pub struct SearchSession {
    criteria: FilterCriteria,
    latest_submission: u64,
}

/// Identifies one address-search submission. Issued by
/// [`SearchSession::begin_search`] and redeemed by
/// [`SearchSession::complete_search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

/// Whether a search completion was applied or superseded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchCompletion {
    /// The completion belonged to the latest submission and was applied.
    Applied,
    /// A newer submission arrived first; this completion was discarded.
    Stale,
}

impl SearchSession {
    /// The currently active criteria.
    #[must_use]
    pub const fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Replaces the active criteria (a filter-panel change). Does not
    /// affect pending address searches.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    /// Registers a new address-search submission, superseding any still
    /// in flight.
    pub fn begin_search(&mut self) -> SearchTicket {
        self.latest_submission += 1;
        SearchTicket(self.latest_submission)
    }

    /// Applies a finished search's criteria if it is still the latest
    /// submission; otherwise discards it.
    pub fn complete_search(
        &mut self,
        ticket: SearchTicket,
        criteria: FilterCriteria,
    ) -> SearchCompletion {
        if ticket.0 == self.latest_submission {
            self.criteria = criteria;
            SearchCompletion::Applied
        } else {
            SearchCompletion::Stale
        }
    }
}
