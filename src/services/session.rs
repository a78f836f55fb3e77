use std::sync::{
    atomic::{AtomicU64, Ordering},
    Mutex, MutexGuard,
};

use log::debug;

use crate::models::criteria::SearchCriteria;
use crate::models::property::NormalizedProperty;

use super::filter::filter;
use super::search::PropertyService;

/// Handed out when a search starts; only the newest ticket may publish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

#[derive(Debug, Default)]
struct SessionState {
    criteria: SearchCriteria,
    results: Vec<NormalizedProperty>,
}

/// Working set of one search screen: the current criteria and the latest
/// result list. A response that arrives after a newer search started is
/// discarded.
#[derive(Debug, Default)]
pub struct SearchSession {
    generation: AtomicU64,
    state: Mutex<SessionState>,
}

impl SearchSession {
    pub fn new() -> SearchSession {
        SearchSession::default()
    }

    fn state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn begin(&self) -> SearchTicket {
        SearchTicket(self.generation.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Publishes `results` if `ticket` is still the newest search. Returns
    /// whether the working set was replaced.
    pub fn complete(&self, ticket: SearchTicket, results: Vec<NormalizedProperty>) -> bool {
        // Generation is checked under the lock so a newer search cannot
        // publish between the check and the write.
        let mut state = self.state();
        if ticket.0 != self.generation.load(Ordering::Acquire) {
            debug!("Discarding stale search response (ticket {})", ticket.0);
            return false;
        }
        state.results = results;
        true
    }

    pub async fn run_search(
        &self,
        service: &PropertyService,
        location: &str,
        property_type: &str,
    ) -> bool {
        let ticket = self.begin();
        let results = service.search(location, property_type).await;
        self.complete(ticket, results)
    }

    pub fn set_criteria(&self, criteria: SearchCriteria) {
        self.state().criteria = criteria;
    }

    pub fn criteria(&self) -> SearchCriteria {
        self.state().criteria.clone()
    }

    pub fn results(&self) -> Vec<NormalizedProperty> {
        self.state().results.clone()
    }

    /// Results narrowed by the current criteria.
    pub fn visible(&self) -> Vec<NormalizedProperty> {
        let state = self.state();
        filter(&state.results, &state.criteria)
    }
}
