//! Debounced search driver.
//!
//! Input changes restart a quiet-period timer; only the last input of a
//! burst is searched. Searches run concurrently, and a response is
//! published only while its generation ticket is still the latest, so a
//! slow older request can never overwrite a newer result.

use super::generation::SearchGeneration;
use super::pipeline::SearchPipeline;
use super::query::SearchInput;
use crate::models::{FilterCriteria, InstructorViewModel};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::{JoinHandle, JoinSet};
use tracing::{debug, info};

/// A published search result.
///
/// Only the most recently fired search may publish. While a newer search is
/// in flight, older ones finish silently, so with a slow backend and steady
/// typing no intermediate result is shown.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchSnapshot {
    /// Ticket of the search that produced this snapshot; `0` before the
    /// first search completes.
    pub generation: u64,
    /// Input the search ran with.
    pub input: SearchInput,
    pub instructors: Vec<InstructorViewModel>,
}

/// Handle to a running debounced search.
///
/// Dropping the handle stops the driver task and cancels searches still in
/// flight. See [`SearchSnapshot`] for which results get published.
pub struct DebouncedSearch {
    input_tx: watch::Sender<SearchInput>,
    results_rx: watch::Receiver<SearchSnapshot>,
    generation: SearchGeneration,
    driver: JoinHandle<()>,
}

impl DebouncedSearch {
    /// Start the driver on the current tokio runtime.
    ///
    /// The default input is searched once after the first quiet period.
    pub fn spawn(pipeline: SearchPipeline, delay: Duration) -> Self {
        let (input_tx, input_rx) = watch::channel(SearchInput::default());
        let (results_tx, results_rx) = watch::channel(SearchSnapshot::default());
        let generation = SearchGeneration::new();

        info!("Starting debounced instructor search ({:?} quiet period)", delay);
        let driver = tokio::spawn(drive(
            pipeline,
            delay,
            input_rx,
            Arc::new(results_tx),
            generation.clone(),
        ));

        Self {
            input_tx,
            results_rx,
            generation,
            driver,
        }
    }

    /// Replace the whole input.
    pub fn update(&self, input: SearchInput) {
        self.input_tx.send_replace(input);
    }

    /// Change the free-text term, keeping the filters.
    pub fn set_query(&self, term: impl Into<String>) {
        let term = term.into();
        self.input_tx.send_modify(|input| input.term = term);
    }

    /// Change the filters, keeping the term.
    pub fn set_criteria(&self, criteria: FilterCriteria) {
        self.input_tx.send_modify(|input| input.criteria = criteria);
    }

    /// Reset all filters to their defaults.
    pub fn clear_filters(&self) {
        self.set_criteria(FilterCriteria::reset());
    }

    /// Current (possibly not yet searched) input.
    pub fn input(&self) -> SearchInput {
        self.input_tx.borrow().clone()
    }

    /// Receiver notified whenever a fresh snapshot is published.
    pub fn subscribe(&self) -> watch::Receiver<SearchSnapshot> {
        self.results_rx.clone()
    }

    /// The most recently published snapshot.
    pub fn latest(&self) -> SearchSnapshot {
        self.results_rx.borrow().clone()
    }

    /// Number of searches fired so far.
    pub fn searches_fired(&self) -> u64 {
        self.generation.latest()
    }
}

impl Drop for DebouncedSearch {
    fn drop(&mut self) {
        self.driver.abort();
    }
}

async fn drive(
    pipeline: SearchPipeline,
    delay: Duration,
    mut input_rx: watch::Receiver<SearchInput>,
    results_tx: Arc<watch::Sender<SearchSnapshot>>,
    generation: SearchGeneration,
) {
    // Owned here so aborting the driver aborts every in-flight search.
    let mut in_flight = JoinSet::new();
    let mut initial = true;

    'driver: loop {
        if !std::mem::take(&mut initial) {
            // Wait for the next change, reaping finished searches meanwhile.
            loop {
                tokio::select! {
                    changed = input_rx.changed() => {
                        if changed.is_err() {
                            break 'driver;
                        }
                        break;
                    }
                    Some(_) = in_flight.join_next(), if !in_flight.is_empty() => {}
                }
            }
        }

        // Quiet period, restarted by every further change.
        loop {
            tokio::select! {
                _ = tokio::time::sleep(delay) => break,
                changed = input_rx.changed() => {
                    if changed.is_err() {
                        break 'driver;
                    }
                }
            }
        }

        let input = input_rx.borrow_and_update().clone();
        let ticket = generation.advance();
        debug!("Firing instructor search #{} for '{}'", ticket, input.term);

        let pipeline = pipeline.clone();
        let results_tx = Arc::clone(&results_tx);
        let generation = generation.clone();
        in_flight.spawn(async move {
            let instructors = pipeline.run(&input).await;
            publish(&results_tx, &generation, ticket, input, instructors);
        });
    }

    debug!("Search input closed, stopping debounced search");
}

/// Publish a finished search unless a newer one has been issued or
/// published in the meantime.
fn publish(
    results_tx: &watch::Sender<SearchSnapshot>,
    generation: &SearchGeneration,
    ticket: u64,
    input: SearchInput,
    instructors: Vec<InstructorViewModel>,
) -> bool {
    let count = instructors.len();
    let published = results_tx.send_if_modified(|snapshot| {
        if generation.is_current(ticket) && ticket > snapshot.generation {
            *snapshot = SearchSnapshot {
                generation: ticket,
                input,
                instructors,
            };
            true
        } else {
            false
        }
    });

    if published {
        debug!("Published search #{} with {} instructors", ticket, count);
    } else {
        debug!(
            "Discarding stale search #{} (latest is #{})",
            ticket,
            generation.latest()
        );
    }

    published
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_rejects_superseded_ticket() {
        let (tx, rx) = watch::channel(SearchSnapshot::default());
        let generation = SearchGeneration::new();

        let old = generation.advance();
        let new = generation.advance();

        assert!(!publish(&tx, &generation, old, SearchInput::default(), Vec::new()));
        assert_eq!(rx.borrow().generation, 0);

        assert!(publish(&tx, &generation, new, SearchInput::default(), Vec::new()));
        assert_eq!(rx.borrow().generation, new);
    }

    #[test]
    fn test_publish_is_monotonic() {
        let (tx, rx) = watch::channel(SearchSnapshot::default());
        let generation = SearchGeneration::new();
        let ticket = generation.advance();

        assert!(publish(&tx, &generation, ticket, SearchInput::new("a", FilterCriteria::default()), Vec::new()));
        // Same ticket again must not republish.
        assert!(!publish(&tx, &generation, ticket, SearchInput::new("b", FilterCriteria::default()), Vec::new()));
        assert_eq!(rx.borrow().input.term, "a");
    }
}
