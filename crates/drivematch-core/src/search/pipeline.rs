//! Remote query, adapter and local filter composed into one pass.

use super::query::{SearchInput, SearchQuery};
use super::source::InstructorSource;
use crate::error::Result;
use crate::models::{apply_local_filters, InstructorViewModel};
use std::sync::Arc;
use tracing::{debug, warn};

/// Produces the displayed instructor list from a search input.
#[derive(Clone)]
pub struct SearchPipeline {
    source: Arc<dyn InstructorSource>,
}

impl std::fmt::Debug for SearchPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchPipeline").finish_non_exhaustive()
    }
}

impl SearchPipeline {
    pub fn new(source: Arc<dyn InstructorSource>) -> Self {
        Self { source }
    }

    /// Run one search.
    ///
    /// Source failures are logged and yield an empty list. Nothing is
    /// retried.
    pub async fn run(&self, input: &SearchInput) -> Vec<InstructorViewModel> {
        match self.try_run(input).await {
            Ok(instructors) => instructors,
            Err(e) => {
                warn!(kind = e.kind(), "Instructor search failed: {}", e);
                Vec::new()
            }
        }
    }

    /// Same as [`run`](Self::run) but propagates the source error.
    pub async fn try_run(&self, input: &SearchInput) -> Result<Vec<InstructorViewModel>> {
        let query = SearchQuery::from_input(input);

        let records = if query.is_unfiltered() {
            debug!("No search parameters set, fetching all instructors");
            self.source.fetch_all().await?
        } else {
            debug!("Searching instructors with {:?}", query);
            self.source.search(&query).await?
        };

        let fetched = records.len();
        let adapted: Vec<InstructorViewModel> =
            records.into_iter().map(InstructorViewModel::from).collect();
        let filtered = apply_local_filters(adapted, &input.criteria);

        debug!(
            "Instructor search returned {} records, {} after local filters",
            fetched,
            filtered.len()
        );

        Ok(filtered)
    }
}
