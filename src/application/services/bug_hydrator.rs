use crate::bug_tracking::domain::{BugDetails, BugRecord, BugSummary};
use crate::bug_tracking::policies::SecurityClassification;
use crate::ports::outbound::{BugTracker, Clock};
use crate::shared::chunking::chunks;
use crate::shared::Result;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Number of bug ids fetched per remote call
pub const DEFAULT_HYDRATION_CHUNK_SIZE: usize = 20;

/// BugHydrator turns a page of summaries into display records
///
/// Full records are fetched in fixed-size chunks, one chunk at a time.
///
/// # Type Parameters
/// * `T` - BugTracker implementation
/// * `C` - Clock implementation
pub struct BugHydrator<T: BugTracker, C: Clock> {
    tracker: Arc<T>,
    clock: C,
    classification: SecurityClassification,
    chunk_size: usize,
}

impl<T: BugTracker, C: Clock> BugHydrator<T, C> {
    pub fn new(tracker: Arc<T>, clock: C, classification: SecurityClassification) -> Self {
        Self::with_chunk_size(tracker, clock, classification, DEFAULT_HYDRATION_CHUNK_SIZE)
    }

    /// A chunk size of zero is raised to one.
    pub fn with_chunk_size(
        tracker: Arc<T>,
        clock: C,
        classification: SecurityClassification,
        chunk_size: usize,
    ) -> Self {
        Self {
            tracker,
            clock,
            classification,
            chunk_size: chunk_size.max(1),
        }
    }

    /// Fetches and derives display records for `page`
    ///
    /// Records come back in the order of `page`. Bugs the tracker no longer
    /// returns are left out.
    ///
    /// # Errors
    /// Any failed fetch fails the whole page.
    pub async fn hydrate(&self, page: &[BugSummary], collection: &str) -> Result<Vec<BugRecord>> {
        let mut fetched: HashMap<u64, BugDetails> = HashMap::with_capacity(page.len());

        for chunk in chunks(page, self.chunk_size) {
            let ids: Vec<u64> = chunk.iter().map(BugSummary::bug_id).collect();
            let details = self.tracker.fetch_by_ids(&ids).await?;
            debug!(requested = ids.len(), received = details.len(), "fetched bug details");
            fetched.extend(details.into_iter().map(|d| (d.bug_id, d)));
        }

        let now = self.clock.now();
        let records = page
            .iter()
            .filter_map(|summary| match fetched.get(&summary.bug_id()) {
                Some(details) => Some(BugRecord::from_details(
                    details,
                    collection,
                    &self.classification,
                    now,
                )),
                None => {
                    warn!(bug_id = summary.bug_id(), "bug missing from fetch response");
                    None
                }
            })
            .collect();

        Ok(records)
    }
}
