use crate::bug_tracking::domain::BugSummary;
use crate::ports::outbound::{BugSearch, BugTracker};
use crate::shared::Result;
use std::sync::Arc;
use tracing::debug;

/// Largest number of bugs requested from the tracker in one call.
/// Bigger result sets tend to be dropped or time out upstream.
pub const DEFAULT_PAGE_SIZE: usize = 200;

/// QueryAggregator collects every bug matching a search through bounded pages
///
/// # Type Parameters
/// * `T` - BugTracker implementation
pub struct QueryAggregator<T: BugTracker> {
    tracker: Arc<T>,
    page_size: usize,
}

impl<T: BugTracker> QueryAggregator<T> {
    /// Creates an aggregator with the default page size
    pub fn new(tracker: Arc<T>) -> Self {
        Self::with_page_size(tracker, DEFAULT_PAGE_SIZE)
    }

    /// Creates an aggregator with an explicit page size
    ///
    /// A page size of zero is raised to one.
    pub fn with_page_size(tracker: Arc<T>, page_size: usize) -> Self {
        Self {
            tracker,
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Sweeps all pages of `search`, in the order the tracker returns them
    ///
    /// Pages are requested sequentially from offset 0, stepping by the page
    /// size, until a page comes back short. When the total is an exact
    /// multiple of the page size this costs one extra, empty request.
    /// Termination relies on the tracker paging consistently.
    ///
    /// # Errors
    /// Any failed page fails the whole sweep; no partial result is returned.
    pub async fn sweep(&self, search: &BugSearch) -> Result<Vec<BugSummary>> {
        let mut results = Vec::new();
        let mut offset = 0;

        loop {
            let batch = self
                .tracker
                .search(&search.page(offset, self.page_size))
                .await?;
            let received = batch.len();
            results.extend(batch);

            debug!(
                component = %search.component,
                offset,
                received,
                total = results.len(),
                "swept bug page"
            );

            if received < self.page_size {
                break;
            }
            offset += self.page_size;
        }

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::PortalError;
    use crate::shared::testing::MockBugTracker;

    fn search() -> BugSearch {
        BugSearch::new("Fedora", "nethack").with_version("20")
    }

    #[tokio::test]
    async fn test_sweep_450_items_in_three_pages() {
        let tracker = Arc::new(MockBugTracker::new().with_bugs(1, 450, "NEW", "20"));
        let aggregator = QueryAggregator::new(tracker.clone());

        let bugs = aggregator.sweep(&search()).await.unwrap();

        assert_eq!(bugs.len(), 450);
        assert_eq!(tracker.search_count(), 3);
        let ids: Vec<u64> = bugs.iter().map(|b| b.id()).collect();
        assert_eq!(ids, (1..=450).collect::<Vec<u64>>());

        let searches = tracker.searches.lock().unwrap();
        let pages: Vec<(Option<usize>, Option<usize>)> =
            searches.iter().map(|s| (s.offset, s.limit)).collect();
        assert_eq!(
            pages,
            vec![
                (Some(0), Some(200)),
                (Some(200), Some(200)),
                (Some(400), Some(200))
            ]
        );
        assert!(searches.iter().all(|s| s.version.as_deref() == Some("20")));
    }

    #[tokio::test]
    async fn test_sweep_exact_multiple_issues_trailing_empty_request() {
        let tracker = Arc::new(MockBugTracker::new().with_bugs(1, 400, "NEW", "20"));
        let aggregator = QueryAggregator::new(tracker.clone());

        let bugs = aggregator.sweep(&search()).await.unwrap();

        assert_eq!(bugs.len(), 400);
        assert_eq!(tracker.search_count(), 3);
    }

    #[tokio::test]
    async fn test_sweep_empty_result() {
        let tracker = Arc::new(MockBugTracker::new());
        let aggregator = QueryAggregator::new(tracker.clone());

        let bugs = aggregator.sweep(&search()).await.unwrap();

        assert!(bugs.is_empty());
        assert_eq!(tracker.search_count(), 1);
    }

    #[tokio::test]
    async fn test_sweep_custom_page_size() {
        let tracker = Arc::new(MockBugTracker::new().with_bugs(1, 25, "NEW", "20"));
        let aggregator = QueryAggregator::with_page_size(tracker.clone(), 10);

        let bugs = aggregator.sweep(&search()).await.unwrap();

        assert_eq!(bugs.len(), 25);
        assert_eq!(tracker.search_count(), 3);
    }

    #[tokio::test]
    async fn test_sweep_zero_page_size_is_raised() {
        let tracker = Arc::new(MockBugTracker::new());
        let aggregator = QueryAggregator::with_page_size(tracker, 0);
        assert_eq!(aggregator.page_size(), 1);
    }

    #[tokio::test]
    async fn test_sweep_fails_entirely_on_page_error() {
        let tracker = Arc::new(
            MockBugTracker::new()
                .with_bugs(1, 450, "NEW", "20")
                .failing_search_on_call(1),
        );
        let aggregator = QueryAggregator::new(tracker.clone());

        let err = aggregator.sweep(&search()).await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<PortalError>(),
            Some(PortalError::FetchFailed { .. })
        ));
        assert_eq!(tracker.search_count(), 2);
    }
}
