use crate::application::dto::{BugPage, BugQueryRequest};
use crate::application::services::{BugHydrator, QueryAggregator, ResultCache};
use crate::bug_tracking::domain::{BugFilter, BugSummary, ParamFilter};
use crate::bug_tracking::policies::BugSortOrder;
use crate::ports::outbound::{BugSearch, BugTracker, Clock};
use crate::shared::Result;
use std::time::Duration;
use tracing::info;

/// Validity of a cached bug list
pub const BUG_LIST_TTL: Duration = Duration::from_secs(900);

/// Statuses a bug grid shows
pub const OPEN_BUG_STATUSES: [&str; 10] = [
    "ASSIGNED",
    "NEW",
    "MODIFIED",
    "ON_DEV",
    "ON_QA",
    "VERIFIED",
    "FAILS_QA",
    "RELEASE_PENDING",
    "POST",
    "REOPENED",
];

/// QueryBugsUseCase - Serves one page of the bugs of a package
///
/// The full, sorted bug list of a (collection, version, package) partition
/// is cached; only the requested page is hydrated into display records.
///
/// # Type Parameters
/// * `T` - BugTracker implementation
/// * `C` - Clock implementation
pub struct QueryBugsUseCase<T: BugTracker, C: Clock> {
    aggregator: QueryAggregator<T>,
    hydrator: BugHydrator<T, C>,
    bug_lists: ResultCache<Vec<BugSummary>, C>,
    param_filter: ParamFilter,
}

impl<T: BugTracker, C: Clock> QueryBugsUseCase<T, C> {
    /// Creates a new QueryBugsUseCase with injected services
    pub fn new(
        aggregator: QueryAggregator<T>,
        hydrator: BugHydrator<T, C>,
        bug_lists: ResultCache<Vec<BugSummary>, C>,
    ) -> Self {
        Self {
            aggregator,
            hydrator,
            bug_lists,
            param_filter: BugFilter::param_filter(),
        }
    }

    /// Replaces the parameter filter, e.g. to restrict collections
    pub fn with_param_filter(mut self, param_filter: ParamFilter) -> Self {
        self.param_filter = param_filter;
        self
    }

    /// Executes the bug-list query
    ///
    /// # Returns
    /// The total number of matching bugs and the requested page of records
    ///
    /// # Errors
    /// - `PortalError::MissingParameter` before any remote call if a filter is absent
    /// - `PortalError::FetchFailed` if the sweep or hydration fails
    pub async fn execute(&self, request: BugQueryRequest) -> Result<BugPage> {
        let filter = BugFilter::from_params_with(&self.param_filter, &request.filters)?;
        let bugs = self.sorted_bugs(&filter).await?;
        let total_count = bugs.len();

        let start = request.start_row.min(total_count);
        let end = start.saturating_add(request.rows_per_page).min(total_count);
        let records = self
            .hydrator
            .hydrate(&bugs[start..end], filter.collection())
            .await?;

        info!(
            package = filter.package(),
            collection = filter.collection(),
            version = filter.version(),
            total_count,
            start_row = start,
            returned = records.len(),
            "served bug page"
        );

        Ok(BugPage::new(total_count, records))
    }

    async fn sorted_bugs(&self, filter: &BugFilter) -> Result<Vec<BugSummary>> {
        let search = BugSearch::new(filter.collection(), filter.package())
            .with_version(filter.version())
            .with_statuses(&OPEN_BUG_STATUSES);

        self.bug_lists
            .get_or_compute(&filter.cache_key(), || async {
                let mut bugs = self.aggregator.sweep(&search).await?;
                BugSortOrder::sort(&mut bugs);
                Ok(bugs)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bug_tracking::policies::SecurityClassification;
    use crate::shared::error::PortalError;
    use crate::shared::testing::{details, ManualClock, MockBugTracker};
    use std::sync::Arc;

    fn use_case(
        tracker: Arc<MockBugTracker>,
        clock: &ManualClock,
    ) -> QueryBugsUseCase<MockBugTracker, ManualClock> {
        QueryBugsUseCase::new(
            QueryAggregator::new(tracker.clone()),
            BugHydrator::new(tracker, clock.clone(), SecurityClassification::default()),
            ResultCache::new("bug_lists", BUG_LIST_TTL, clock.clone()),
        )
    }

    fn request(start_row: usize, rows: usize) -> BugQueryRequest {
        BugQueryRequest::new(start_row, rows)
            .with_filter("package", "nethack")
            .with_filter("collection", "Fedora")
            .with_filter("version", "20")
    }

    /// 30 ASSIGNED bugs (ids 1..=30) and 5 NEW bugs (ids 101..=105)
    fn tracker() -> MockBugTracker {
        let tracker = MockBugTracker::new()
            .with_bugs(1, 30, "ASSIGNED", "20")
            .with_bugs(101, 5, "NEW", "20");
        (1..=30)
            .chain(101..=105)
            .fold(tracker, |t, id| t.with_details(details(id, "ASSIGNED")))
    }

    #[tokio::test]
    async fn test_first_page_is_sorted() {
        let clock = ManualClock::default();
        let tracker = Arc::new(tracker());
        let use_case = use_case(tracker, &clock);

        let page = use_case.execute(request(0, 10)).await.unwrap();

        assert_eq!(page.total_count, 35);
        let ids: Vec<u64> = page.bugs.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![101, 102, 103, 104, 105, 1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn test_sweep_uses_open_statuses_and_version() {
        let clock = ManualClock::default();
        let tracker = Arc::new(tracker());
        let use_case = use_case(tracker.clone(), &clock);

        use_case.execute(request(0, 10)).await.unwrap();

        let searches = tracker.searches.lock().unwrap();
        let first = &searches[0];
        assert_eq!(first.product, "Fedora");
        assert_eq!(first.component, "nethack");
        assert_eq!(first.version.as_deref(), Some("20"));
        assert_eq!(first.statuses.len(), OPEN_BUG_STATUSES.len());
        assert!(first.statuses.iter().any(|s| s == "REOPENED"));
    }

    #[tokio::test]
    async fn test_only_requested_page_is_hydrated() {
        let clock = ManualClock::default();
        let tracker = Arc::new(tracker());
        let use_case = use_case(tracker.clone(), &clock);

        use_case.execute(request(10, 10)).await.unwrap();

        let fetches = tracker.fetches.lock().unwrap();
        assert_eq!(fetches.len(), 1);
        assert_eq!(fetches[0], (6..=15).collect::<Vec<u64>>());
    }

    #[tokio::test]
    async fn test_last_page_is_short() {
        let clock = ManualClock::default();
        let use_case = use_case(Arc::new(tracker()), &clock);

        let page = use_case.execute(request(30, 10)).await.unwrap();

        assert_eq!(page.total_count, 35);
        assert_eq!(page.bugs.len(), 5);
    }

    #[tokio::test]
    async fn test_start_row_past_end_returns_empty_page() {
        let clock = ManualClock::default();
        let tracker = Arc::new(tracker());
        let use_case = use_case(tracker.clone(), &clock);

        let page = use_case.execute(request(100, 10)).await.unwrap();

        assert_eq!(page.total_count, 35);
        assert!(page.bugs.is_empty());
        assert_eq!(tracker.fetch_count(), 0);
    }

    #[tokio::test]
    async fn test_repeated_query_uses_cached_list() {
        let clock = ManualClock::default();
        let tracker = Arc::new(tracker());
        let use_case = use_case(tracker.clone(), &clock);

        use_case.execute(request(0, 10)).await.unwrap();
        clock.advance_secs(600);
        let second = use_case.execute(request(10, 10)).await.unwrap();

        assert_eq!(tracker.search_count(), 1);
        assert_eq!(second.bugs[0].id, 6);
    }

    #[tokio::test]
    async fn test_expired_list_is_swept_again() {
        let clock = ManualClock::default();
        let tracker = Arc::new(tracker());
        let use_case = use_case(tracker.clone(), &clock);

        use_case.execute(request(0, 10)).await.unwrap();
        clock.advance_secs(901);
        use_case.execute(request(0, 10)).await.unwrap();

        assert_eq!(tracker.search_count(), 2);
    }

    #[tokio::test]
    async fn test_missing_package_rejected_before_remote_call() {
        let clock = ManualClock::default();
        let tracker = Arc::new(tracker());
        let use_case = use_case(tracker.clone(), &clock);

        let request = BugQueryRequest::new(0, 10)
            .with_filter("collection", "Fedora")
            .with_filter("version", "20");
        let err = use_case.execute(request).await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<PortalError>(),
            Some(PortalError::MissingParameter { .. })
        ));
        assert_eq!(tracker.search_count(), 0);
    }

    #[tokio::test]
    async fn test_restricted_collection_is_rejected() {
        let clock = ManualClock::default();
        let tracker = Arc::new(tracker());
        let use_case = use_case(tracker.clone(), &clock).with_param_filter(
            ParamFilter::new()
                .add_filter("package", vec![], false)
                .add_filter("collection", vec!["Fedora EPEL".to_string()], false)
                .add_filter("version", vec![], false),
        );

        let err = use_case.execute(request(0, 10)).await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<PortalError>(),
            Some(PortalError::DisallowedValue { .. })
        ));
        assert_eq!(tracker.search_count(), 0);
    }

    #[tokio::test]
    async fn test_sweep_failure_is_not_cached() {
        let clock = ManualClock::default();
        let tracker = Arc::new(tracker().failing_search_on_call(0));
        let use_case = use_case(tracker.clone(), &clock);

        assert!(use_case.execute(request(0, 10)).await.is_err());

        let page = use_case.execute(request(0, 10)).await.unwrap();
        assert_eq!(page.total_count, 35);
        assert_eq!(tracker.search_count(), 2);
    }

    #[tokio::test]
    async fn test_hydration_failure_fails_request() {
        let clock = ManualClock::default();
        let tracker = Arc::new(tracker().failing_fetch());
        let use_case = use_case(tracker, &clock);

        let err = use_case.execute(request(0, 10)).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PortalError>(),
            Some(PortalError::FetchFailed { .. })
        ));
    }
}
