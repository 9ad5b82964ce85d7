use crate::bug_tracking::domain::{BugStats, StatsQuery};
use crate::ports::outbound::{BugSearch, BugTracker, Clock};
use crate::shared::Result;
use chrono::Duration;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// Packages whose unbounded stats queries time out upstream
pub const DEFAULT_BLACKLIST: &[&str] = &["kernel"];

/// Window of the `*_this_week` sub-queries
const WEEK_DAYS: i64 = 7;

/// StatsAggregator computes per-package bug counts
///
/// Runs the fixed battery of `StatsQuery` sub-queries one after another.
/// For blacklisted packages the unbounded sub-queries are skipped outright:
/// no request is made and no entry appears in the result.
///
/// # Type Parameters
/// * `T` - BugTracker implementation
/// * `C` - Clock implementation
pub struct StatsAggregator<T: BugTracker, C: Clock> {
    tracker: Arc<T>,
    clock: C,
    blacklist: HashSet<String>,
}

impl<T: BugTracker, C: Clock> StatsAggregator<T, C> {
    /// Creates an aggregator with the default blacklist
    pub fn new(tracker: Arc<T>, clock: C) -> Self {
        Self::with_blacklist(
            tracker,
            clock,
            DEFAULT_BLACKLIST.iter().map(|p| p.to_string()).collect(),
        )
    }

    pub fn with_blacklist(tracker: Arc<T>, clock: C, blacklist: HashSet<String>) -> Self {
        Self {
            tracker,
            clock,
            blacklist,
        }
    }

    pub fn is_blacklisted(&self, package: &str) -> bool {
        self.blacklist.contains(package)
    }

    /// Computes the stats of `package` within `collection`
    ///
    /// # Errors
    /// Fails if any executed sub-query fails.
    pub async fn compute(&self, package: &str, collection: &str) -> Result<BugStats> {
        let last_week = self.clock.now() - Duration::days(WEEK_DAYS);
        let blacklisted = self.is_blacklisted(package);
        let mut stats = BugStats::new();

        for query in StatsQuery::ALL {
            if blacklisted && query.skipped_when_blacklisted() {
                debug!(package, query = %query, "skipping stats query for blacklisted package");
                continue;
            }

            let mut search = BugSearch::new(collection, package).with_statuses(query.statuses());
            if query.is_weekly() {
                search = search.created_since(last_week);
            }

            let count = self.tracker.search(&search).await?.len();
            stats.insert(query, count);
        }

        Ok(stats)
    }
}
