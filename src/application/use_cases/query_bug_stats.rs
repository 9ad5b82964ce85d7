use crate::application::services::{ResultCache, StatsAggregator};
use crate::bug_tracking::domain::BugStats;
use crate::ports::outbound::{BugTracker, Clock};
use crate::shared::error::PortalError;
use crate::shared::Result;
use std::time::Duration;
use tracing::info;

/// Validity of cached package stats
pub const STATS_TTL: Duration = Duration::from_secs(21_600);

/// Collection stats are computed for unless configured otherwise
pub const DEFAULT_COLLECTION: &str = "Fedora";

/// QueryBugStatsUseCase - Serves aggregate bug counts of a package
///
/// # Type Parameters
/// * `T` - BugTracker implementation
/// * `C` - Clock implementation
pub struct QueryBugStatsUseCase<T: BugTracker, C: Clock> {
    aggregator: StatsAggregator<T, C>,
    stats: ResultCache<BugStats, C>,
    collection: String,
}

impl<T: BugTracker, C: Clock> QueryBugStatsUseCase<T, C> {
    /// Creates a new QueryBugStatsUseCase for the default collection
    pub fn new(aggregator: StatsAggregator<T, C>, stats: ResultCache<BugStats, C>) -> Self {
        Self {
            aggregator,
            stats,
            collection: DEFAULT_COLLECTION.to_string(),
        }
    }

    pub fn with_collection(mut self, collection: &str) -> Self {
        self.collection = collection.to_string();
        self
    }

    /// Executes the stats query for `package`
    ///
    /// # Errors
    /// - `PortalError::MissingParameter` if `package` is blank
    /// - `PortalError::FetchFailed` if a sub-query fails
    pub async fn execute(&self, package: &str) -> Result<BugStats> {
        let package = package.trim();
        if package.is_empty() {
            return Err(PortalError::MissingParameter {
                name: "package".to_string(),
            }
            .into());
        }

        let stats = self
            .stats
            .get_or_compute(package, || {
                self.aggregator.compute(package, &self.collection)
            })
            .await?;

        info!(package, entries = stats.len(), "served bug stats");
        Ok(stats)
    }
}
