use super::{QueryBugStatsUseCase, QueryBugsUseCase};
use crate::application::dto::{BugPage, BugQueryRequest};
use crate::bug_tracking::domain::BugStats;
use crate::ports::inbound::BugQueryPort;
use crate::ports::outbound::{BugTracker, Clock};
use crate::shared::Result;
use async_trait::async_trait;

/// BugPortal - Serves both portal queries behind the inbound port
pub struct BugPortal<T: BugTracker, C: Clock> {
    bugs: QueryBugsUseCase<T, C>,
    stats: QueryBugStatsUseCase<T, C>,
}

impl<T: BugTracker, C: Clock> BugPortal<T, C> {
    pub fn new(bugs: QueryBugsUseCase<T, C>, stats: QueryBugStatsUseCase<T, C>) -> Self {
        Self { bugs, stats }
    }
}

#[async_trait]
impl<T, C> BugQueryPort for BugPortal<T, C>
where
    T: BugTracker,
    C: Clock,
{
    async fn query_bugs(&self, request: BugQueryRequest) -> Result<BugPage> {
        self.bugs.execute(request).await
    }

    async fn query_bug_stats(&self, package: &str) -> Result<BugStats> {
        self.stats.execute(package).await
    }
}
