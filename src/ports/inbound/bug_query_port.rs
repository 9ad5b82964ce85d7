use crate::application::dto::{BugPage, BugQueryRequest};
use crate::bug_tracking::domain::BugStats;
use crate::shared::Result;
use async_trait::async_trait;

/// BugQueryPort - Inbound port for the bug-grid and stats queries
///
/// This port is what a front end (CLI, web handler) drives. Results may be
/// served from cache; callers cannot tell a cached answer from a fresh one.
#[async_trait]
pub trait BugQueryPort: Send + Sync {
    /// Returns one page of the open bugs matching the request filters
    ///
    /// # Errors
    /// Returns an error if:
    /// - A required filter is missing, blank or not allowed
    /// - The bug tracker cannot be reached or rejects a request
    async fn query_bugs(&self, request: BugQueryRequest) -> Result<BugPage>;

    /// Returns the aggregate bug counts of a package
    ///
    /// # Errors
    /// Returns an error if the package is blank or a sub-query fails
    async fn query_bug_stats(&self, package: &str) -> Result<BugStats>;
}
