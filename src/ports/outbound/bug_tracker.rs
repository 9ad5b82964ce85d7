use crate::bug_tracking::domain::{BugDetails, BugSummary};
use crate::shared::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Search criteria for a bug query
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BugSearch {
    /// Product, e.g. the collection name `Fedora`
    pub product: String,
    /// Component, i.e. the package name
    pub component: String,
    pub version: Option<String>,
    /// Accepted statuses; empty matches any status
    pub statuses: Vec<String>,
    /// Only bugs created at or after this instant
    pub created_since: Option<DateTime<Utc>>,
    pub offset: Option<usize>,
    pub limit: Option<usize>,
}

impl BugSearch {
    pub fn new(product: &str, component: &str) -> Self {
        Self {
            product: product.to_string(),
            component: component.to_string(),
            ..Default::default()
        }
    }

    pub fn with_version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }

    pub fn with_statuses(mut self, statuses: &[&str]) -> Self {
        self.statuses = statuses.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn created_since(mut self, since: DateTime<Utc>) -> Self {
        self.created_since = Some(since);
        self
    }

    /// Returns a copy restricted to one page of results
    pub fn page(&self, offset: usize, limit: usize) -> Self {
        Self {
            offset: Some(offset),
            limit: Some(limit),
            ..self.clone()
        }
    }
}

/// BugTracker port for querying the remote bug-tracking service
///
/// Implementations are expected to map transport failures to
/// `PortalError::FetchFailed`. Large unbounded searches may time out on the
/// remote side, so callers bound them with `offset`/`limit`.
#[async_trait]
pub trait BugTracker: Send + Sync {
    /// Returns the summaries of all bugs matching `search`
    ///
    /// # Errors
    /// Returns an error if the request fails or the response cannot be decoded
    async fn search(&self, search: &BugSearch) -> Result<Vec<BugSummary>>;

    /// Fetches full records for the given bug ids
    ///
    /// The result may be in any order and omits ids the tracker does not know.
    ///
    /// # Errors
    /// Returns an error if the request fails or the response cannot be decoded
    async fn fetch_by_ids(&self, ids: &[u64]) -> Result<Vec<BugDetails>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bug_search_builder() {
        let search = BugSearch::new("Fedora", "nethack")
            .with_version("20")
            .with_statuses(&["NEW", "ASSIGNED"]);

        assert_eq!(search.product, "Fedora");
        assert_eq!(search.component, "nethack");
        assert_eq!(search.version.as_deref(), Some("20"));
        assert_eq!(search.statuses, vec!["NEW", "ASSIGNED"]);
        assert!(search.offset.is_none());
        assert!(search.limit.is_none());
    }

    #[test]
    fn test_bug_search_page_keeps_criteria() {
        let search = BugSearch::new("Fedora", "nethack").with_version("20");
        let page = search.page(400, 200);

        assert_eq!(page.offset, Some(400));
        assert_eq!(page.limit, Some(200));
        assert_eq!(page.version.as_deref(), Some("20"));
        assert!(search.offset.is_none());
    }
}
