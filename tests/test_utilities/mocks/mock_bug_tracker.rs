use async_trait::async_trait;
use bug_portal::prelude::*;
use bug_portal::shared::error::PortalError;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};

struct MockBug {
    summary: BugSummary,
    details: BugDetails,
    created: DateTime<Utc>,
}

/// Mock BugTracker for testing
///
/// Honors statuses, creation time and offset/limit of a search, and counts
/// the calls it receives.
pub struct MockBugTracker {
    bugs: Vec<MockBug>,
    pub should_fail: bool,
    pub search_calls: AtomicUsize,
    pub fetch_calls: AtomicUsize,
}

impl MockBugTracker {
    pub fn new() -> Self {
        Self {
            bugs: Vec::new(),
            should_fail: false,
            search_calls: AtomicUsize::new(0),
            fetch_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_bug(mut self, id: u64, status: &str, version: &str, created: DateTime<Utc>) -> Self {
        self.bugs.push(MockBug {
            summary: BugSummary::new(
                id,
                status.to_string(),
                "Fedora".to_string(),
                version.to_string(),
            ),
            details: BugDetails {
                bug_id: id,
                bug_status: status.to_string(),
                summary: format!("Bug {}", id),
                last_change_time: "2024-03-15T09:00:00Z".to_string(),
                version: vec![version.to_string()],
                assigned_to: "maintainer@example.org".to_string(),
                component: "nethack".to_string(),
                keywords: vec![],
                alias: vec![],
            },
            created,
        });
        self
    }

    /// Adds a CVE alias to an already added bug
    pub fn with_cve(mut self, id: u64, cve: &str) -> Self {
        if let Some(bug) = self.bugs.iter_mut().find(|b| b.details.bug_id == id) {
            bug.details.alias.push(cve.to_string());
        }
        self
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::new()
        }
    }

    pub fn search_count(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn fetch_count(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }
}

impl Default for MockBugTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BugTracker for MockBugTracker {
    async fn search(&self, search: &BugSearch) -> Result<Vec<BugSummary>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        if self.should_fail {
            return Err(PortalError::fetch_failed("search bugs", "mock tracker failure").into());
        }

        Ok(self
            .bugs
            .iter()
            .filter(|bug| {
                search.statuses.is_empty()
                    || search.statuses.iter().any(|s| s == bug.summary.status())
            })
            .filter(|bug| search.created_since.map_or(true, |since| bug.created >= since))
            .skip(search.offset.unwrap_or(0))
            .take(search.limit.unwrap_or(usize::MAX))
            .map(|bug| bug.summary.clone())
            .collect())
    }

    async fn fetch_by_ids(&self, ids: &[u64]) -> Result<Vec<BugDetails>> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if self.should_fail {
            return Err(PortalError::fetch_failed("fetch bugs", "mock tracker failure").into());
        }

        Ok(self
            .bugs
            .iter()
            .filter(|bug| ids.contains(&bug.details.bug_id))
            .map(|bug| bug.details.clone())
            .collect())
    }
}
