//! Test doubles shared by the unit tests of several modules.

use crate::bug_tracking::domain::{BugDetails, BugSummary};
use crate::ports::outbound::{BugSearch, BugTracker, Clock};
use crate::shared::error::PortalError;
use crate::shared::Result;
use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Clock that only moves when told to
#[derive(Clone)]
pub struct ManualClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl ManualClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    pub fn advance_secs(&self, secs: i64) {
        let mut now = self.now.lock().unwrap();
        *now += Duration::seconds(secs);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// A bug known to the mock tracker
#[derive(Clone)]
pub struct StoredBug {
    pub summary: BugSummary,
    pub created: DateTime<Utc>,
}

/// In-memory bug tracker that honors statuses, creation time and paging,
/// and records every call it receives.
#[derive(Default)]
pub struct MockBugTracker {
    bugs: Vec<StoredBug>,
    details: HashMap<u64, BugDetails>,
    fail_search_on_call: Option<usize>,
    fail_fetch: bool,
    pub searches: Mutex<Vec<BugSearch>>,
    pub fetches: Mutex<Vec<Vec<u64>>>,
}

impl MockBugTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `count` bugs with sequential ids starting at `first_id`
    pub fn with_bugs(mut self, first_id: u64, count: u64, status: &str, version: &str) -> Self {
        let created = ManualClock::default().now() - Duration::days(30);
        for id in first_id..first_id + count {
            self.bugs.push(StoredBug {
                summary: BugSummary::new(
                    id,
                    status.to_string(),
                    "Fedora".to_string(),
                    version.to_string(),
                ),
                created,
            });
        }
        self
    }

    pub fn with_bug(mut self, summary: BugSummary, created: DateTime<Utc>) -> Self {
        self.bugs.push(StoredBug { summary, created });
        self
    }

    pub fn with_details(mut self, details: BugDetails) -> Self {
        self.details.insert(details.bug_id, details);
        self
    }

    /// Makes the n-th search call (zero-based) fail with a transport error
    pub fn failing_search_on_call(mut self, call: usize) -> Self {
        self.fail_search_on_call = Some(call);
        self
    }

    pub fn failing_fetch(mut self) -> Self {
        self.fail_fetch = true;
        self
    }

    pub fn search_count(&self) -> usize {
        self.searches.lock().unwrap().len()
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.lock().unwrap().len()
    }
}

#[async_trait]
impl BugTracker for MockBugTracker {
    async fn search(&self, search: &BugSearch) -> Result<Vec<BugSummary>> {
        let call = {
            let mut searches = self.searches.lock().unwrap();
            searches.push(search.clone());
            searches.len() - 1
        };
        if self.fail_search_on_call == Some(call) {
            return Err(PortalError::fetch_failed("search bugs", "connection timed out").into());
        }

        let matching = self.bugs.iter().filter(|bug| {
            (search.statuses.is_empty()
                || search.statuses.iter().any(|s| s == bug.summary.status()))
                && search.created_since.map_or(true, |since| bug.created >= since)
        });

        let offset = search.offset.unwrap_or(0);
        let limit = search.limit.unwrap_or(usize::MAX);
        Ok(matching
            .skip(offset)
            .take(limit)
            .map(|bug| bug.summary.clone())
            .collect())
    }

    async fn fetch_by_ids(&self, ids: &[u64]) -> Result<Vec<BugDetails>> {
        self.fetches.lock().unwrap().push(ids.to_vec());
        if self.fail_fetch {
            return Err(PortalError::fetch_failed("fetch bugs", "connection reset").into());
        }

        // Reverse order mimics a tracker that does not preserve request order
        Ok(ids
            .iter()
            .rev()
            .filter_map(|id| self.details.get(id).cloned())
            .collect())
    }
}

/// Details record with the given id and status, and no security markers
pub fn details(id: u64, status: &str) -> BugDetails {
    BugDetails {
        bug_id: id,
        bug_status: status.to_string(),
        summary: format!("Bug {}", id),
        last_change_time: "20240314T12:00:00".to_string(),
        version: vec!["20".to_string()],
        assigned_to: "maintainer@example.org".to_string(),
        component: "nethack".to_string(),
        keywords: vec![],
        alias: vec![],
    }
}
