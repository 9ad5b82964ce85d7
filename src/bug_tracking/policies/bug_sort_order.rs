use crate::bug_tracking::domain::BugSummary;
use std::cmp::Ordering;

/// Status priority, highest first. Statuses not listed rank after all of these.
const STATUS_PRIORITY: [&str; 5] = ["NEW", "ASSIGNED", "MODIFIED", "ON_QA", "POST"];

/// Rank for versions without a numeric leading token (e.g. `rawhide`).
/// Every numeric version ranks at or below zero, so these sort last.
const NON_NUMERIC_VERSION_RANK: i64 = i64::MAX;

/// Sort key, evaluated in the order of `BugSortOrder::KEYS`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Status,
    Product,
    Version,
    BugId,
}

impl SortKey {
    fn compare(self, a: &BugSummary, b: &BugSummary) -> Ordering {
        match self {
            SortKey::Status => status_rank(a.status()).cmp(&status_rank(b.status())),
            SortKey::Product => a.product().cmp(b.product()),
            SortKey::Version => version_rank(a.version()).cmp(&version_rank(b.version())),
            SortKey::BugId => a.bug_id().cmp(&b.bug_id()),
        }
    }
}

/// BugSortOrder policy for ordering swept bug lists before pagination
///
/// The ordering is a pure multi-key comparison, so identical inputs always
/// produce identical pages:
/// 1. status, by fixed priority (`NEW`, `ASSIGNED`, `MODIFIED`, `ON_QA`, `POST`, then the rest)
/// 2. product, lexicographically
/// 3. version, numeric versions descending, then non-numeric ones
/// 4. bug id, ascending
pub struct BugSortOrder;

impl BugSortOrder {
    pub const KEYS: [SortKey; 4] = [
        SortKey::Status,
        SortKey::Product,
        SortKey::Version,
        SortKey::BugId,
    ];

    /// Compares two bugs on the first key where they differ
    pub fn compare(a: &BugSummary, b: &BugSummary) -> Ordering {
        Self::KEYS
            .iter()
            .map(|key| key.compare(a, b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    /// Sorts bugs in place
    pub fn sort(bugs: &mut [BugSummary]) {
        bugs.sort_by(Self::compare);
    }
}

fn status_rank(status: &str) -> usize {
    STATUS_PRIORITY
        .iter()
        .position(|s| *s == status)
        .unwrap_or(STATUS_PRIORITY.len())
}

fn version_rank(version: &str) -> i64 {
    version
        .split_whitespace()
        .next()
        .and_then(|token| token.parse::<u32>().ok())
        .map(|n| -i64::from(n))
        .unwrap_or(NON_NUMERIC_VERSION_RANK)
}
