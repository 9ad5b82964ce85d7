use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Named sub-query in the per-package stats battery
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatsQuery {
    Open,
    New,
    NewThisWeek,
    Closed,
    ClosedThisWeek,
}

impl StatsQuery {
    /// The full battery, in execution order
    pub const ALL: [StatsQuery; 5] = [
        StatsQuery::Open,
        StatsQuery::New,
        StatsQuery::NewThisWeek,
        StatsQuery::Closed,
        StatsQuery::ClosedThisWeek,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StatsQuery::Open => "open",
            StatsQuery::New => "new",
            StatsQuery::NewThisWeek => "new_this_week",
            StatsQuery::Closed => "closed",
            StatsQuery::ClosedThisWeek => "closed_this_week",
        }
    }

    /// Statuses the sub-query matches
    pub fn statuses(self) -> &'static [&'static str] {
        match self {
            StatsQuery::Open => &["NEW", "ASSIGNED", "REOPENED"],
            StatsQuery::New | StatsQuery::NewThisWeek => &["NEW"],
            StatsQuery::Closed | StatsQuery::ClosedThisWeek => &["CLOSED"],
        }
    }

    /// Whether the sub-query is bounded to bugs created in the last week
    pub fn is_weekly(self) -> bool {
        matches!(self, StatsQuery::NewThisWeek | StatsQuery::ClosedThisWeek)
    }

    /// Unbounded sub-queries time out for very large packages and are
    /// skipped for blacklisted ones.
    pub fn skipped_when_blacklisted(self) -> bool {
        !self.is_weekly()
    }
}

impl fmt::Display for StatsQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Aggregate bug counts for one package.
///
/// Contains only the sub-queries that were actually executed, so a
/// blacklisted package yields fewer than five entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BugStats {
    results: BTreeMap<StatsQuery, usize>,
}

impl BugStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, query: StatsQuery, count: usize) {
        self.results.insert(query, count);
    }

    pub fn get(&self, query: StatsQuery) -> Option<usize> {
        self.results.get(&query).copied()
    }

    pub fn contains(&self, query: StatsQuery) -> bool {
        self.results.contains_key(&query)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StatsQuery, usize)> + '_ {
        self.results.iter().map(|(q, n)| (*q, *n))
    }
}
