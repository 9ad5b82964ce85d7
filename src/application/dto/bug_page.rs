use crate::bug_tracking::domain::BugRecord;
use serde::Serialize;

/// BugPage - Response DTO of a bug-list query
///
/// `total_count` is the size of the whole swept result set, not of this page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BugPage {
    pub total_count: usize,
    pub bugs: Vec<BugRecord>,
}

impl BugPage {
    pub fn new(total_count: usize, bugs: Vec<BugRecord>) -> Self {
        Self { total_count, bugs }
    }
}
