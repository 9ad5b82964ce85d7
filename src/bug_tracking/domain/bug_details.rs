/// Full bug record as returned by a batched fetch-by-id.
///
/// Only the fields needed to derive a `BugRecord` are kept; the remote
/// schema carries far more.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BugDetails {
    pub bug_id: u64,
    pub bug_status: String,
    pub summary: String,
    /// Raw timestamp, either `YYYYMMDDTHH:MM:SS` or RFC 3339
    pub last_change_time: String,
    pub version: Vec<String>,
    pub assigned_to: String,
    pub component: String,
    pub keywords: Vec<String>,
    pub alias: Vec<String>,
}

impl BugDetails {
    /// First listed version, if the bug carries any
    pub fn first_version(&self) -> Option<&str> {
        self.version.first().map(String::as_str)
    }
}
