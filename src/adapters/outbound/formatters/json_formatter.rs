use crate::application::dto::{BugPage, BuildLinks};
use crate::bug_tracking::domain::BugStats;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Serialize)]
struct StatsDocument<'a> {
    package: &'a str,
    #[serde(flatten)]
    stats: &'a BugStats,
}

/// JsonFormatter adapter rendering results as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format_page(&self, page: &BugPage) -> Result<String> {
        Ok(serde_json::to_string_pretty(page)?)
    }

    fn format_stats(&self, package: &str, stats: &BugStats) -> Result<String> {
        Ok(serde_json::to_string_pretty(&StatsDocument { package, stats })?)
    }

    fn format_build_links(&self, links: &BuildLinks) -> Result<String> {
        Ok(serde_json::to_string_pretty(links)?)
    }
}
