use crate::application::dto::{BugPage, BuildLinks};
use crate::bug_tracking::domain::BugStats;
use crate::shared::Result;

/// ReportFormatter port for rendering query results
///
/// This port abstracts the formatting logic for the different output
/// formats (JSON, plain text).
pub trait ReportFormatter {
    /// Formats one page of bugs
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format_page(&self, page: &BugPage) -> Result<String>;

    /// Formats per-package bug stats
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format_stats(&self, package: &str, stats: &BugStats) -> Result<String>;

    /// Formats the build-system links of a package
    fn format_build_links(&self, links: &BuildLinks) -> Result<String>;
}
