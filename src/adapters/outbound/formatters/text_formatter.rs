use crate::application::dto::{BugPage, BuildLinks};
use crate::bug_tracking::domain::{BugRecord, BugStats};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use owo_colors::OwoColorize;
use std::fmt::Write;

/// TextFormatter adapter rendering results as aligned plain text
///
/// With colors enabled, security bugs are highlighted in red and headers
/// are bold.
pub struct TextFormatter {
    colored: bool,
}

impl TextFormatter {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    fn header(&self, text: &str) -> String {
        if self.colored {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn write_record(&self, out: &mut String, bug: &BugRecord) -> std::fmt::Result {
        let line = format!(
            "{:>8}  {:<16} {:<18} {:<16} {}",
            bug.id, bug.status, bug.release, bug.last_modified, bug.description
        );
        if self.colored && bug.is_security_bug() {
            writeln!(out, "{}  [{}]", line.red(), bug.bug_class)
        } else if bug.bug_class.is_empty() {
            writeln!(out, "{}", line)
        } else {
            writeln!(out, "{}  [{}]", line, bug.bug_class)
        }
    }
}

impl ReportFormatter for TextFormatter {
    fn format_page(&self, page: &BugPage) -> Result<String> {
        let mut out = String::new();
        writeln!(
            out,
            "{}",
            self.header(&format!(
                "Showing {} of {} bugs",
                page.bugs.len(),
                page.total_count
            ))
        )?;
        writeln!(out)?;
        writeln!(
            out,
            "{:>8}  {:<16} {:<18} {:<16} {}",
            "ID", "STATUS", "RELEASE", "MODIFIED", "DESCRIPTION"
        )?;
        for bug in &page.bugs {
            self.write_record(&mut out, bug)?;
        }
        Ok(out)
    }

    fn format_stats(&self, package: &str, stats: &BugStats) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "{}", self.header(&format!("Bug stats for {}", package)))?;
        if stats.is_empty() {
            writeln!(out, "  (no stats available)")?;
        }
        for (query, count) in stats.iter() {
            writeln!(out, "  {:<18} {:>6}", query.name(), count)?;
        }
        Ok(out)
    }

    fn format_build_links(&self, links: &BuildLinks) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "{}", self.header(&format!("Builds of {}", links.package)))?;
        writeln!(out, "  builds: {}", links.builds_url)?;
        writeln!(out, "  hub:    {}", links.hub_url)?;
        Ok(out)
    }
}
