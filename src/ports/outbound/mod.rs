/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (bug tracker, clock, output formats).
pub mod bug_tracker;
pub mod clock;
pub mod report_formatter;

pub use bug_tracker::{BugSearch, BugTracker};
pub use clock::Clock;
pub use report_formatter::ReportFormatter;
