pub mod bug_details;
pub mod bug_filter;
pub mod bug_record;
pub mod bug_stats;
pub mod bug_summary;
pub mod param_filter;
pub mod relative_age;

pub use bug_details::BugDetails;
pub use bug_filter::BugFilter;
pub use bug_record::BugRecord;
pub use bug_stats::{BugStats, StatsQuery};
pub use bug_summary::BugSummary;
pub use param_filter::ParamFilter;
