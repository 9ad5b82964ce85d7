/// Use cases module containing application business logic orchestration
mod bug_portal;
mod query_bug_stats;
mod query_bugs;

pub use bug_portal::BugPortal;
pub use query_bug_stats::{QueryBugStatsUseCase, DEFAULT_COLLECTION, STATS_TTL};
pub use query_bugs::{QueryBugsUseCase, BUG_LIST_TTL, OPEN_BUG_STATUSES};
