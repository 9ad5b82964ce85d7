/// Application services built on the outbound ports
mod bug_hydrator;
mod query_aggregator;
mod result_cache;
mod stats_aggregator;

pub use bug_hydrator::{BugHydrator, DEFAULT_HYDRATION_CHUNK_SIZE};
pub use query_aggregator::{QueryAggregator, DEFAULT_PAGE_SIZE};
pub use result_cache::ResultCache;
pub use stats_aggregator::{StatsAggregator, DEFAULT_BLACKLIST};
