//! bug-portal - Bug-query aggregation and caching for a package portal
//!
//! This library answers the two bug questions a package page asks: "which
//! open bugs does this package have in this collection version" (paginated)
//! and "how many bugs were opened and closed lately". Answers are swept from
//! a remote Bugzilla in bounded pages, sorted deterministically and cached.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`bug_tracking`): Bug models and ordering/classification policies
//! - **Application Layer** (`application`): Use cases, services and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use bug_portal::prelude::*;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # async fn example() -> Result<()> {
//! let tracker = Arc::new(BugzillaClient::new(
//!     BugzillaClient::DEFAULT_BASE_URL,
//!     Duration::from_secs(30),
//! )?);
//! let clock = SystemClock;
//!
//! let use_case = QueryBugsUseCase::new(
//!     QueryAggregator::new(tracker.clone()),
//!     BugHydrator::new(tracker, clock, SecurityClassification::default()),
//!     ResultCache::new("bug_lists", BUG_LIST_TTL, clock),
//! );
//!
//! let request = BugQueryRequest::new(0, 10)
//!     .with_filter("package", "nethack")
//!     .with_filter("collection", "Fedora")
//!     .with_filter("version", "rawhide");
//! let page = use_case.execute(request).await?;
//! println!("{} bugs", page.total_count);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod bug_tracking;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::build_system::KojiUrlBuilder;
    pub use crate::adapters::outbound::clock::SystemClock;
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::adapters::outbound::network::BugzillaClient;
    pub use crate::application::dto::{BugPage, BugQueryRequest, BuildLinks, OutputFormat};
    pub use crate::application::services::{
        BugHydrator, QueryAggregator, ResultCache, StatsAggregator,
    };
    pub use crate::application::use_cases::{
        BugPortal, QueryBugStatsUseCase, QueryBugsUseCase, BUG_LIST_TTL, STATS_TTL,
    };
    pub use crate::bug_tracking::domain::{
        BugDetails, BugFilter, BugRecord, BugStats, BugSummary, ParamFilter, StatsQuery,
    };
    pub use crate::bug_tracking::policies::{BugSortOrder, SecurityClassification};
    pub use crate::ports::inbound::BugQueryPort;
    pub use crate::ports::outbound::{BugSearch, BugTracker, Clock, ReportFormatter};
    pub use crate::shared::Result;
}
