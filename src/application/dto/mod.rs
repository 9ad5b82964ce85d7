/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod bug_page;
mod bug_query_request;
mod build_links;
mod output_format;

pub use bug_page::BugPage;
pub use bug_query_request::{BugQueryRequest, DEFAULT_ROWS_PER_PAGE};
pub use build_links::BuildLinks;
pub use output_format::OutputFormat;
