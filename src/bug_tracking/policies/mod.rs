pub mod bug_sort_order;
pub mod security_classification;

pub use bug_sort_order::{BugSortOrder, SortKey};
pub use security_classification::SecurityClassification;
