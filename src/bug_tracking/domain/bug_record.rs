use crate::bug_tracking::domain::relative_age::relative_age;
use crate::bug_tracking::domain::BugDetails;
use crate::bug_tracking::policies::SecurityClassification;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Display-ready bug record, one row of a bug page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BugRecord {
    pub id: u64,
    /// Status in title case, e.g. `Assigned`
    pub status: String,
    pub description: String,
    /// Relative age of the last change, e.g. `3 days ago`
    pub last_modified: String,
    /// Collection name followed by the bug's first version
    pub release: String,
    /// Space-joined classification tags
    pub bug_class: String,
}

impl BugRecord {
    /// Derives a display record from a fetched bug
    ///
    /// # Arguments
    /// * `details` - Full bug as returned by the tracker
    /// * `collection` - Collection the query was issued for
    /// * `classification` - Security classification rules
    /// * `now` - Reference time for the relative age
    pub fn from_details(
        details: &BugDetails,
        collection: &str,
        classification: &SecurityClassification,
        now: DateTime<Utc>,
    ) -> Self {
        let release = match details.first_version() {
            Some(version) => format!("{} {}", collection, version),
            None => collection.to_string(),
        };

        Self {
            id: details.bug_id,
            status: title_case(&details.bug_status),
            description: details.summary.clone(),
            last_modified: relative_age(&details.last_change_time, now),
            release,
            bug_class: classification.classes(details).join(" "),
        }
    }

    pub fn is_security_bug(&self) -> bool {
        self.bug_class
            .split_whitespace()
            .any(|c| c == SecurityClassification::SECURITY_BUG)
    }
}

/// Capitalizes the first letter of every alphabetic run and lowercases the rest
///
/// `ON_QA` becomes `On_Qa`, `RELEASE_PENDING` becomes `Release_Pending`.
fn title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut previous_is_alpha = false;

    for c in value.chars() {
        if c.is_alphabetic() {
            if previous_is_alpha {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            previous_is_alpha = true;
        } else {
            result.push(c);
            previous_is_alpha = false;
        }
    }

    result
}
