/// Minimal projection of a remote bug, used for ordering and paging.
///
/// Produced only by search queries; the hydrate step never creates one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BugSummary {
    id: u64,
    status: String,
    product: String,
    version: String,
}

impl BugSummary {
    pub fn new(id: u64, status: String, product: String, version: String) -> Self {
        Self {
            id,
            status,
            product,
            version,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Stable paging handle; always equal to `id`.
    pub fn bug_id(&self) -> u64 {
        self.id
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}
