use crate::bug_tracking::domain::ParamFilter;
use crate::shared::Result;
use std::collections::HashMap;

/// Validated filter for a bug-list query.
///
/// All three fields are required; an instance always has non-blank values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BugFilter {
    package: String,
    collection: String,
    version: String,
}

impl BugFilter {
    pub const PACKAGE: &'static str = "package";
    pub const COLLECTION: &'static str = "collection";
    pub const VERSION: &'static str = "version";

    /// Builds the parameter filter used for bug-list queries.
    ///
    /// No field is restricted to an allowed-values list.
    pub fn param_filter() -> ParamFilter {
        ParamFilter::new()
            .add_filter(Self::PACKAGE, vec![], false)
            .add_filter(Self::COLLECTION, vec![], false)
            .add_filter(Self::VERSION, vec![], false)
    }

    /// Validates raw request parameters into a filter
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self> {
        Self::from_params_with(&Self::param_filter(), params)
    }

    /// Validates raw request parameters with a caller-supplied parameter filter
    pub fn from_params_with(
        param_filter: &ParamFilter,
        params: &HashMap<String, String>,
    ) -> Result<Self> {
        let mut validated = param_filter.filter(params)?;
        let mut take = |name: &str| -> Result<String> {
            validated
                .remove(name)
                .ok_or_else(|| anyhow::anyhow!("Filter '{}' is not registered", name))
        };

        Ok(Self {
            package: take(Self::PACKAGE)?,
            collection: take(Self::COLLECTION)?,
            version: take(Self::VERSION)?,
        })
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Composite cache key: `collection_version_package`
    pub fn cache_key(&self) -> String {
        format!("{}_{}_{}", self.collection, self.version, self.package)
    }
}
