use crate::shared::error::PortalError;
use crate::shared::Result;
use std::collections::{BTreeMap, HashMap};

/// A single named filter definition
#[derive(Debug, Clone)]
struct FilterDefinition {
    name: String,
    allowed_values: Vec<String>,
    allow_none: bool,
}

/// ParamFilter validates raw inbound query parameters
///
/// Each registered filter may be required (`allow_none = false`) and may
/// restrict its value to an allowed list. An empty allowed list accepts any
/// value. Parameters that no filter is registered for are dropped.
#[derive(Debug, Clone, Default)]
pub struct ParamFilter {
    filters: Vec<FilterDefinition>,
}

impl ParamFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a filter
    ///
    /// # Arguments
    /// * `name` - Parameter name
    /// * `allowed_values` - Accepted values; empty means any value
    /// * `allow_none` - Whether the parameter may be absent
    pub fn add_filter(mut self, name: &str, allowed_values: Vec<String>, allow_none: bool) -> Self {
        self.filters.push(FilterDefinition {
            name: name.to_string(),
            allowed_values,
            allow_none,
        });
        self
    }

    /// Validates `params` against the registered filters
    ///
    /// # Returns
    /// The registered parameters that were present, keyed by name
    ///
    /// # Errors
    /// - `PortalError::MissingParameter` if a required parameter is absent or blank
    /// - `PortalError::DisallowedValue` if a value is not in a non-empty allowed list
    pub fn filter(&self, params: &HashMap<String, String>) -> Result<BTreeMap<String, String>> {
        let mut validated = BTreeMap::new();

        for definition in &self.filters {
            let value = params
                .get(&definition.name)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty());

            let Some(value) = value else {
                if definition.allow_none {
                    continue;
                }
                return Err(PortalError::MissingParameter {
                    name: definition.name.clone(),
                }
                .into());
            };

            if !definition.allowed_values.is_empty()
                && !definition.allowed_values.iter().any(|a| a == value)
            {
                return Err(PortalError::DisallowedValue {
                    name: definition.name.clone(),
                    value: value.to_string(),
                    allowed: definition.allowed_values.join(", "),
                }
                .into());
            }

            validated.insert(definition.name.clone(), value.to_string());
        }

        Ok(validated)
    }
}
