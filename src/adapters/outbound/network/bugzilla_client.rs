use crate::bug_tracking::domain::{BugDetails, BugSummary};
use crate::ports::outbound::{BugSearch, BugTracker};
use crate::shared::error::PortalError;
use crate::shared::Result;
use async_trait::async_trait;
use chrono::SecondsFormat;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Fields requested for summary rows of a search
const SUMMARY_FIELDS: &str = "id,status,product,version";

/// Fields requested when fetching full records
const DETAIL_FIELDS: &str =
    "id,status,summary,last_change_time,version,assigned_to,component,keywords,alias";

/// Scalar-or-list field; Red Hat Bugzilla returns `version` and `component`
/// as lists, upstream Bugzilla as plain strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    fn into_vec(self) -> Vec<String> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }
}

impl Default for OneOrMany {
    fn default() -> Self {
        OneOrMany::Many(Vec::new())
    }
}

#[derive(Debug, Deserialize)]
struct BugListResponse<B> {
    #[serde(default = "Vec::new")]
    bugs: Vec<B>,
}

#[derive(Debug, Deserialize)]
struct RestBugSummary {
    id: u64,
    #[serde(default)]
    status: String,
    #[serde(default)]
    product: String,
    #[serde(default)]
    version: OneOrMany,
}

impl From<RestBugSummary> for BugSummary {
    fn from(bug: RestBugSummary) -> Self {
        let version = bug.version.into_vec().into_iter().next().unwrap_or_default();
        BugSummary::new(bug.id, bug.status, bug.product, version)
    }
}

#[derive(Debug, Deserialize)]
struct RestBugDetails {
    id: u64,
    #[serde(default)]
    status: String,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    last_change_time: String,
    #[serde(default)]
    version: OneOrMany,
    #[serde(default)]
    assigned_to: String,
    #[serde(default)]
    component: OneOrMany,
    #[serde(default)]
    keywords: Vec<String>,
    #[serde(default)]
    alias: OneOrMany,
}

impl From<RestBugDetails> for BugDetails {
    fn from(bug: RestBugDetails) -> Self {
        BugDetails {
            bug_id: bug.id,
            bug_status: bug.status,
            summary: bug.summary,
            last_change_time: bug.last_change_time,
            version: bug.version.into_vec(),
            assigned_to: bug.assigned_to,
            component: bug.component.into_vec().into_iter().next().unwrap_or_default(),
            keywords: bug.keywords,
            alias: bug.alias.into_vec(),
        }
    }
}

/// BugzillaClient adapter for the Bugzilla REST API
///
/// Implements the BugTracker port on top of `GET <base>/rest/bug`. Every
/// transport, status or decoding failure surfaces as
/// `PortalError::FetchFailed`; nothing is retried.
pub struct BugzillaClient {
    client: reqwest::Client,
    base_url: String,
}

impl BugzillaClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://bugzilla.redhat.com";
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Creates a client for the Bugzilla instance at `base_url`
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("bug-portal/{}", version);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Builds the search URL for `search`
    fn search_url(&self, search: &BugSearch) -> String {
        let mut params = vec![
            ("product", search.product.clone()),
            ("component", search.component.clone()),
        ];
        if let Some(version) = &search.version {
            params.push(("version", version.clone()));
        }
        for status in &search.statuses {
            params.push(("bug_status", status.clone()));
        }
        if let Some(since) = search.created_since {
            params.push((
                "creation_time",
                since.to_rfc3339_opts(SecondsFormat::Secs, true),
            ));
        }
        if let Some(offset) = search.offset {
            params.push(("offset", offset.to_string()));
        }
        if let Some(limit) = search.limit {
            params.push(("limit", limit.to_string()));
        }
        params.push(("include_fields", SUMMARY_FIELDS.to_string()));

        self.bug_url(&params)
    }

    /// Builds the fetch URL for `ids`
    fn fetch_url(&self, ids: &[u64]) -> String {
        let ids = ids
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(",");
        self.bug_url(&[
            ("id", ids),
            ("include_fields", DETAIL_FIELDS.to_string()),
        ])
    }

    fn bug_url(&self, params: &[(&str, String)]) -> String {
        let query = params
            .iter()
            .map(|(name, value)| format!("{}={}", name, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}/rest/bug?{}", self.base_url, query)
    }

    async fn get_bugs<B: DeserializeOwned>(&self, url: &str, operation: &str) -> Result<Vec<B>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| PortalError::fetch_failed(operation, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PortalError::fetch_failed(
                operation,
                format!("Bugzilla API returned status code {}", status),
            )
            .into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| PortalError::fetch_failed(operation, e))?;
        parse_bug_list(&body).map_err(|e| PortalError::fetch_failed(operation, e).into())
    }
}

fn parse_bug_list<B: DeserializeOwned>(body: &str) -> serde_json::Result<Vec<B>> {
    serde_json::from_str::<BugListResponse<B>>(body).map(|response| response.bugs)
}

#[async_trait]
impl BugTracker for BugzillaClient {
    async fn search(&self, search: &BugSearch) -> Result<Vec<BugSummary>> {
        let url = self.search_url(search);
        debug!(%url, "searching bugs");

        let bugs: Vec<RestBugSummary> = self.get_bugs(&url, "search bugs").await?;
        Ok(bugs.into_iter().map(BugSummary::from).collect())
    }

    async fn fetch_by_ids(&self, ids: &[u64]) -> Result<Vec<BugDetails>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let url = self.fetch_url(ids);
        debug!(count = ids.len(), "fetching bug details");

        let bugs: Vec<RestBugDetails> = self.get_bugs(&url, "fetch bugs").await?;
        Ok(bugs.into_iter().map(BugDetails::from).collect())
    }
}
