/// Network adapters for external API calls
mod bugzilla_client;

pub use bugzilla_client::BugzillaClient;
