use serde::Serialize;

/// BuildLinks - Build-system URLs of a package
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildLinks {
    pub package: String,
    /// Web page listing the package's builds
    pub builds_url: String,
    /// XML-RPC hub endpoint
    pub hub_url: String,
}
