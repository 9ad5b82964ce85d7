use crate::application::dto::BuildLinks;

/// KojiUrlBuilder derives Koji build-system URLs for a package
///
/// All URLs hang off the host root, e.g. `https://koji.fedoraproject.org`.
#[derive(Debug, Clone)]
pub struct KojiUrlBuilder {
    host: String,
}

impl KojiUrlBuilder {
    pub const DEFAULT_HOST: &'static str = "https://koji.fedoraproject.org";

    pub fn new(host: &str) -> Self {
        Self {
            host: host.trim_end_matches('/').to_string(),
        }
    }

    /// Root of the Koji web interface
    pub fn web_url(&self) -> String {
        format!("{}/koji/", self.host)
    }

    /// Build list of `package`
    pub fn package_url(&self, package: &str) -> String {
        format!(
            "{}packages/{}/Builds/",
            self.web_url(),
            urlencoding::encode(package)
        )
    }

    /// Download URL of a file produced by a build task
    pub fn file_url(&self, task_id: u64, name: &str) -> String {
        format!(
            "{}/koji/getfile?taskID={}&name={}",
            self.host,
            task_id,
            urlencoding::encode(name)
        )
    }

    /// XML-RPC hub endpoint
    pub fn xml_rpc_url(&self) -> String {
        format!("{}/kojihub", self.host)
    }

    pub fn links(&self, package: &str) -> BuildLinks {
        BuildLinks {
            package: package.to_string(),
            builds_url: self.package_url(package),
            hub_url: self.xml_rpc_url(),
        }
    }
}

impl Default for KojiUrlBuilder {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HOST)
    }
}
