use crate::bug_tracking::domain::BugDetails;

/// Default assignee of bugs owned by the security response team
pub const DEFAULT_SECURITY_ASSIGNEE: &str = "security-response-team@redhat.com";

/// SecurityClassification policy for tagging security-relevant bugs
///
/// A bug is a security bug when any of the following holds:
/// 1. it is assigned to the security team address
/// 2. its component is `vulnerability`
/// 3. its keywords contain `Security`
/// 4. one of its aliases starts with `CVE`
#[derive(Debug, Clone)]
pub struct SecurityClassification {
    security_assignee: String,
}

impl SecurityClassification {
    pub const SECURITY_BUG: &'static str = "security-bug";

    pub fn new(security_assignee: String) -> Self {
        Self { security_assignee }
    }

    pub fn is_security_bug(&self, bug: &BugDetails) -> bool {
        bug.assigned_to == self.security_assignee
            || bug.component == "vulnerability"
            || bug.keywords.iter().any(|k| k == "Security")
            || bug.alias.iter().any(|a| a.starts_with("CVE"))
    }

    /// Classification tags for a bug; empty when none apply
    pub fn classes(&self, bug: &BugDetails) -> Vec<&'static str> {
        let mut classes = Vec::new();
        if self.is_security_bug(bug) {
            classes.push(Self::SECURITY_BUG);
        }
        classes
    }
}

impl Default for SecurityClassification {
    fn default() -> Self {
        Self::new(DEFAULT_SECURITY_ASSIGNEE.to_string())
    }
}
