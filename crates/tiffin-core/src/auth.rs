//! # Admin Credential Policy
//!
//! The administrative view sits behind an injected credential check,
//! not literals scattered through the front ends. Shells construct a
//! policy once and pass it to whatever gate needs it; swapping the
//! allow-list for a real directory later means implementing this trait
//! somewhere else, nothing more.

/// Decides whether a username/password pair may open the admin view.
pub trait AdminPolicy {
    /// True when the credentials are acceptable.
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// A fixed allow-list of usernames sharing one password.
///
/// This reproduces the deployment's original gate: a small set of
/// staff names and a shared password, now injected instead of inlined.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    usernames: Vec<String>,
    password: String,
}

impl StaticCredentials {
    /// Creates a policy from an explicit allow-list.
    pub fn new(usernames: impl IntoIterator<Item = impl Into<String>>, password: impl Into<String>) -> Self {
        StaticCredentials {
            usernames: usernames.into_iter().map(Into::into).collect(),
            password: password.into(),
        }
    }

    /// The reference deployment's allow-list.
    pub fn reference() -> Self {
        StaticCredentials::new(["omkumar", "pranav", "pavan"], "weareadmins")
    }
}

impl AdminPolicy for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        self.usernames.iter().any(|u| u == username) && self.password == password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_allow_list() {
        let policy = StaticCredentials::reference();

        assert!(policy.verify("omkumar", "weareadmins"));
        assert!(policy.verify("pranav", "weareadmins"));
        assert!(policy.verify("pavan", "weareadmins"));
    }

    #[test]
    fn test_rejects_everything_else() {
        let policy = StaticCredentials::reference();

        assert!(!policy.verify("omkumar", "wrong"));
        assert!(!policy.verify("stranger", "weareadmins"));
        assert!(!policy.verify("", ""));
    }

    #[test]
    fn test_custom_allow_list() {
        let policy = StaticCredentials::new(["alice"], "s3cret");

        assert!(policy.verify("alice", "s3cret"));
        assert!(!policy.verify("bob", "s3cret"));
    }
}
