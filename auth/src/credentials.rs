/// Operator-supplied service-account credential pair.
///
/// Compared for exact equality against the credentials presented on the
/// anonymous token endpoint. Configuration-embedded; no database lookup is
/// involved on this path.
#[derive(Debug, Clone)]
pub struct ServiceCredentials {
    username: String,
    password: String,
}

impl ServiceCredentials {
    /// Create a credential pair from configuration values.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Check a presented pair against the configured one.
    ///
    /// Both username and password must match exactly; comparison is
    /// case-sensitive string equality.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}
