//! Credential provider seam.
//!
//! Token retrieval is injected into the API client as a trait object so no
//! component reaches into process-wide session state. A provider yielding
//! `None` does not stop a request from being issued; the server's rejection
//! comes back as a failed fetch.

/// Supplies the bearer credential for authenticated calls.
pub trait TokenProvider: Send + Sync {
    fn token(&self) -> Option<String>;
}

/// A fixed token, handed over at construction.
pub struct StaticToken(pub String);

impl TokenProvider for StaticToken {
    fn token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Reads the token from an environment variable at call time, so a rotated
/// credential is picked up by the next request.
pub struct EnvToken {
    var: String,
}

impl EnvToken {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl TokenProvider for EnvToken {
    fn token(&self) -> Option<String> {
        std::env::var(&self.var).ok()
    }
}

/// No credential at all. Requests go out unauthenticated.
pub struct NoToken;

impl TokenProvider for NoToken {
    fn token(&self) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_token_yields_its_value() {
        let provider = StaticToken("jwt-abc".to_string());
        assert_eq!(provider.token(), Some("jwt-abc".to_string()));
    }

    #[test]
    fn test_no_token_yields_none() {
        assert_eq!(NoToken.token(), None);
    }
}
