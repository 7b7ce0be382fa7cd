//! Environment variable secret provider.
//!
//! The service needs exactly one credential: the upstream API key, supplied
//! out-of-band via the environment. Read-only; users set the variable in
//! their shell config, not through this API.

use secrecy::SecretString;

/// Name of the environment variable holding the upstream API key.
pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";

/// Environment variable secret provider.
pub struct EnvSecretProvider;

impl EnvSecretProvider {
    /// Create a new environment variable secret provider.
    pub fn new() -> Self {
        Self
    }

    /// Look up a secret by environment variable name.
    ///
    /// Missing and non-Unicode values both resolve to `None`: secrets must
    /// be valid strings, so a mangled value is treated as not found.
    pub fn get(&self, key: &str) -> Option<SecretString> {
        match std::env::var(key) {
            Ok(val) => Some(SecretString::from(val)),
            Err(std::env::VarError::NotPresent) => None,
            Err(std::env::VarError::NotUnicode(_)) => None,
        }
    }
}

impl Default for EnvSecretProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_get_existing() {
        // SAFETY: this test runs in its own process-wide namespace slot and
        // cleans up after itself.
        unsafe { std::env::set_var("DATASAGE_TEST_SECRET_1", "test-value-123") };

        let provider = EnvSecretProvider::new();
        let secret = provider.get("DATASAGE_TEST_SECRET_1").unwrap();
        assert_eq!(secret.expose_secret(), "test-value-123");

        // SAFETY: the var was just set above.
        unsafe { std::env::remove_var("DATASAGE_TEST_SECRET_1") };
    }

    #[test]
    fn test_get_missing() {
        let provider = EnvSecretProvider::new();
        assert!(provider.get("NONEXISTENT_VAR_XYZ_123").is_none());
    }
}
