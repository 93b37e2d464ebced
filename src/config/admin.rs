//! Administrative access configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// The development-only default secret. Must be overridden in production.
const DEV_DEFAULT_SECRET: &str = "admin234";

/// Admin configuration (shared-secret access to the results surface)
#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    /// Static shared secret unlocking the results view and export
    #[serde(default = "default_secret")]
    pub secret: Secret<String>,
}

impl AdminConfig {
    /// Validate admin configuration
    ///
    /// In production, the development default secret is rejected.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.secret.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("ADMIN_SECRET"));
        }
        if *environment == Environment::Production
            && self.secret.expose_secret() == DEV_DEFAULT_SECRET
        {
            return Err(ValidationError::DefaultSecretInProduction);
        }
        Ok(())
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            secret: default_secret(),
        }
    }
}

fn default_secret() -> Secret<String> {
    Secret::new(DEV_DEFAULT_SECRET.to_string())
}
