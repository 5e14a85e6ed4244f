use crate::error::Error;
use serde::Deserialize;
use std::env;
use std::fmt;

pub const EMAIL_KEY: &str = "rage4_email";
pub const API_KEY_KEY: &str = "rage4_api_key";

pub trait CredentialManager: Send + Sync {
    fn get(&self, key: &str) -> Result<String, Error>;
}

/// Reads `RAGE4_EMAIL` and `RAGE4_API_KEY` from the process environment.
pub struct EnvCredentialManager;

impl CredentialManager for EnvCredentialManager {
    fn get(&self, key: &str) -> Result<String, Error> {
        let var = match key {
            EMAIL_KEY => "RAGE4_EMAIL",
            API_KEY_KEY => "RAGE4_API_KEY",
            _ => return Err(Error::Credential(format!("Unknown key: {key}"))),
        };
        match env::var(var) {
            Ok(value) if !value.is_empty() => Ok(value),
            _ => Err(Error::Credential(format!("{var} is not set"))),
        }
    }
}

/// Credentials supplied directly, e.g. from an embedding application's config.
#[derive(Clone, Deserialize)]
pub struct StaticCredentialManager {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub api_key: String,
}

impl StaticCredentialManager {
    pub fn new(email: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            api_key: api_key.into(),
        }
    }
}

impl fmt::Debug for StaticCredentialManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticCredentialManager")
            .field("email", &self.email)
            .field("api_key", &"<REDACTED>")
            .finish()
    }
}

impl CredentialManager for StaticCredentialManager {
    fn get(&self, key: &str) -> Result<String, Error> {
        let value = match key {
            EMAIL_KEY => &self.email,
            API_KEY_KEY => &self.api_key,
            _ => return Err(Error::Credential(format!("Unknown key: {key}"))),
        };
        if value.is_empty() {
            return Err(Error::Credential(format!("{key} is empty")));
        }
        Ok(value.clone())
    }
}
