//! Provider-neutral errors surfaced through [`crate::core::provider::DNSProvider`].

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Transport, HTTP status, decoding or provider-reported failure.
    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Credential error: {0}")]
    Credential(String),

    /// The zone or a record to delete does not exist at the provider.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}
