//! Rage4 DNS record management.
//!
//! [`providers::rage4::Rage4Provider`] implements [`crate::core::provider::DNSProvider`]
//! over the Rage4 HTTP API: zone-relative names and unquoted TXT values on the
//! caller side, absolute names and provider-assigned IDs on the wire.

pub mod auth;
pub mod config;
pub mod core;
pub mod error;
pub mod http_client;
pub mod providers;

pub use crate::core::provider::DNSProvider;
pub use crate::core::record::{DNSRecord, DNSRecordType};
pub use crate::error::Error;
pub use crate::providers::rage4::Rage4Provider;
