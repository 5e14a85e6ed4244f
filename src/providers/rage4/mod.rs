//! Rage4 provider implementation

pub mod client;
pub mod error;
pub mod reconcile;
pub mod resolver;
pub mod types;


pub use client::Rage4Provider;
pub use error::{Rage4Error, map_error};
pub use types::{CommonResponse, CreateRecordRequest, Rage4Domain, Rage4Record};

// --- DNSProvider trait implementation for Rage4Provider ---
use crate::core::provider::DNSProvider;
use crate::core::record::DNSRecord;
use crate::error::Error;
use async_trait::async_trait;

#[async_trait]
impl DNSProvider for Rage4Provider {
    fn name(&self) -> &str {
        "rage4"
    }

    async fn get_records(&self, zone: &str) -> Result<Vec<DNSRecord>, Error> {
        self.get_zone_records(zone).await.map_err(map_error)
    }

    async fn append_records(
        &self,
        zone: &str,
        records: &[DNSRecord],
    ) -> Result<Vec<DNSRecord>, Error> {
        self.append_zone_records(zone, records)
            .await
            .map_err(map_error)
    }

    async fn set_records(
        &self,
        zone: &str,
        records: &[DNSRecord],
    ) -> Result<Vec<DNSRecord>, Error> {
        self.set_zone_records(zone, records).await.map_err(map_error)
    }

    async fn delete_records(
        &self,
        zone: &str,
        records: &[DNSRecord],
    ) -> Result<Vec<DNSRecord>, Error> {
        self.delete_zone_records(zone, records)
            .await
            .map_err(map_error)
    }
}

const _: fn() = || {
    fn assert_provider<T: DNSProvider + 'static>() {}
    assert_provider::<Rage4Provider>();
};
