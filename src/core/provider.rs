use crate::core::record::DNSRecord;
use crate::error::Error;
use async_trait::async_trait;

/// Record CRUD against a hosted zone.
///
/// `zone` may carry a trailing dot. Multi-record operations stop at the first
/// failure; records already changed at the provider stay changed.
#[async_trait]
pub trait DNSProvider: Send + Sync {
    fn name(&self) -> &str;
    async fn get_records(&self, zone: &str) -> Result<Vec<DNSRecord>, Error>;
    async fn append_records(
        &self,
        zone: &str,
        records: &[DNSRecord],
    ) -> Result<Vec<DNSRecord>, Error>;
    /// Replaces every existing record sharing a `(name, type)` pair with the input.
    async fn set_records(&self, zone: &str, records: &[DNSRecord])
    -> Result<Vec<DNSRecord>, Error>;
    async fn delete_records(
        &self,
        zone: &str,
        records: &[DNSRecord],
    ) -> Result<Vec<DNSRecord>, Error>;
}
