//! Get/Append/Set/Delete over Rage4's list/create/delete endpoints.
//!
//! Rage4 has no update call, so Set deletes every existing record sharing a
//! `(name, type)` pair with the input and then creates the whole input.
//! Provider calls are issued one at a time and the first failure aborts the
//! operation; nothing already applied is rolled back.

use log::{info, warn};
use std::time::Duration;

use crate::core::name::{to_absolute, trim_zone};
use crate::core::record::DNSRecord;
use crate::providers::rage4::client::Rage4Provider;
use crate::providers::rage4::error::Rage4Error;
use crate::providers::rage4::types::{CreateRecordRequest, to_dns_record};

pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

fn same_bucket(existing: &DNSRecord, wanted: &DNSRecord) -> bool {
    existing.name == wanted.name && existing.record_type == wanted.record_type
}

/// The provider ID a caller record carries, if it is usable.
fn known_id(record: &DNSRecord) -> Option<u64> {
    record.id.parse().ok().filter(|id| *id != 0)
}

fn create_request(record: &DNSRecord, zone: &str) -> CreateRecordRequest {
    let ttl = match record.ttl.as_secs() {
        0 => DEFAULT_TTL.as_secs(),
        secs => secs,
    };
    CreateRecordRequest {
        name: to_absolute(&record.name, zone),
        content: record.value.clone(),
        record_type: record.record_type.to_string(),
        ttl,
    }
}

impl Rage4Provider {
    pub async fn get_zone_records(&self, zone: &str) -> Result<Vec<DNSRecord>, Rage4Error> {
        let zone = trim_zone(zone);
        let domain_id = self.domain_id(zone).await?;
        let records: Vec<DNSRecord> = self
            .list_records(domain_id)
            .await?
            .iter()
            .map(|r| to_dns_record(r, zone))
            .collect();
        info!("{zone}: fetched {} records", records.len());
        Ok(records)
    }

    pub async fn append_zone_records(
        &self,
        zone: &str,
        records: &[DNSRecord],
    ) -> Result<Vec<DNSRecord>, Rage4Error> {
        let zone = trim_zone(zone);
        let domain_id = self.domain_id(zone).await?;

        let mut appended = Vec::with_capacity(records.len());
        for record in records {
            if let Err(e) = self
                .create_record(domain_id, create_request(record, zone))
                .await
            {
                warn!(
                    "{zone}: create {} {} failed after {} records: {e}",
                    record.name,
                    record.record_type,
                    appended.len()
                );
                return Err(e);
            }
            appended.push(record.clone());
        }
        info!("{zone}: appended {} records", appended.len());
        Ok(appended)
    }

    pub async fn set_zone_records(
        &self,
        zone: &str,
        records: &[DNSRecord],
    ) -> Result<Vec<DNSRecord>, Rage4Error> {
        let existing = self.get_zone_records(zone).await?;
        let stale: Vec<DNSRecord> = existing
            .into_iter()
            .filter(|e| records.iter().any(|r| same_bucket(e, r)))
            .collect();

        if !stale.is_empty() {
            self.delete_zone_records(zone, &stale).await?;
        }
        self.append_zone_records(zone, records).await
    }

    pub async fn delete_zone_records(
        &self,
        zone: &str,
        records: &[DNSRecord],
    ) -> Result<Vec<DNSRecord>, Rage4Error> {
        let zone = trim_zone(zone);
        let domain_id = self.domain_id(zone).await?;

        let mut deleted = Vec::with_capacity(records.len());
        for record in records {
            if let Err(e) = self.delete_one(domain_id, record).await {
                warn!(
                    "{zone}: delete {} {} failed after {} records: {e}",
                    record.name,
                    record.record_type,
                    deleted.len()
                );
                return Err(e);
            }
            deleted.push(record.clone());
        }
        info!("{zone}: deleted {} records", deleted.len());
        Ok(deleted)
    }

    async fn delete_one(&self, domain_id: u64, record: &DNSRecord) -> Result<(), Rage4Error> {
        let id = match known_id(record) {
            Some(id) => id,
            None => self.record_id(domain_id, record).await?,
        };
        self.delete_record(id).await?;
        Ok(())
    }
}
