use crate::core::name::{to_relative, trim_zone, unquote_if_text};
use crate::core::record::{DNSRecord, DNSRecordType};
use crate::providers::rage4::client::Rage4Provider;
use crate::providers::rage4::error::Rage4Error;
use crate::providers::rage4::types::Rage4Record;

/// Returns the ID of the first provider record matching `record` by relative
/// name, type and value. Only TXT content is unquoted before comparing.
pub fn find_record_id(records: &[Rage4Record], zone: &str, record: &DNSRecord) -> Option<u64> {
    records
        .iter()
        .find(|r| {
            let record_type = DNSRecordType::from(r.record_type.as_str());
            to_relative(&r.name, zone) == record.name
                && record_type == record.record_type
                && unquote_if_text(&record_type, &r.content) == record.value
        })
        .map(|r| r.id)
}

impl Rage4Provider {
    /// Looks up the provider ID of a record the caller holds without one.
    ///
    /// Fetches the domain's records and its canonical name on every call.
    pub async fn record_id(&self, domain_id: u64, record: &DNSRecord) -> Result<u64, Rage4Error> {
        let records = self.list_records(domain_id).await?;
        let domain = self.get_domain(domain_id).await?;

        find_record_id(&records, trim_zone(&domain.name), record).ok_or_else(|| {
            Rage4Error::RecordNotFound {
                name: record.name.clone(),
                record_type: record.record_type.to_string(),
            }
        })
    }
}
