use serde::{Deserialize, Deserializer};
use std::time::Duration;

use crate::core::name::{to_relative, unquote_if_text};
use crate::core::record::{DNSRecord, DNSRecordType};

/// Reads an explicit JSON `null` as the type's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A record as returned by `GetRecords`.
///
/// Only the fields up to `weight` feed the caller-facing model; the failover,
/// geo and webhook settings are decoded so they survive a debug dump.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Rage4Record {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub domain_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub record_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ttl: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub priority: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub weight: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub is_active: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub failover_enabled: bool,
    pub failover_content: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub failover_withdraw: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub failover_active: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub geo_region_id: i64,
    pub geo_lat: Option<f64>,
    pub geo_long: Option<f64>,
    pub geo_asnum: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub udp_limit: bool,
    pub description: Option<String>,
    pub webhook_id: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_system: bool,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Rage4Domain {
    pub id: u64,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub owner_email: String,
}

/// Envelope returned by the mutating endpoints.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct CommonResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub status: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub error: String,
}

/// Query parameters of `CreateRecord`.
///
/// `content` is sent exactly as the caller gave it; the provider adds its own
/// TXT quoting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRecordRequest {
    pub name: String,
    pub content: String,
    pub record_type: String,
    pub ttl: u64,
}

impl CreateRecordRequest {
    pub fn into_query(self, domain_id: u64) -> Vec<(String, String)> {
        vec![
            ("id".to_string(), domain_id.to_string()),
            ("name".to_string(), self.name),
            ("content".to_string(), self.content),
            ("type".to_string(), self.record_type),
            ("ttl".to_string(), self.ttl.to_string()),
        ]
    }
}

fn clamp_u32(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

pub fn to_dns_record(r: &Rage4Record, zone: &str) -> DNSRecord {
    let record_type = DNSRecordType::from(r.record_type.as_str());
    let value = unquote_if_text(&record_type, &r.content).to_string();
    DNSRecord {
        id: r.id.to_string(),
        name: to_relative(&r.name, zone),
        value,
        record_type,
        ttl: Duration::from_secs(r.ttl.max(0) as u64),
        priority: clamp_u32(r.priority),
        weight: clamp_u32(r.weight),
    }
}
