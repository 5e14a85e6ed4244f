use std::fmt;
use std::str::FromStr;
use std::time::Duration;

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DNSRecordType {
    A,
    AAAA,
    CAA,
    CNAME,
    MX,
    NS,
    PTR,
    SRV,
    TXT,
    /// Any type the provider returns that has no dedicated variant.
    Other(String),
}

impl DNSRecordType {
    pub fn as_str(&self) -> &str {
        match self {
            DNSRecordType::A => "A",
            DNSRecordType::AAAA => "AAAA",
            DNSRecordType::CAA => "CAA",
            DNSRecordType::CNAME => "CNAME",
            DNSRecordType::MX => "MX",
            DNSRecordType::NS => "NS",
            DNSRecordType::PTR => "PTR",
            DNSRecordType::SRV => "SRV",
            DNSRecordType::TXT => "TXT",
            DNSRecordType::Other(other) => other.as_str(),
        }
    }
}

impl FromStr for DNSRecordType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "A" => DNSRecordType::A,
            "AAAA" => DNSRecordType::AAAA,
            "CAA" => DNSRecordType::CAA,
            "CNAME" => DNSRecordType::CNAME,
            "MX" => DNSRecordType::MX,
            "NS" => DNSRecordType::NS,
            "PTR" => DNSRecordType::PTR,
            "SRV" => DNSRecordType::SRV,
            "TXT" => DNSRecordType::TXT,
            other => DNSRecordType::Other(other.to_string()),
        })
    }
}

impl From<&str> for DNSRecordType {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(record_type) => record_type,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for DNSRecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record as seen by callers: zone-relative name, unquoted value.
///
/// `id` is the provider's identifier in string form, empty when unknown.
/// A zero `ttl` means "use the provider default" on create.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DNSRecord {
    pub id: String,
    pub record_type: DNSRecordType,
    pub name: String,
    pub value: String,
    pub ttl: Duration,
    pub priority: u32,
    pub weight: u32,
}

impl DNSRecord {
    /// A record without a provider ID, priority or weight.
    pub fn new(
        name: impl Into<String>,
        record_type: impl Into<DNSRecordType>,
        value: impl Into<String>,
        ttl: Duration,
    ) -> Self {
        Self {
            id: String::new(),
            record_type: record_type.into(),
            name: name.into(),
            value: value.into(),
            ttl,
            priority: 0,
            weight: 0,
        }
    }
}
