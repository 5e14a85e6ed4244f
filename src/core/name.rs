//! Conversions between caller-facing and provider-facing record names and values.
//!
//! Callers speak in zone-relative names (`www`, `@` for the apex) and unquoted
//! TXT values. The provider stores absolute names without a trailing dot and
//! returns TXT content wrapped in double quotes.

use crate::core::record::DNSRecordType;

pub const APEX: &str = "@";

/// Strips a single terminating dot from a zone name.
pub fn trim_zone(zone: &str) -> &str {
    zone.strip_suffix('.').unwrap_or(zone)
}

/// Converts a provider absolute name into a name relative to `zone`.
///
/// Names outside the zone are returned unchanged.
pub fn to_relative(absolute: &str, zone: &str) -> String {
    if absolute == zone {
        return APEX.to_string();
    }
    match absolute.strip_suffix(zone) {
        Some(prefix) if prefix.ends_with('.') => prefix[..prefix.len() - 1].to_string(),
        _ => absolute.to_string(),
    }
}

pub fn to_absolute(relative: &str, zone: &str) -> String {
    if is_apex(relative) {
        zone.to_string()
    } else {
        format!("{relative}.{zone}")
    }
}

pub fn is_apex(relative: &str) -> bool {
    relative.is_empty() || relative == APEX
}

/// Removes the quotes the provider wraps around TXT content.
///
/// Exactly one leading and one trailing `"` are stripped; other types pass
/// through untouched.
pub fn unquote_if_text<'a>(record_type: &DNSRecordType, content: &'a str) -> &'a str {
    if *record_type != DNSRecordType::TXT {
        return content;
    }
    if content.len() >= 2 && content.starts_with('"') && content.ends_with('"') {
        &content[1..content.len() - 1]
    } else {
        content
    }
}
