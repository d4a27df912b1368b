use super::domain::ApplicantRecord;
use super::tables::PROXY_FIELDS;

/// Proxy fields present on the record, in [`PROXY_FIELDS`] order.
///
/// Detection only reports; it never feeds back into the score.
pub fn detect_proxies(record: &ApplicantRecord) -> Vec<String> {
    PROXY_FIELDS
        .iter()
        .filter(|field| record.has_attribute(field))
        .map(|field| field.to_string())
        .collect()
}
