use crate::types::CountryCode;

/// Result of a BIN directory lookup for one card identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuerInfo {
    pub country_code: CountryCode
}
