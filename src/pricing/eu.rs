use std::collections::HashSet;

use crate::types::CountryCode;

/// Issuer countries that qualify for the EU commission rate.
///
/// `PO` is kept as listed even though the ISO code for Poland is `PL`.
pub const EU_COUNTRY_CODES: [&str; 27] = [
    "AT", "BE", "BG", "CY", "CZ", "DE", "DK", "EE", "ES", "FI", "FR", "GR", "HR", "HU",
    "IE", "IT", "LT", "LU", "LV", "MT", "NL", "PO", "PT", "RO", "SE", "SI", "SK"
];

#[derive(Debug, Clone)]
pub struct EuMembership {
    countries: HashSet<&'static str>
}

impl EuMembership {
    pub fn new() -> Self {
        Self {
            countries: EU_COUNTRY_CODES.into_iter().collect()
        }
    }

    pub fn contains(&self, country: &CountryCode) -> bool {
        self.countries.contains(country.as_str())
    }
}

impl Default for EuMembership {
    fn default() -> Self {
        Self::new()
    }
}
