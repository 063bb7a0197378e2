use super::eu::EU_COUNTRY_CODES;
use super::{AmountConverter, CommissionCalculator, EuMembership};

use std::str::FromStr;

use anyhow::Result;
use rust_decimal::Decimal;

use crate::models::ExchangeRate;
use crate::types::{Commission, CountryCode, CurrencyCode};

fn decimal(value: &str) -> Result<Decimal> {
    Ok(Decimal::from_str(value)?)
}

fn commission(amount: &str, is_eu: bool) -> Result<String> {
    let calculator = CommissionCalculator::default();
    let commission = calculator.commission(decimal(amount)?, is_eu)
        .ok_or_else(|| anyhow::anyhow!("commission overflowed for {amount}"))?;

    Ok(commission.to_string())
}

#[test]
fn test_eu_membership_matches_the_listed_countries_exactly() -> Result<()> {
    let membership = EuMembership::default();

    assert_eq!(EU_COUNTRY_CODES.len(), 27);

    for code in EU_COUNTRY_CODES {
        assert!(membership.contains(&CountryCode::from_str(code)?), "{code} should be an EU member");
    }

    Ok(())
}

#[test]
fn test_eu_membership_keeps_po_and_excludes_pl() -> Result<()> {
    let membership = EuMembership::default();

    assert!(membership.contains(&CountryCode::from_str("PO")?));
    assert!(!membership.contains(&CountryCode::from_str("PL")?));

    Ok(())
}

#[test]
fn test_eu_membership_rejects_other_codes() -> Result<()> {
    let membership = EuMembership::default();

    for code in ["US", "GB", "JP", "CH", "NO", "ZZ", "XX"] {
        assert!(!membership.contains(&CountryCode::from_str(code)?), "{code} should not be an EU member");
    }

    Ok(())
}

#[test]
fn test_converter_passes_base_currency_through_for_any_rate() -> Result<()> {
    let converter = AmountConverter::new(CurrencyCode::euro());
    let amount = decimal("100")?;

    for rate in [ExchangeRate::Base, ExchangeRate::Unavailable, ExchangeRate::Quoted(decimal("1.2")?)] {
        assert_eq!(converter.convert(amount, &CurrencyCode::euro(), rate), Some(amount));
    }

    Ok(())
}

#[test]
fn test_converter_divides_by_quoted_rate() -> Result<()> {
    let converter = AmountConverter::new(CurrencyCode::euro());
    let usd = CurrencyCode::from_str("USD")?;

    let converted = converter.convert(decimal("100")?, &usd, ExchangeRate::Quoted(decimal("1.25")?));

    assert_eq!(converted, Some(decimal("80")?));

    Ok(())
}

#[test]
fn test_converter_keeps_full_precision() -> Result<()> {
    let converter = AmountConverter::new(CurrencyCode::euro());
    let usd = CurrencyCode::from_str("USD")?;

    let converted = converter.convert(decimal("100")?, &usd, ExchangeRate::Quoted(decimal("1.2")?))
        .ok_or_else(|| anyhow::anyhow!("conversion overflowed"))?;

    assert!(converted > decimal("83.3333")?);
    assert!(converted < decimal("83.3334")?);

    Ok(())
}

#[test]
fn test_converter_passes_unknown_currency_through_unchanged() -> Result<()> {
    let converter = AmountConverter::new(CurrencyCode::euro());
    let unknown = CurrencyCode::from_str("ABC")?;

    assert_eq!(converter.convert(decimal("42.42")?, &unknown, ExchangeRate::Unavailable), Some(decimal("42.42")?));

    Ok(())
}

#[test]
fn test_commission_uses_eu_and_non_eu_rates() -> Result<()> {
    assert_eq!(commission("100", false)?, "2.00");
    assert_eq!(commission("100", true)?, "1.00");

    Ok(())
}

#[test]
fn test_commission_rounds_amount_up_to_the_next_cent() -> Result<()> {
    // 83.3333.. -> 83.34 -> 1.6668
    assert_eq!(commission("83.33333333", false)?, "1.67");
    // 46.180..  -> 46.19 -> 0.4619
    assert_eq!(commission("46.1801", true)?, "0.46");
    // 0.001     -> 0.01  -> 0.0002
    assert_eq!(commission("0.001", false)?, "0.00");
    // 149.991   -> 150.00 -> 3.00
    assert_eq!(commission("149.991", false)?, "3.00");

    Ok(())
}

#[test]
fn test_commission_rounds_half_cent_fees_away_from_zero() -> Result<()> {
    // 50.50 * 0.01 = 0.505
    assert_eq!(commission("50.50", true)?, "0.51");
    // 12.25 * 0.02 = 0.245
    assert_eq!(commission("12.25", false)?, "0.25");

    Ok(())
}

#[test]
fn test_commission_matches_the_ceiling_formula_for_non_negative_amounts() -> Result<()> {
    let calculator = CommissionCalculator::default();

    for amount in ["0", "0.01", "1", "9.999", "2000", "10000.005", "123456.789"] {
        for is_eu in [true, false] {
            let amount = decimal(amount)?;
            let expected = ((amount * Decimal::ONE_HUNDRED).ceil() / Decimal::ONE_HUNDRED * calculator.rate(is_eu))
                .round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero);

            let commission = calculator.commission(amount, is_eu)
                .ok_or_else(|| anyhow::anyhow!("commission overflowed"))?;

            assert_eq!(commission, Commission::new(expected));
        }
    }

    Ok(())
}

#[test]
fn test_commission_reports_overflow() {
    let calculator = CommissionCalculator::default();

    assert!(calculator.commission(Decimal::MAX, false).is_none());
}
