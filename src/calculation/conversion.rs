//! Conversion of yearly and monthly amounts to per-paycheck amounts.
//!
//! All arithmetic stays in `Decimal`; no intermediate value is rounded.

use std::num::NonZeroU32;

use rust_decimal::Decimal;

use crate::config::BenefitsCostSettings;

/// Number of months in a year, used to annualise monthly amounts.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Converts policy amounts into amounts for a single pay period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaycheckConversion {
    paychecks_per_year: Decimal,
}

impl PaycheckConversion {
    /// Creates a conversion for the given number of paychecks per year.
    pub fn new(paychecks_per_year: NonZeroU32) -> Self {
        Self {
            paychecks_per_year: Decimal::from(paychecks_per_year.get()),
        }
    }

    /// Creates a conversion from the configured paychecks per year.
    pub fn from_settings(settings: &BenefitsCostSettings) -> Self {
        Self::new(settings.paychecks_per_year)
    }

    /// Converts a monthly amount: `amount * 12 / paychecks_per_year`.
    ///
    /// # Examples
    ///
    /// ```
    /// use benefits_engine::calculation::PaycheckConversion;
    /// use rust_decimal::Decimal;
    /// use std::num::NonZeroU32;
    ///
    /// let conversion = PaycheckConversion::new(NonZeroU32::new(24).unwrap());
    /// assert_eq!(conversion.monthly_to_paycheck(Decimal::from(1000)), Decimal::from(500));
    /// ```
    pub fn monthly_to_paycheck(&self, monthly_amount: Decimal) -> Decimal {
        monthly_amount * Decimal::from(MONTHS_PER_YEAR) / self.paychecks_per_year
    }

    /// Converts a yearly amount: `amount / paychecks_per_year`.
    pub fn yearly_to_paycheck(&self, yearly_amount: Decimal) -> Decimal {
        yearly_amount / self.paychecks_per_year
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn biweekly() -> PaycheckConversion {
        PaycheckConversion::new(NonZeroU32::new(26).unwrap())
    }

    #[test]
    fn test_monthly_to_paycheck_keeps_fraction() {
        let amount = biweekly().monthly_to_paycheck(dec("1000"));
        assert!(amount > dec("461.538"));
        assert!(amount < dec("461.539"));
    }

    #[test]
    fn test_yearly_to_paycheck_exact() {
        assert_eq!(biweekly().yearly_to_paycheck(dec("143211.12")), dec("5508.12"));
    }

    #[test]
    fn test_monthly_equals_yearly_of_twelve_months() {
        let conversion = biweekly();
        assert_eq!(
            conversion.monthly_to_paycheck(dec("600")),
            conversion.yearly_to_paycheck(dec("7200"))
        );
    }

    #[test]
    fn test_zero_amount_converts_to_zero() {
        assert!(biweekly().monthly_to_paycheck(Decimal::ZERO).is_zero());
        assert!(biweekly().yearly_to_paycheck(Decimal::ZERO).is_zero());
    }

    proptest! {
        #[test]
        fn prop_yearly_round_trip_without_flooring(
            cents in 0i64..1_000_000_000i64,
            paychecks in prop::sample::select(vec![12u32, 24, 26, 52]),
        ) {
            let yearly = Decimal::new(cents, 2);
            let conversion = PaycheckConversion::new(NonZeroU32::new(paychecks).unwrap());

            let per_paycheck = conversion.yearly_to_paycheck(yearly);
            let back = per_paycheck * Decimal::from(paychecks);
            // Division keeps 28 significant digits, so only the far tail can differ.
            prop_assert!((back - yearly).abs() < Decimal::new(1, 18));
            prop_assert_eq!(back.round_dp(2), yearly);
        }
    }
}
