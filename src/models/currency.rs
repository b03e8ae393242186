//! The currency module holds the `Currency` model, which describes a monetary
//! unit and the precision its amounts must be expressed in.
//!
//! Currencies are plain values: two currencies with the same symbol and
//! precision are the same currency, no matter where they were built, so they
//! can be shared freely between wallets and used as map keys.

use crate::{
    error::{Error, Result},
    util::number,
};
use getset::{CopyGetters, Getters};
use rust_decimal::prelude::*;
#[cfg(feature = "with_serde")]
use serde_derive::{Serialize, Deserialize};
use std::fmt;

/// The most fractional digits a `Decimal` can hold.
pub const MAX_DIGITS_AFTER_DECIMAL_POINT: u32 = 28;

/// Describes a currency (USD, KRW, etc) and how many digits its amounts may
/// carry after the decimal point.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Getters, CopyGetters)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
pub struct Currency {
    /// The symbol of this currency, ie `USD`
    #[getset(get = "pub")]
    symbol: String,
    /// The number of digits allowed after the decimal point.
    #[getset(get_copy = "pub")]
    digits_after_decimal_point: u32,
}

impl Currency {
    /// Create a new currency.
    ///
    /// The symbol is taken as-is. Fails if the precision is more than a
    /// `Decimal` can represent. High precisions are allowed but shrink the
    /// largest balance the currency can hold, see [rescale][0].
    ///
    /// [0]: #method.rescale
    pub fn new<T: Into<String>>(symbol: T, digits_after_decimal_point: u32) -> Result<Self> {
        if digits_after_decimal_point > MAX_DIGITS_AFTER_DECIMAL_POINT {
            Err(Error::UnsupportedPrecision(digits_after_decimal_point))?;
        }
        Ok(Self {
            symbol: symbol.into(),
            digits_after_decimal_point,
        })
    }

    /// The smallest positive amount of this currency (`0.01` for USD).
    pub fn minimum_amount(&self) -> Decimal {
        Decimal::new(1, self.digits_after_decimal_point)
    }

    /// Zero, including all of this currency's decimal places (`0.00` for USD).
    pub fn zero(&self) -> Decimal {
        Decimal::new(0, self.digits_after_decimal_point)
    }

    /// Whether `amount` is denominated in a way this currency allows, ie it
    /// does not carry more fractional digits than the currency does.
    pub fn is_valid_amount(&self, amount: &Decimal) -> bool {
        amount.scale() <= self.digits_after_decimal_point
    }

    /// Round an amount (half-down) to exactly this currency's scale.
    ///
    /// A `Decimal` holds about 28 significant digits, so the more digits a
    /// currency keeps after the point, the smaller the amounts it can hold
    /// (a 28-digit currency tops out below 8). Amounts too large for this
    /// currency's scale fail with `Error::BalanceOverflow`.
    pub fn rescale(&self, amount: &Decimal) -> Result<Decimal> {
        number::rescale_half_down(amount, self.digits_after_decimal_point)
            .ok_or_else(|| Error::BalanceOverflow(self.symbol.clone()))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test::*;
    use std::collections::HashMap;

    #[test]
    fn minimum_amount() {
        assert_eq!(usd().minimum_amount(), num!(0.01));
        assert_eq!(usd().minimum_amount().to_string(), "0.01");
        assert_eq!(krw().minimum_amount(), num!(1));
        assert_eq!(krw().minimum_amount().to_string(), "1");
        let btc = Currency::new("BTC", 8).unwrap();
        assert_eq!(btc.minimum_amount().to_string(), "0.00000001");
    }

    #[test]
    fn zero_is_scaled() {
        assert_eq!(usd().zero().to_string(), "0.00");
        assert_eq!(usd().zero().scale(), 2);
        assert_eq!(krw().zero().to_string(), "0");
        assert!(usd().zero().is_zero());
    }

    #[test]
    fn validates_denomination() {
        let usd = usd();
        assert!(usd.is_valid_amount(&num!(10)));
        assert!(usd.is_valid_amount(&num!(0.1)));
        assert!(usd.is_valid_amount(&num!(-0.01)));
        assert!(!usd.is_valid_amount(&num!(0.001)));
        // trailing zeros still count as digits
        assert!(!usd.is_valid_amount(&num!(1.000)));
        assert!(!krw().is_valid_amount(&num!(1.5)));
    }

    #[test]
    fn equality_is_by_value() {
        let usd1 = Currency::new("USD", 2).unwrap();
        let usd2 = Currency::new(String::from("USD"), 2).unwrap();
        assert_eq!(usd1, usd2);
        assert_ne!(usd1, Currency::new("USD", 3).unwrap());
        assert_ne!(usd1, Currency::new("usd", 2).unwrap());

        let mut map = HashMap::new();
        map.insert(usd1, num!(5));
        assert_eq!(map.get(&usd2), Some(&num!(5)));
    }

    #[test]
    fn rescales_half_down() {
        let usd = usd();
        assert_eq!(usd.rescale(&num!(1.005)).unwrap().to_string(), "1.00");
        assert_eq!(usd.rescale(&num!(1.006)).unwrap().to_string(), "1.01");
        assert_eq!(usd.rescale(&num!(-2.125)).unwrap().to_string(), "-2.12");
        assert_eq!(usd.rescale(&num!(7)).unwrap().to_string(), "7.00");
        assert_eq!(krw().rescale(&num!(999.5)).unwrap().to_string(), "999");
    }

    #[test]
    fn rescale_fails_when_too_large_for_scale() {
        let res = usd().rescale(&num!(1000000000000000000000000000));
        assert_eq!(res, Err(Error::BalanceOverflow("USD".into())));
        let fine = Currency::new("FINE", MAX_DIGITS_AFTER_DECIMAL_POINT).unwrap();
        assert_eq!(fine.rescale(&num!(10)), Err(Error::BalanceOverflow("FINE".into())));
        assert_eq!(fine.rescale(&num!(1)).unwrap().scale(), MAX_DIGITS_AFTER_DECIMAL_POINT);
    }

    #[test]
    fn rejects_unsupported_precision() {
        let res = Currency::new("ZZZ", 29);
        assert_eq!(res, Err(Error::UnsupportedPrecision(29)));
        let max = Currency::new("ZZZ", MAX_DIGITS_AFTER_DECIMAL_POINT).unwrap();
        assert_eq!(max.zero().scale(), MAX_DIGITS_AFTER_DECIMAL_POINT);
    }

    #[test]
    fn displays_symbol() {
        assert_eq!(usd().to_string(), "USD");
        assert_eq!(usd().symbol(), "USD");
        assert_eq!(usd().digits_after_decimal_point(), 2);
    }
}
