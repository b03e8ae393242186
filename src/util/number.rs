//! A set of utilities for working with decimal amounts.

use rust_decimal::prelude::*;

/// Create a decimal number.
///
/// This is mostly a wrapper around `rust_decimal_macros::dec!` that lets
/// callers of the core write amounts (`num!(10.01)`) without pulling the
/// macro crate in by name. The scale of the literal is kept, so `num!(1.50)`
/// has two fractional digits.
#[macro_export]
macro_rules! num {
    ($val:expr) => {
        rust_decimal_macros::dec!($val)
    }
}

/// Round `val` half-down to `digits` fractional digits and pad it so that its
/// scale is exactly `digits`. Zero always comes back positive.
///
/// Returns `None` if the value is too large to be held at that scale.
pub(crate) fn rescale_half_down(val: &Decimal, digits: u32) -> Option<Decimal> {
    let mut rounded = val.round_dp_with_strategy(digits, RoundingStrategy::MidpointTowardZero);
    // round_dp never adds digits, it only takes them away. rescale adds them
    // but quietly gives up when the mantissa runs out of room.
    rounded.rescale(digits);
    if rounded.scale() != digits {
        return None;
    }
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    Some(rounded)
}
