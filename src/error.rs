//! Holds the error type shared by the currency and wallet models.

use thiserror::Error;

/// An error type for when a wallet or currency operation goes awry.
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    /// A balance can't be held at its currency's scale (too large)
    #[error("balance overflow in {0}")]
    BalanceOverflow(String),
    /// An amount carries more fractional digits than its currency allows
    #[error("invalid denomination of {0}")]
    InvalidDenomination(String),
    /// A wallet id string could not be parsed
    #[error("invalid wallet id: {0}")]
    InvalidWalletID(String),
    /// A currency asked for more fractional digits than we can represent
    #[error("unsupported precision: {0} digits after the decimal point")]
    UnsupportedPrecision(u32),
}

pub type Result<T> = std::result::Result<T, Error>;
