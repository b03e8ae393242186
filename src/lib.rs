//! Pegasus core tracks cash held in wallets, in as many currencies as you like.
//!
//! A [Currency] is a value: a symbol plus the number of digits its amounts may
//! carry after the decimal point. A [Wallet] is an identified holder of one
//! balance per currency. Amounts are exact decimals, and every balance is kept
//! at exactly its currency's scale.
//!
//! ```
//! use pegasus_core::{Currency, Wallet};
//! use rust_decimal_macros::dec;
//!
//! let usd = Currency::new("USD", 2).unwrap();
//! let mut wallet = Wallet::new();
//! wallet.add_cash(&usd, dec!(0.01)).unwrap();
//! wallet.remove_cash(&usd, dec!(1)).unwrap();
//! wallet.add_cash(&usd, dec!(10)).unwrap();
//! assert_eq!(wallet.balance(&usd).to_string(), "9.01");
//! assert!(wallet.add_cash(&usd, dec!(0.001)).is_err());
//! ```
//!
//! [Currency]: models/currency/struct.Currency.html
//! [Wallet]: models/wallet/struct.Wallet.html

pub mod error;
#[macro_use]
pub mod util;
pub mod models;

pub use models::{
    currency::Currency,
    wallet::{Wallet, WalletID},
};
