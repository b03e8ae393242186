//! Models are the data structures the core operates on: currencies, and the
//! wallets that hold balances in them.

pub mod currency;
pub mod wallet;
