//! Wallets hold cash in any number of currencies. Think of them like a purse
//! with a separate pocket for each currency.
//!
//! All balance changes go through [add_cash][0], which makes sure amounts are
//! denominated correctly for their currency and keeps every balance at exactly
//! its currency's scale. Reads hand back copies, so the only way to change a
//! wallet is through its mutation methods.
//!
//! A wallet does no locking of its own. If more than one owner needs to mutate
//! it, wrap it in a lock.
//!
//! [0]: struct.Wallet.html#method.add_cash

use crate::{
    error::{Error, Result},
    models::currency::Currency,
};
use getset::Getters;
use log::{debug, warn};
use rust_decimal::prelude::*;
#[cfg(feature = "with_serde")]
use serde_derive::{Serialize, Deserialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A wallet's unique identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "with_serde", serde(transparent))]
pub struct WalletID(Uuid);

impl WalletID {
    /// Wrap an existing uuid
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Generate a new random ID.
    pub fn create() -> Self {
        Self(Uuid::new_v4())
    }

    /// Return the inner uuid
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for WalletID {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl FromStr for WalletID {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let id = Uuid::parse_str(s).map_err(|_| Error::InvalidWalletID(s.into()))?;
        Ok(Self(id))
    }
}

impl fmt::Display for WalletID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A wallet holding balances in one or more currencies.
///
/// Two wallets are equal only if they share an id *and* hold the same cash.
#[derive(Clone, Debug, PartialEq, Getters)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
pub struct Wallet {
    /// The unique identifier of this wallet
    #[getset(get = "pub")]
    id: WalletID,
    /// Our balances, keyed by currency. Every balance sits at exactly its
    /// currency's scale.
    #[cfg_attr(feature = "with_serde", serde(with = "cash_entries"))]
    cash: HashMap<Currency, Decimal>,
}

/// Currencies aren't strings, so the cash map goes over the wire as a list of
/// `(currency, balance)` pairs.
#[cfg(feature = "with_serde")]
mod cash_entries {
    use crate::models::currency::Currency;
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::collections::HashMap;

    pub fn serialize<S: Serializer>(cash: &HashMap<Currency, Decimal>, serializer: S) -> Result<S::Ok, S::Error> {
        cash.iter().collect::<Vec<_>>().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<HashMap<Currency, Decimal>, D::Error> {
        let entries = Vec::<(Currency, Decimal)>::deserialize(deserializer)?;
        Ok(entries.into_iter().collect())
    }
}

impl Wallet {
    /// Create an empty wallet with a random id.
    pub fn new() -> Self {
        Self::with_id(WalletID::create())
    }

    /// Create an empty wallet with the given id. The id is not checked for
    /// uniqueness.
    pub fn with_id(id: WalletID) -> Self {
        Self {
            id,
            cash: HashMap::new(),
        }
    }

    /// Returns a copy of every balance this wallet holds.
    pub fn cash(&self) -> HashMap<Currency, Decimal> {
        self.cash.clone()
    }

    /// Returns this wallet's balance in `currency`. Currencies the wallet has
    /// never held come back as the currency's (scaled) zero.
    pub fn balance(&self, currency: &Currency) -> Decimal {
        self.cash.get(currency)
            .copied()
            .unwrap_or_else(|| currency.zero())
    }

    /// Iterate over the currencies this wallet has a balance entry for.
    pub fn currencies(&self) -> impl Iterator<Item = &Currency> {
        self.cash.keys()
    }

    /// Whether this wallet has a balance entry for `currency`.
    pub fn has_currency(&self, currency: &Currency) -> bool {
        self.cash.contains_key(currency)
    }

    /// Add cash to this wallet. Can be positive or negative, and the balance
    /// is allowed to go below zero. Returns the updated balance on success.
    ///
    /// Fails with `Error::InvalidDenomination` if `amount` has more digits
    /// after the decimal point than `currency` allows, and with
    /// `Error::BalanceOverflow` if the new balance is too large to hold at the
    /// currency's scale. Either way the wallet is left untouched.
    pub fn add_cash(&mut self, currency: &Currency, amount: Decimal) -> Result<&Decimal> {
        if !currency.is_valid_amount(&amount) {
            warn!("Wallet::add_cash() -- rejected {} {} for wallet {}", amount, currency, self.id);
            Err(Error::InvalidDenomination(currency.symbol().clone()))?;
        }
        let updated = self.balance(currency)
            .checked_add(amount)
            .ok_or_else(|| Error::BalanceOverflow(currency.symbol().clone()))
            .and_then(|sum| currency.rescale(&sum));
        let updated = match updated {
            Ok(x) => x,
            Err(e) => {
                warn!("Wallet::add_cash() -- {} {} {} for wallet {}", e, amount, currency, self.id);
                return Err(e);
            }
        };
        let balance = self.cash.entry(currency.clone()).or_insert(updated);
        *balance = updated;
        debug!("Wallet::add_cash() -- wallet {} {} {} -> {}", self.id, amount, currency, balance);
        Ok(&*balance)
    }

    /// Remove cash from this wallet. Same as adding the negated amount, so the
    /// same denomination rules apply and the balance may go negative.
    pub fn remove_cash(&mut self, currency: &Currency, amount: Decimal) -> Result<&Decimal> {
        self.add_cash(currency, -amount)
    }
}

impl Default for Wallet {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries = self.cash.iter().collect::<Vec<_>>();
        entries.sort_by(|a, b| {
            a.0.symbol().cmp(b.0.symbol())
                .then(a.0.digits_after_decimal_point().cmp(&b.0.digits_after_decimal_point()))
        });
        let cash = entries.iter()
            .map(|(currency, balance)| format!("{}={}", currency, balance))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "Wallet{{id={}, cash={{{}}}}}", self.id, cash)
    }
}
