//! A set of utility functions used by the models.

#[macro_use]
pub mod number;
