//! # rshamir
//!
//! Reconstruct a Shamir secret over the integers.
//!
//! Share values are decoded from digit strings in any base between 2 and 36 ([`arith::radix`])
//! and the secret is the value at zero of the Lagrange interpolation polynomial ([`lagrange`]).
//! All arithmetic uses [`num_bigint::BigInt`].
//!
//! - [`document`]: the JSON share document.
//! - [`shamir`]: splitting a secret and selecting shares for reconstruction.
//! - [`api`]: document to secret in one call.

pub mod api;
pub mod arith;
pub mod constants;
pub mod document;
pub mod error;
pub mod lagrange;
pub mod shamir;
pub mod share;
mod utils;

pub use error::{Error, Result};
