//! # Arithmetic
//!
//! Exact integer arithmetic on [`num_bigint::BigInt`].
//!
//! - [`radix`]: positional-notation decoding and encoding in bases 2 to 36.
//! - [`polynomial`]: integer polynomial evaluation.

pub mod polynomial;
pub mod radix;
