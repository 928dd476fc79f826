//! # Utilities
//! This module contains the utilities used across the crate.
//!
//! - [`iterator`]: sequential or parallel iteration according to the `parallel` feature flag.

pub(crate) mod iterator;
