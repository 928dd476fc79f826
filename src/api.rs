//! # Recovery API
//!
//! Entry points tying the share document, the share selection and the interpolation together.

use std::path::Path;

use num_bigint::BigInt;

use crate::{
    document::ShareDocument,
    error::Result,
    shamir::{reconstruct, RecoveryOptions},
    share::Share,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome of a recovery: the shares that were interpolated and the secret
pub struct Recovery {
    pub threshold: usize,
    pub used: Vec<Share>,
    pub secret: BigInt,
}

/// Recover the secret of an already parsed share document.
pub fn recover(document: &ShareDocument, options: &RecoveryOptions) -> Result<Recovery> {
    let shares = document.decode_shares()?;
    let threshold = options.threshold.unwrap_or(document.threshold());
    tracing::debug!(
        decoded = shares.len(),
        threshold,
        "decoded share document"
    );

    let (used, secret) = reconstruct(&shares, threshold, options)?;
    Ok(Recovery {
        threshold,
        used,
        secret,
    })
}

/// Read the share document at `path` and recover its secret.
pub fn recover_from_path(path: impl AsRef<Path>, options: &RecoveryOptions) -> Result<Recovery> {
    let document = ShareDocument::load(path)?;
    recover(&document, options)
}
