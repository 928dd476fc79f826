//! # Shamir secret sharing over the integers
//!
//! [`share`] splits a secret into `n` shares of a random integer polynomial of degree `k - 1`,
//! [`reconstruct`] picks `k` shares from a [`ShareSet`] and interpolates the secret.
//!
//! There is no reduction modulo a prime. Share values grow with `n`, `k` and the coefficient size,
//! and reconstruction is only exact for shares that lie on an integer polynomial.

use num_bigint::{BigInt, RandBigInt as _};
use rand::Rng;

use crate::{
    arith::polynomial::evaluate_polynomial_horner,
    constants::types::Index,
    error::InterpolationError,
    lagrange::{interpolate_at_zero_with, Division},
    share::{Share, ShareSet},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Which shares are fed to the interpolation
pub enum Selection {
    /// The `k` shares with the lowest indices
    #[default]
    First,
    /// Exactly these indices, in this order
    Indices(Vec<Index>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Options for [`reconstruct`]
pub struct RecoveryOptions {
    /// Threshold override. Defaults to the `k` of the share document.
    pub threshold: Option<usize>,
    pub selection: Selection,
    pub division: Division,
}

/// Share a secret `v` among `n` parties using Shamir's secret sharing scheme.
///
/// The polynomial has constant term `v` and `k - 1` coefficients drawn uniformly from
/// `[0, 2^coefficient_bits)`. It is evaluated at `x = 1..=n`.
pub fn share<R: Rng + ?Sized>(
    v: &BigInt,
    n: usize,
    k: usize,
    coefficient_bits: u64,
    rng: &mut R,
) -> Result<ShareSet, InterpolationError> {
    if k == 0 {
        return Err(InterpolationError::InvalidThreshold);
    }
    if n < k {
        return Err(InterpolationError::InsufficientPoints {
            available: n,
            required: k,
        });
    }

    let mut coefficients: Vec<BigInt> = Vec::with_capacity(k);
    coefficients.push(v.clone());
    for _ in 1..k {
        coefficients.push(BigInt::from(rng.gen_biguint(coefficient_bits)));
    }

    ShareSet::new(share_coeffs(&coefficients, n))
}

fn share_coeffs(coefficients: &[BigInt], n: usize) -> Vec<Share> {
    // Evaluate the polynomial at `n` distinct points
    (1..=n as Index)
        .map(|x| Share::new(x, evaluate_polynomial_horner(coefficients, &BigInt::from(x))))
        .collect()
}

/// Pick the shares to interpolate according to `selection`.
pub fn select<'a>(
    shares: &'a ShareSet,
    k: usize,
    selection: &Selection,
) -> Result<Vec<&'a Share>, InterpolationError> {
    if k == 0 {
        return Err(InterpolationError::InvalidThreshold);
    }

    match selection {
        Selection::First => {
            if shares.len() < k {
                return Err(InterpolationError::InsufficientPoints {
                    available: shares.len(),
                    required: k,
                });
            }
            Ok(shares.iter().take(k).collect())
        }
        Selection::Indices(indices) => {
            if indices.len() < k {
                return Err(InterpolationError::InsufficientPoints {
                    available: indices.len(),
                    required: k,
                });
            }
            let mut selected: Vec<&Share> = Vec::with_capacity(k);
            for index in indices.iter().take(k) {
                if selected.iter().any(|share| share.index == *index) {
                    return Err(InterpolationError::DuplicateIndex(*index));
                }
                let share = shares
                    .get(*index)
                    .ok_or(InterpolationError::UnknownIndex(*index))?;
                selected.push(share);
            }
            Ok(selected)
        }
    }
}

/// Reconstruct the secret from `shares` with threshold `k`.
///
/// Returns the shares that were used together with the secret.
pub fn reconstruct(
    shares: &ShareSet,
    k: usize,
    options: &RecoveryOptions,
) -> Result<(Vec<Share>, BigInt), InterpolationError> {
    let k = options.threshold.unwrap_or(k);
    let selected: Vec<Share> = select(shares, k, &options.selection)?
        .into_iter()
        .cloned()
        .collect();

    for share in &selected {
        tracing::debug!(index = share.index, value = %share.value, "selected share");
    }

    let secret = interpolate_at_zero_with(&selected, k, options.division)?;
    Ok((selected, secret))
}
