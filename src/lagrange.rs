//! # Lagrange interpolation at zero
//!
//! Given `k` shares `(x_i, y_i)` on a polynomial `P` of degree at most `k - 1`, the secret is
//!
//! ```text
//! P(0) = Σ_i y_i · Π_{j≠i} (−x_j) / Π_{j≠i} (x_i − x_j)
//! ```
//!
//! All arithmetic is done on [`BigInt`]. The terms are independent of each other, so with the
//! `parallel` feature they are computed on the rayon pool. The reduction always runs in share order.

use num_bigint::BigInt;
use num_integer::Integer as _;
use num_traits::{One as _, Zero as _};

#[cfg(feature = "parallel")]
use crate::utils::iterator::ParallelIterator as _;
use crate::{error::InterpolationError, share::Share, utils::iterator::get_enumerated_iterator};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// How the division by the Lagrange denominators is carried out
pub enum Division {
    /// Sum the terms over a common denominator and divide once. A non-zero remainder is an
    /// [`InterpolationError::InexactReconstruction`].
    #[default]
    Exact,
    /// Divide every term on its own, truncating toward zero, and sum the quotients.
    /// The result is silently wrong when the shares do not lie on an integer polynomial.
    Truncate,
}

/// One Lagrange term as the fraction `y_i · numerator_i / denominator_i`
#[derive(Debug, Clone, PartialEq, Eq)]
struct Term {
    numerator: BigInt,
    denominator: BigInt,
}

/// Compute the Lagrange term of share `i` evaluated at `x = 0`.
fn lagrange_term(points: &[Share], i: usize) -> Result<Term, InterpolationError> {
    let share = &points[i];
    let x_i = BigInt::from(share.index);

    // numerator = Π_{j≠i} (−x_j), denominator = Π_{j≠i} (x_i − x_j)
    let mut numerator = BigInt::one();
    let mut denominator = BigInt::one();
    for (j, other) in points.iter().enumerate() {
        if j == i {
            continue;
        }
        let x_j = BigInt::from(other.index);
        let difference = &x_i - &x_j;
        if difference.is_zero() {
            return Err(InterpolationError::DuplicateIndex(share.index));
        }
        numerator *= -x_j;
        denominator *= difference;
    }

    tracing::trace!(index = share.index, %numerator, %denominator, "lagrange term");

    Ok(Term {
        numerator: &share.value * numerator,
        denominator,
    })
}

/// Add `term` to the fraction `sum.0 / sum.1`, keeping the least common denominator.
fn add_term(sum: (BigInt, BigInt), term: Term) -> (BigInt, BigInt) {
    let (numerator, denominator) = sum;
    let lcm = denominator.lcm(&term.denominator);
    let scaled = numerator * (&lcm / &denominator) + term.numerator * (&lcm / &term.denominator);
    (scaled, lcm)
}

/// Reconstruct `P(0)` from the first `k` points with exact division.
///
/// See [`interpolate_at_zero_with`].
pub fn interpolate_at_zero(points: &[Share], k: usize) -> Result<BigInt, InterpolationError> {
    interpolate_at_zero_with(points, k, Division::Exact)
}

/// Reconstruct `P(0)` from the first `k` points of `points`.
///
/// Fails with [`InterpolationError::InvalidThreshold`] if `k` is zero,
/// [`InterpolationError::InsufficientPoints`] if fewer than `k` points are given and
/// [`InterpolationError::DuplicateIndex`] if two of the `k` points share an index.
pub fn interpolate_at_zero_with(
    points: &[Share],
    k: usize,
    division: Division,
) -> Result<BigInt, InterpolationError> {
    if k == 0 {
        return Err(InterpolationError::InvalidThreshold);
    }
    if points.len() < k {
        return Err(InterpolationError::InsufficientPoints {
            available: points.len(),
            required: k,
        });
    }
    let points = &points[..k];

    let terms: Vec<Term> = get_enumerated_iterator(points)
        .map(|(i, _)| lagrange_term(points, i))
        .collect::<Result<_, _>>()?;

    match division {
        Division::Exact => {
            let (numerator, denominator) = terms
                .into_iter()
                .fold((BigInt::zero(), BigInt::one()), add_term);
            let (secret, remainder) = numerator.div_rem(&denominator);
            if !remainder.is_zero() {
                return Err(InterpolationError::InexactReconstruction {
                    numerator,
                    denominator,
                });
            }
            Ok(secret)
        }
        Division::Truncate => Ok(terms
            .into_iter()
            .map(|term| term.numerator / term.denominator)
            .sum()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arith::polynomial::evaluate_polynomial_horner;
    use proptest::prelude::*;

    fn shares(points: &[(u64, i64)]) -> Vec<Share> {
        points.iter().map(|(x, y)| Share::new(*x, *y)).collect()
    }

    fn big(value: &str) -> BigInt {
        value.parse().unwrap()
    }

    #[test]
    fn reconstructs_quadratic() {
        let points = shares(&[(1, 4), (2, 7), (3, 12)]);
        assert_eq!(interpolate_at_zero(&points, 3).unwrap(), BigInt::from(3));
    }

    #[test]
    fn reconstructs_seven_shares() {
        let values = [
            "995085094601491",
            "21394886326566393",
            "196563650089608567",
            "1016509518118225951",
            "3711974121218449851",
            "10788619898233492461",
            "26709394976508342463",
        ];
        let points: Vec<Share> = values
            .iter()
            .enumerate()
            .map(|(i, value)| Share::new(i as u64 + 1, big(value)))
            .collect();

        assert_eq!(
            interpolate_at_zero(&points, 7).unwrap(),
            big("79836264049851")
        );
    }

    #[test]
    fn single_share_is_the_secret() {
        let points = vec![Share::new(42, big("-123456789012345678901234567890"))];
        assert_eq!(
            interpolate_at_zero(&points, 1).unwrap(),
            big("-123456789012345678901234567890")
        );
    }

    #[test]
    fn uses_only_first_k_points() {
        // 1 + x through the first two points, the third is off the line
        let points = shares(&[(1, 2), (2, 3), (3, 100)]);
        assert_eq!(interpolate_at_zero(&points, 2).unwrap(), BigInt::from(1));
    }

    #[test]
    fn exact_when_single_terms_are_fractions() {
        // P(x) = x^2 at x = 1, 2, 4: terms are 8/3, -8 and 16/3
        let points = shares(&[(1, 1), (2, 4), (4, 16)]);
        assert_eq!(interpolate_at_zero(&points, 3).unwrap(), BigInt::ZERO);
        assert_eq!(
            interpolate_at_zero_with(&points, 3, Division::Truncate).unwrap(),
            BigInt::from(-1)
        );
    }

    #[test]
    fn rejects_inexact_reconstruction() {
        // The line through (1, 1) and (3, 2) meets the axis at 1/2
        let points = shares(&[(1, 1), (3, 2)]);
        assert_eq!(
            interpolate_at_zero(&points, 2),
            Err(InterpolationError::InexactReconstruction {
                numerator: BigInt::from(1),
                denominator: BigInt::from(2),
            })
        );
        assert_eq!(
            interpolate_at_zero_with(&points, 2, Division::Truncate).unwrap(),
            BigInt::ZERO
        );
    }

    #[test]
    fn rejects_duplicate_index() {
        let points = shares(&[(1, 4), (1, 7), (3, 12)]);
        assert_eq!(
            interpolate_at_zero(&points, 3),
            Err(InterpolationError::DuplicateIndex(1))
        );
    }

    #[test]
    fn rejects_bad_threshold() {
        let points = shares(&[(1, 4), (2, 7)]);
        assert_eq!(
            interpolate_at_zero(&points, 0),
            Err(InterpolationError::InvalidThreshold)
        );
        assert_eq!(
            interpolate_at_zero(&points, 3),
            Err(InterpolationError::InsufficientPoints {
                available: 2,
                required: 3
            })
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(128))]

        #[test]
        fn reconstructs_line(a in any::<i64>(), b in any::<i64>()) {
            let (a, b) = (BigInt::from(a), BigInt::from(b));
            let points = vec![Share::new(1, &a + &b), Share::new(2, &a * 2 + &b)];
            prop_assert_eq!(interpolate_at_zero(&points, 2).unwrap(), b);
        }

        #[test]
        fn reconstructs_integer_polynomials(
            (coeffs, xs) in (1usize..8).prop_flat_map(|k| (
                prop::collection::vec(any::<i64>(), k),
                prop::collection::btree_set(1u64..1_000, k),
            ))
        ) {
            let coeffs: Vec<BigInt> = coeffs.into_iter().map(BigInt::from).collect();
            let points: Vec<Share> = xs
                .into_iter()
                .rev()
                .map(|x| Share::new(x, evaluate_polynomial_horner(&coeffs, &BigInt::from(x))))
                .collect();

            prop_assert_eq!(interpolate_at_zero(&points, coeffs.len()).unwrap(), coeffs[0].clone());
        }
    }
}
