// ----------------------- Polynomial operations -----------------------

use num_bigint::BigInt;

/// Evaluate `coeffs[0] + coeffs[1] x + ... + coeffs[d] x^d` at `x` with Horner's rule.
///
/// An empty coefficient list is the zero polynomial.
pub fn evaluate_polynomial_horner(coeffs: &[BigInt], x: &BigInt) -> BigInt {
    coeffs
        .iter()
        .rev()
        .fold(BigInt::ZERO, |acc, coeff| acc * x + coeff)
}
