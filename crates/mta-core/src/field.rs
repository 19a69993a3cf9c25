//! Modular arithmetic helpers over `Z_q`.
//!
//! Operands are expected to be reduced into `[0, q)` and all results are
//! returned reduced into `[0, q)`.

use num_bigint::BigUint;
use num_traits::Zero;

/// Adds two field elements.
pub(crate) fn add(a: &BigUint, b: &BigUint, q: &BigUint) -> BigUint {
    (a + b) % q
}

/// Subtracts `b` from `a`.
pub(crate) fn sub(a: &BigUint, b: &BigUint, q: &BigUint) -> BigUint {
    ((a + q) - b) % q
}

/// Negates a field element.
pub(crate) fn neg(a: &BigUint, q: &BigUint) -> BigUint {
    if a.is_zero() {
        BigUint::zero()
    } else {
        q - a
    }
}

/// Computes `sum_i xs[i] * ys[i] mod q` for two equal-length slices.
pub(crate) fn inner_product(xs: &[BigUint], ys: &[BigUint], q: &BigUint) -> BigUint {
    xs.iter()
        .zip(ys)
        .fold(BigUint::zero(), |acc, (x, y)| (acc + x * y) % q)
}

/// Computes `sum_i signs[i] * xs[i] mod q` for a vector of `+1`/`-1` weights.
pub(crate) fn signed_inner_product(signs: &[i8], xs: &[BigUint], q: &BigUint) -> BigUint {
    signs
        .iter()
        .zip(xs)
        .fold(BigUint::zero(), |acc, (&sign, x)| {
            if sign == 1 {
                add(&acc, x, q)
            } else {
                sub(&acc, x, q)
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn el(x: u64) -> BigUint {
        BigUint::from(x)
    }

    #[test]
    fn test_sub_wraps_into_field() {
        let q = el(11);
        assert_eq!(sub(&el(3), &el(7), &q), el(7));
        assert_eq!(sub(&el(7), &el(3), &q), el(4));
    }

    #[test]
    fn test_neg() {
        let q = el(11);
        assert_eq!(neg(&el(0), &q), el(0));
        assert_eq!(neg(&el(4), &q), el(7));
    }

    #[test]
    fn test_inner_products() {
        let q = el(11);
        let xs = [el(2), el(3), el(5)];
        let ys = [el(7), el(1), el(4)];

        // 14 + 3 + 20 = 37 = 4 mod 11
        assert_eq!(inner_product(&xs, &ys, &q), el(4));
        // 2 - 3 + 5 = 4 mod 11
        assert_eq!(signed_inner_product(&[1, -1, 1], &xs, &q), el(4));
    }
}
