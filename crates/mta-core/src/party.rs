//! Shared party state and validation.

use crate::{MtaError, SecurityParam};
use num_bigint::BigUint;
use num_prime::nt_funcs::is_prime;

/// State shared by both protocol roles.
///
/// Holds the prime modulus `q`, the party's secret factor and the number of
/// simulated OT instances `n = ceil(log2(q)) + k`.
#[derive(Debug, Clone)]
pub struct Party {
    secret: BigUint,
    modulus: BigUint,
    count: usize,
}

impl Party {
    /// Creates new party state.
    ///
    /// # Arguments
    ///
    /// * `secret` - The party's secret factor. Must be an element of `Z_q`.
    /// * `modulus` - The prime modulus `q` of the field.
    /// * `security` - The statistical security parameter.
    pub fn new(
        secret: BigUint,
        modulus: BigUint,
        security: SecurityParam,
    ) -> Result<Self, MtaError> {
        if !is_prime(&modulus, None).probably() {
            return Err(MtaError::InvalidModulus);
        }
        if secret >= modulus {
            return Err(MtaError::SecretOutOfRange);
        }

        let count = ceil_log2(&modulus) + security.bits();

        Ok(Self {
            secret,
            modulus,
            count,
        })
    }

    /// Returns the party's secret factor.
    pub fn secret(&self) -> &BigUint {
        &self.secret
    }

    /// Returns the field modulus.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Returns the number of simulated OT instances.
    pub fn count(&self) -> usize {
        self.count
    }
}

/// Returns `ceil(log2(q))` for `q >= 2`.
fn ceil_log2(q: &BigUint) -> usize {
    let bits = q.bits() as usize;
    if q.count_ones() == 1 {
        bits - 1
    } else {
        bits
    }
}
