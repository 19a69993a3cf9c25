//! Multiplicative-to-additive (MtA) share conversion over a prime field.
//!
//! Two parties hold secret factors `a` and `b` in `Z_q` and end up with
//! additive summands `p1` and `p2` such that `p1 + p2 = a * b mod q`, without
//! either party learning the other's factor or the product. The protocol is
//! the OT-based construction from Haitner, Makriyannis, Ranellucci and
//! Tsfadia, "Highly Efficient OT-Based Multiplication Protocols",
//! Eurocrypt 2021.
//!
//! Core logic of the protocol without I/O. Oblivious transfer is simulated
//! locally by the [`ideal`] execution driver; a transport-backed OT can be
//! layered on top using the message types in [`msgs`].

#![deny(missing_docs, unreachable_pub, unused_must_use)]
#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod ideal;
pub mod msgs;

mod field;
mod party;
mod receiver;
mod sender;

pub use party::Party;
pub use receiver::{sample_sign, MtaReceiver};
pub use sender::MtaSender;

/// Statistical security parameter.
///
/// A value of `k` yields roughly `k / 4` bits of statistical security and
/// sizes the number of simulated OT instances as `ceil(log2(q)) + k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecurityParam(usize);

impl SecurityParam {
    /// Creates a new security parameter.
    ///
    /// # Panics
    ///
    /// Panics if `k` is zero.
    pub fn new(k: usize) -> Self {
        assert!(k > 0, "security parameter must be positive");
        Self(k)
    }

    /// Returns the parameter in bits.
    pub fn bits(&self) -> usize {
        self.0
    }
}

impl Default for SecurityParam {
    fn default() -> Self {
        Self(512)
    }
}

/// An MtA protocol error.
#[allow(missing_docs)]
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MtaError {
    #[error("modulus is not prime")]
    InvalidModulus,
    #[error("secret is not a field element, must be smaller than the modulus")]
    SecretOutOfRange,
    #[error("query index out of range. Got {0}, expected less than {1}")]
    IndexOutOfRange(usize, usize),
    #[error("query sign must be +1 or -1. Got {0}")]
    InvalidSign(i8),
    #[error("sender and receiver moduli do not match")]
    ModulusMismatch,
    #[error("unequal vector length. Got {0}, expected {1}")]
    UnequalLength(usize, usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_security_param_default() {
        assert_eq!(SecurityParam::default().bits(), 512);
    }

    #[test]
    #[should_panic]
    fn test_security_param_rejects_zero() {
        SecurityParam::new(0);
    }
}
