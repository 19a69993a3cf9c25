//! Sender implementation.

use crate::{field, msgs::Reconstruction, MtaError, Party, SecurityParam};
use num_bigint::{BigUint, RandBigInt};
use rand::Rng;

/// The sender (P1) of the MtA protocol.
///
/// Holds the secret factor `a` and a vector of uniformly random masks, one
/// per simulated OT instance, and answers the receiver's signed queries. In a
/// deployment backed by a real OT this party plays the OT sender: at every
/// index only the message selected by the receiver's sign choice leaves this
/// party.
#[derive(Debug)]
pub struct MtaSender {
    party: Party,
    masks: Vec<BigUint>,
}

impl MtaSender {
    /// Creates a new sender, sampling its mask vector.
    ///
    /// # Arguments
    ///
    /// * `secret` - The sender's secret factor. Must be an element of `Z_q`.
    /// * `modulus` - The prime modulus `q` of the field.
    /// * `security` - The statistical security parameter.
    /// * `rng` - The randomness source. Production use requires a
    ///   cryptographically secure generator.
    pub fn new<R: Rng + ?Sized>(
        secret: BigUint,
        modulus: BigUint,
        security: SecurityParam,
        rng: &mut R,
    ) -> Result<Self, MtaError> {
        let party = Party::new(secret, modulus, security)?;
        let masks = (0..party.count())
            .map(|_| rng.gen_biguint_below(party.modulus()))
            .collect();

        Ok(Self { party, masks })
    }

    /// Answers a single signed query.
    ///
    /// Returns `(secret * sign + masks[index]) mod q`, the one OT message
    /// selected by the receiver's choice at `index`. The unselected message
    /// is never computed.
    ///
    /// # Arguments
    ///
    /// * `index` - The query index. Must be smaller than [`Party::count`].
    /// * `sign` - The receiver's choice, either `+1` or `-1`.
    pub fn answer(&self, index: usize, sign: i8) -> Result<BigUint, MtaError> {
        if index >= self.masks.len() {
            return Err(MtaError::IndexOutOfRange(index, self.masks.len()));
        }
        if sign != 1 && sign != -1 {
            return Err(MtaError::InvalidSign(sign));
        }

        let q = self.party.modulus();
        let mask = &self.masks[index];

        let answer = if sign == 1 {
            field::add(self.party.secret(), mask, q)
        } else {
            field::sub(mask, self.party.secret(), q)
        };

        Ok(answer)
    }

    /// Computes the sender's summand from the receiver's reconstruction
    /// vector.
    ///
    /// Returns `p1 = -(sum_i masks[i] * v[i]) mod q`.
    pub fn share(&self, reconstruction: &Reconstruction) -> Result<BigUint, MtaError> {
        let v = &reconstruction.elements;
        if v.len() != self.masks.len() {
            return Err(MtaError::UnequalLength(v.len(), self.masks.len()));
        }

        let q = self.party.modulus();
        Ok(field::neg(&field::inner_product(&self.masks, v, q), q))
    }

    /// Returns the shared party state.
    pub fn party(&self) -> &Party {
        &self.party
    }

    /// Returns the mask vector.
    pub fn masks(&self) -> &[BigUint] {
        &self.masks
    }
}
