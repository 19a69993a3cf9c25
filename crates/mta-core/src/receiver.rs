//! Receiver implementation.

use crate::{
    field,
    msgs::{QueryAnswers, Reconstruction},
    MtaError, Party, SecurityParam,
};
use num_bigint::{BigUint, RandBigInt};
use rand::Rng;

/// Samples a sign uniformly from `{+1, -1}`.
pub fn sample_sign<R: Rng + ?Sized>(rng: &mut R) -> i8 {
    if rng.gen::<bool>() {
        1
    } else {
        -1
    }
}

/// The receiver (P2) of the MtA protocol.
///
/// Holds the secret factor `b` and a vector of uniformly random sign choices,
/// one per simulated OT instance. The receiver poses one signed query per
/// instance and combines the answers into its summand.
#[derive(Debug)]
pub struct MtaReceiver {
    party: Party,
    signs: Vec<i8>,
}

impl MtaReceiver {
    /// Creates a new receiver, sampling its sign vector.
    ///
    /// # Arguments
    ///
    /// * `secret` - The receiver's secret factor. Must be an element of `Z_q`.
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
        let signs = (0..party.count()).map(|_| sample_sign(rng)).collect();

        Ok(Self { party, signs })
    }

    /// Produces a fresh reconstruction vector `v` satisfying
    /// `sum_i signs[i] * v[i] mod q == secret`.
    ///
    /// The vector is sampled anew on every call: `n` uniform field elements,
    /// with one uniformly chosen position corrected by the inner-product
    /// deficit. Every sign is its own inverse mod `q`, so the correction
    /// `v[r] += delta * signs[r]` cancels the deficit exactly. The vector is
    /// never cached, as reusing it across executions would correlate their
    /// transcripts.
    pub fn reconstruction_vector<R: Rng + ?Sized>(&self, rng: &mut R) -> Reconstruction {
        let q = self.party.modulus();
        let count = self.party.count();

        let mut v: Vec<BigUint> = (0..count).map(|_| rng.gen_biguint_below(q)).collect();

        let tot = field::signed_inner_product(&self.signs, &v, q);
        let delta = field::sub(self.party.secret(), &tot, q);

        let r = rng.gen_range(0..count);
        v[r] = if self.signs[r] == 1 {
            field::add(&v[r], &delta, q)
        } else {
            field::sub(&v[r], &delta, q)
        };

        Reconstruction { elements: v }
    }

    /// Computes the receiver's summand from the sender's query answers.
    ///
    /// Returns `p2 = (sum_i z[i] * v[i]) mod q`.
    ///
    /// # Arguments
    ///
    /// * `answers` - The sender's answers to this receiver's signed queries.
    /// * `reconstruction` - The reconstruction vector used in this execution.
    pub fn share(
        &self,
        answers: &QueryAnswers,
        reconstruction: &Reconstruction,
    ) -> Result<BigUint, MtaError> {
        let z = &answers.answers;
        let v = &reconstruction.elements;

        if z.len() != self.signs.len() {
            return Err(MtaError::UnequalLength(z.len(), self.signs.len()));
        }
        if v.len() != self.signs.len() {
            return Err(MtaError::UnequalLength(v.len(), self.signs.len()));
        }

        Ok(field::inner_product(z, v, self.party.modulus()))
    }

    /// Returns the shared party state.
    pub fn party(&self) -> &Party {
        &self.party
    }

    /// Returns the sign vector.
    pub fn signs(&self) -> &[i8] {
        &self.signs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn receiver(secret: u64, modulus: u64) -> MtaReceiver {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        MtaReceiver::new(
            BigUint::from(secret),
            BigUint::from(modulus),
            SecurityParam::new(16),
            &mut rng,
        )
        .unwrap()
    }

    #[test]
    fn test_sample_sign_yields_unit_values() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        assert!((0..256).all(|_| {
            let sign = sample_sign(&mut rng);
            sign == 1 || sign == -1
        }));
    }

    #[test]
    fn test_receiver_signs_are_unit_values() {
        let receiver = receiver(5, 11);

        assert_eq!(receiver.signs().len(), receiver.party().count());
        assert!(receiver.signs().iter().all(|&sign| sign == 1 || sign == -1));
    }

    #[test]
    fn test_reconstruction_vector_satisfies_constraint() {
        let receiver = receiver(5, 65537);
        let q = receiver.party().modulus().clone();
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        // Fresh vectors on every call, the constraint must hold each time.
        for _ in 0..8 {
            let v = receiver.reconstruction_vector(&mut rng).elements;

            assert_eq!(v.len(), receiver.party().count());
            assert!(v.iter().all(|element| element < &q));
            assert_eq!(
                field::signed_inner_product(receiver.signs(), &v, &q),
                BigUint::from(5u8)
            );
        }
    }

    #[test]
    fn test_receiver_share_rejects_unequal_length() {
        let receiver = receiver(5, 11);
        let mut rng = ChaCha8Rng::seed_from_u64(4);

        let reconstruction = receiver.reconstruction_vector(&mut rng);
        let answers = QueryAnswers {
            answers: vec![BigUint::from(1u8)],
        };
        let err = receiver.share(&answers, &reconstruction).unwrap_err();

        assert_eq!(err, MtaError::UnequalLength(1, receiver.party().count()));
    }
}
