//! Locally simulated execution of the MtA protocol.
//!
//! Oblivious transfer is an ideal functionality here: the sender answers each
//! signed query by direct call instead of a two-party OT exchange. A real
//! transport-backed OT slots in behind the same message types.

use crate::{msgs::QueryAnswers, MtaError, MtaReceiver, MtaSender};
use num_bigint::BigUint;
use rand::Rng;
use tracing::instrument;

/// Runs one protocol execution between `receiver` and `sender`.
///
/// # Arguments
///
/// * `receiver` - The receiver party, holding the secret factor `b`.
/// * `sender` - The sender party, holding the secret factor `a`.
/// * `rng` - Randomness for the receiver's reconstruction vector.
///
/// # Returns
///
/// * The summands `(p1, p2)` with `(p1 + p2) mod q == (a * b) mod q`, where
///   `p1` belongs to the sender and `p2` to the receiver.
#[instrument(level = "debug", skip_all, err)]
pub fn execute_mta<R: Rng + ?Sized>(
    receiver: &MtaReceiver,
    sender: &MtaSender,
    rng: &mut R,
) -> Result<(BigUint, BigUint), MtaError> {
    if receiver.party().modulus() != sender.party().modulus() {
        return Err(MtaError::ModulusMismatch);
    }
    // Holds whenever both parties use the same security parameter.
    if receiver.party().count() != sender.party().count() {
        return Err(MtaError::UnequalLength(
            receiver.party().count(),
            sender.party().count(),
        ));
    }

    let answers = QueryAnswers {
        answers: receiver
            .signs()
            .iter()
            .enumerate()
            .map(|(i, &sign)| sender.answer(i, sign))
            .collect::<Result<_, _>>()?,
    };

    let reconstruction = receiver.reconstruction_vector(rng);

    let p1 = sender.share(&reconstruction)?;
    let p2 = receiver.share(&answers, &reconstruction)?;

    Ok((p1, p2))
}
