//! Message types used in the MtA protocol.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// The sender's answers to the receiver's signed queries.
#[allow(missing_docs)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryAnswers {
    pub answers: Vec<BigUint>,
}

/// The receiver's reconstruction vector.
///
/// Sent to the sender so it can compute its summand.
#[allow(missing_docs)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reconstruction {
    pub elements: Vec<BigUint>,
}
