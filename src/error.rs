use crate::solver::knowledge::{Pair, Truth};

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Contradiction(#[from] Contradiction),
    #[error(transparent)]
    Invalid(#[from] InvalidPuzzle),
}

/// The single solving-time failure kind. The search contains it: a
/// contradicted attempt is abandoned, and a fully contradicted instance is
/// reported as unsatisfiable rather than as an error.
#[derive(Debug, thiserror::Error)]
pub enum Contradiction {
    #[error("pair {pair} claimed {claimed}, but it is already known {known}")]
    ConflictingClaim {
        pair: Pair,
        known: Truth,
        claimed: Truth,
    },
    #[error("constraint {index} has no scenario whose pairs are all bound")]
    UnsatisfiedConstraint { index: usize },
    #[error("a resolved family does not hold exactly one value per property")]
    BrokenFamily,
}

/// Rejected input, reported when a universe or constraint is built.
#[derive(Debug, thiserror::Error)]
pub enum InvalidPuzzle {
    #[error("value {0} appears in more than one property")]
    DuplicateValue(String),
    #[error("value {0} does not belong to any property")]
    UnknownValue(String),
    #[error("values {0} and {1} belong to the same property")]
    SamePropertyPair(String, String),
    #[error("properties must all hold the same number of values")]
    MismatchedProperties,
    #[error("puzzle definition is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}
