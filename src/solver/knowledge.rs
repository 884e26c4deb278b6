use im::HashMap;
use serde::Serialize;

use crate::{
    error::{Contradiction, Result},
    solver::universe::ValueId,
};

/// A candidate binding between two values of different properties.
///
/// The pair is unordered; the two ids are stored sorted so that every
/// unordered pair has exactly one map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Pair(ValueId, ValueId);

impl Pair {
    pub fn new(a: ValueId, b: ValueId) -> Self {
        debug_assert_ne!(a, b, "a value cannot pair with itself");
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }

    pub fn endpoints(&self) -> (ValueId, ValueId) {
        (self.0, self.1)
    }

    pub fn contains(&self, value: ValueId) -> bool {
        self.0 == value || self.1 == value
    }
}

impl std::fmt::Display for Pair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(v{}, v{})", self.0, self.1)
    }
}

/// Whether the two values of a pair describe the same entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Truth {
    Bound,
    Excluded,
}

impl std::fmt::Display for Truth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Truth::Bound => write!(f, "bound"),
            Truth::Excluded => write!(f, "excluded"),
        }
    }
}

/// The authoritative record of every decided pair; absence means unknown.
///
/// [`KnowledgeBase::claim`] is the only mutator, so knowledge can only grow
/// within one solving attempt and a recorded truth can never flip. Each
/// attempt owns a fresh base; parent and child attempts never share one.
#[derive(Debug, Clone, Default, Serialize)]
pub struct KnowledgeBase {
    facts: HashMap<Pair, Truth>,
}

impl KnowledgeBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a truth for `pair`. Re-claiming the recorded truth is a
    /// no-op; claiming the opposite truth is a contradiction. Returns
    /// whether the claim was new knowledge.
    pub fn claim(&mut self, pair: Pair, truth: Truth) -> Result<bool> {
        match self.facts.get(&pair) {
            None => {
                self.facts.insert(pair, truth);
                Ok(true)
            }
            Some(&known) if known == truth => Ok(false),
            Some(&known) => Err(Contradiction::ConflictingClaim {
                pair,
                known,
                claimed: truth,
            }
            .into()),
        }
    }

    pub fn truth(&self, pair: Pair) -> Option<Truth> {
        self.facts.get(&pair).copied()
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Snapshot of the currently bound pairs. Passes iterate the snapshot
    /// while claiming against the live base.
    pub fn bound_pairs(&self) -> Vec<Pair> {
        self.facts
            .iter()
            .filter(|(_, &truth)| truth == Truth::Bound)
            .map(|(&pair, _)| pair)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Pair, Truth)> + '_ {
        self.facts.iter().map(|(&pair, &truth)| (pair, truth))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn claim_records_and_is_idempotent() {
        let mut kb = KnowledgeBase::new();
        let pair = Pair::new(3, 0);

        assert!(kb.claim(pair, Truth::Bound).unwrap());
        assert_eq!(kb.truth(pair), Some(Truth::Bound));
        assert_eq!(kb.len(), 1);

        // same truth again: no-op, no growth
        assert!(!kb.claim(pair, Truth::Bound).unwrap());
        assert_eq!(kb.len(), 1);
    }

    #[test]
    fn opposite_claim_is_a_contradiction() {
        let mut kb = KnowledgeBase::new();
        let pair = Pair::new(1, 2);
        kb.claim(pair, Truth::Excluded).unwrap();

        let result = kb.claim(pair, Truth::Bound);
        assert!(matches!(
            result,
            Err(Error::Contradiction(Contradiction::ConflictingClaim {
                known: Truth::Excluded,
                claimed: Truth::Bound,
                ..
            }))
        ));
        // the recorded truth is untouched
        assert_eq!(kb.truth(pair), Some(Truth::Excluded));
    }

    #[test]
    fn pairs_are_canonical_regardless_of_argument_order() {
        let mut kb = KnowledgeBase::new();
        kb.claim(Pair::new(7, 2), Truth::Bound).unwrap();
        assert_eq!(kb.truth(Pair::new(2, 7)), Some(Truth::Bound));
    }

    #[test]
    fn bound_pairs_skips_exclusions() {
        let mut kb = KnowledgeBase::new();
        kb.claim(Pair::new(0, 2), Truth::Bound).unwrap();
        kb.claim(Pair::new(0, 3), Truth::Excluded).unwrap();
        kb.claim(Pair::new(1, 3), Truth::Bound).unwrap();

        let mut bound = kb.bound_pairs();
        bound.sort_unstable();
        assert_eq!(bound, vec![Pair::new(0, 2), Pair::new(1, 3)]);
    }
}
