use crate::{
    error::Result,
    solver::{
        knowledge::{KnowledgeBase, Pair, Truth},
        universe::Universe,
        value::ValueToken,
    },
};

/// One way a constraint could be realized: a set of pairs that must all be
/// bound together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pairs: Vec<Pair>,
}

impl Scenario {
    pub fn new(mut pairs: Vec<Pair>) -> Self {
        pairs.sort_unstable();
        pairs.dedup();
        Self { pairs }
    }

    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    /// A scenario dies as soon as any of its pairs is known excluded.
    pub fn is_dead(&self, kb: &KnowledgeBase) -> bool {
        self.pairs
            .iter()
            .any(|&pair| kb.truth(pair) == Some(Truth::Excluded))
    }

    pub fn is_fully_bound(&self, kb: &KnowledgeBase) -> bool {
        self.pairs
            .iter()
            .all(|&pair| kb.truth(pair) == Some(Truth::Bound))
    }
}

/// A disjunction of scenarios: the constraint is satisfied as long as at
/// least one of its scenarios can still be realized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    scenarios: Vec<Scenario>,
}

impl Constraint {
    /// Relates `a` and `b` through a list of pairing options: each
    /// `(other_a, other_b)` becomes the scenario `{(a, other_a), (b, other_b)}`.
    pub fn variable<V: ValueToken>(
        universe: &Universe<V>,
        a: &V,
        b: &V,
        options: &[(V, V)],
    ) -> Result<Self> {
        let scenarios = options
            .iter()
            .map(|(other_a, other_b)| {
                Ok(Scenario::new(vec![
                    universe.pair(a, other_a)?,
                    universe.pair(b, other_b)?,
                ]))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { scenarios })
    }

    /// Forces `a` and `b` to describe the same entity.
    pub fn direct<V: ValueToken>(universe: &Universe<V>, a: &V, b: &V) -> Result<Self> {
        Ok(Self {
            scenarios: vec![Scenario::new(vec![universe.pair(a, b)?])],
        })
    }

    /// Pins an already-canonical pair; the search uses this to commit a guess.
    pub(crate) fn forcing(pair: Pair) -> Self {
        Self {
            scenarios: vec![Scenario::new(vec![pair])],
        }
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// True once some scenario is realized outright.
    pub fn is_satisfied(&self, kb: &KnowledgeBase) -> bool {
        self.scenarios
            .iter()
            .any(|scenario| scenario.is_fully_bound(kb))
    }
}
