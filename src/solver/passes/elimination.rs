//! Elimination by exhaustion: a pegged value must bind to exactly one value
//! of every other property, so a single surviving candidate is forced.

use crate::{
    error::Result,
    solver::{
        constraint::Constraint,
        knowledge::{KnowledgeBase, Pair, Truth},
        passes::Pass,
        universe::{PropertyId, Universe, ValueId},
        value::ValueToken,
    },
};

#[derive(Debug, Default)]
pub struct EliminationByExhaustion;

impl<V: ValueToken> Pass<V> for EliminationByExhaustion {
    fn name(&self) -> &'static str {
        "elimination"
    }

    fn run(
        &self,
        universe: &Universe<V>,
        _constraints: &[Constraint],
        kb: &mut KnowledgeBase,
    ) -> Result<()> {
        for from in 0..universe.property_count() {
            for into in 0..universe.property_count() {
                if from == into {
                    continue;
                }
                for &pegged in universe.values_in(from) {
                    if let Some(pair) = single_open_slot(universe, kb, pegged, into) {
                        kb.claim(pair, Truth::Bound)?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// Scans `pegged` against every value of `into`. Returns the only unknown
/// slot if all other slots are excluded; `None` if a binding already exists
/// or more than one slot is still open.
fn single_open_slot<V: ValueToken>(
    universe: &Universe<V>,
    kb: &KnowledgeBase,
    pegged: ValueId,
    into: PropertyId,
) -> Option<Pair> {
    let mut open = None;
    for &candidate in universe.values_in(into) {
        let pair = Pair::new(pegged, candidate);
        match kb.truth(pair) {
            // exclusion already settled this row
            Some(Truth::Bound) => return None,
            Some(Truth::Excluded) => {}
            None => {
                if open.is_some() {
                    return None;
                }
                open = Some(pair);
            }
        }
    }
    open
}
