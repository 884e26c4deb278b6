//! Transitivity: two values bound to the same entity share every known
//! relation to the values of the remaining properties.

use crate::{
    error::Result,
    solver::{
        constraint::Constraint,
        knowledge::{KnowledgeBase, Pair},
        passes::Pass,
        universe::Universe,
        value::ValueToken,
    },
};

#[derive(Debug, Default)]
pub struct Transitivity;

impl<V: ValueToken> Pass<V> for Transitivity {
    fn name(&self) -> &'static str {
        "transitivity"
    }

    fn run(
        &self,
        universe: &Universe<V>,
        _constraints: &[Constraint],
        kb: &mut KnowledgeBase,
    ) -> Result<()> {
        // only bound pairs act as bridges; excluded pairs propagate nothing
        for pair in kb.bound_pairs() {
            let (a, b) = pair.endpoints();
            let bridged = (universe.property_of(a), universe.property_of(b));
            for property in 0..universe.property_count() {
                if property == bridged.0 || property == bridged.1 {
                    continue;
                }
                for &c in universe.values_in(property) {
                    if let Some(truth) = kb.truth(Pair::new(b, c)) {
                        kb.claim(Pair::new(a, c), truth)?;
                    }
                    if let Some(truth) = kb.truth(Pair::new(a, c)) {
                        kb.claim(Pair::new(b, c), truth)?;
                    }
                }
            }
        }
        Ok(())
    }
}
