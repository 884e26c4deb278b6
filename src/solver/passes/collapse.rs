//! Constraint collapse: a constraint with exactly one scenario left alive
//! must realize that scenario.

use crate::{
    error::Result,
    solver::{
        constraint::Constraint,
        knowledge::{KnowledgeBase, Truth},
        passes::Pass,
        universe::Universe,
        value::ValueToken,
    },
};

#[derive(Debug, Default)]
pub struct ConstraintCollapse;

impl<V: ValueToken> Pass<V> for ConstraintCollapse {
    fn name(&self) -> &'static str {
        "collapse"
    }

    fn run(
        &self,
        _universe: &Universe<V>,
        constraints: &[Constraint],
        kb: &mut KnowledgeBase,
    ) -> Result<()> {
        for constraint in constraints {
            let mut alive = constraint
                .scenarios()
                .iter()
                .filter(|scenario| !scenario.is_dead(kb));
            let first = alive.next();
            let second = alive.next();

            // the inference depends only on how many scenarios survive,
            // never on which one happens to be seen first
            if let (Some(scenario), None) = (first, second) {
                for &pair in scenario.pairs() {
                    kb.claim(pair, Truth::Bound)?;
                }
            }
        }
        Ok(())
    }
}
