//! Exclusion by binding: bindings are one-to-one per entity, so a bound pair
//! rules out every sibling value on both sides ("plus-sign" exclusion).

use crate::{
    error::Result,
    solver::{
        constraint::Constraint,
        knowledge::{KnowledgeBase, Pair, Truth},
        passes::Pass,
        universe::Universe,
        value::ValueToken,
    },
};

#[derive(Debug, Default)]
pub struct ExclusionByBinding;

impl<V: ValueToken> Pass<V> for ExclusionByBinding {
    fn name(&self) -> &'static str {
        "exclusion"
    }

    fn run(
        &self,
        universe: &Universe<V>,
        _constraints: &[Constraint],
        kb: &mut KnowledgeBase,
    ) -> Result<()> {
        for pair in kb.bound_pairs() {
            let (a, b) = pair.endpoints();
            for (value, partner) in [(a, b), (b, a)] {
                for &sibling in universe.values_in(universe.property_of(value)) {
                    if sibling == value {
                        continue;
                    }
                    kb.claim(Pair::new(sibling, partner), Truth::Excluded)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_binding_excludes_both_rows_of_the_plus_sign() {
        let universe =
            Universe::new(vec![vec!["1", "2", "3"], vec!["a", "b", "c"]]).unwrap();
        let mut kb = KnowledgeBase::new();
        kb.claim(universe.pair(&"a", &"1").unwrap(), Truth::Bound)
            .unwrap();

        ExclusionByBinding.run(&universe, &[], &mut kb).unwrap();

        for other in ["b", "c"] {
            assert_eq!(
                kb.truth(universe.pair(&other, &"1").unwrap()),
                Some(Truth::Excluded)
            );
        }
        for other in ["2", "3"] {
            assert_eq!(
                kb.truth(universe.pair(&"a", &other).unwrap()),
                Some(Truth::Excluded)
            );
        }
        // the binding itself is untouched, and unrelated pairs stay unknown
        assert_eq!(
            kb.truth(universe.pair(&"a", &"1").unwrap()),
            Some(Truth::Bound)
        );
        assert_eq!(kb.truth(universe.pair(&"b", &"2").unwrap()), None);
    }

    #[test]
    fn conflicting_bindings_surface_as_a_contradiction() {
        let universe = Universe::new(vec![vec!["1", "2"], vec!["a", "b"]]).unwrap();
        let mut kb = KnowledgeBase::new();
        kb.claim(universe.pair(&"a", &"1").unwrap(), Truth::Bound)
            .unwrap();
        kb.claim(universe.pair(&"b", &"1").unwrap(), Truth::Bound)
            .unwrap();

        let result = ExclusionByBinding.run(&universe, &[], &mut kb);
        assert!(result.is_err());
    }
}
