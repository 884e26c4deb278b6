//! The four inference passes the engine repeats until a fixed point.

pub mod collapse;
pub mod elimination;
pub mod exclusion;
pub mod transitivity;

use crate::{
    error::Result,
    solver::{constraint::Constraint, knowledge::KnowledgeBase, universe::Universe, value::ValueToken},
};

/// A single inference pass over the knowledge base.
///
/// A pass reads the universe, the constraints, and the current knowledge, and
/// claims whatever new truths it can justify. A pass fails only when one of
/// its claims contradicts recorded knowledge.
pub trait Pass<V: ValueToken>: std::fmt::Debug {
    /// Short name used for progress events and statistics.
    fn name(&self) -> &'static str;

    fn run(
        &self,
        universe: &Universe<V>,
        constraints: &[Constraint],
        kb: &mut KnowledgeBase,
    ) -> Result<()>;
}

/// The standard pass sequence, in the order the engine runs them.
pub fn default_passes<V: ValueToken>() -> Vec<Box<dyn Pass<V>>> {
    vec![
        Box::new(collapse::ConstraintCollapse),
        Box::new(exclusion::ExclusionByBinding),
        Box::new(elimination::EliminationByExhaustion),
        Box::new(transitivity::Transitivity),
    ]
}
