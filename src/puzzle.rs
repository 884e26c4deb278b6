//! A declarative, serializable puzzle description.
//!
//! This is the string-token frontend over the engine: name your properties
//! and constraints, then [`PuzzleDefinition::solve`] compiles them into a
//! [`Universe`] and engine [`Constraint`]s and runs the solver. Definitions
//! round-trip through serde, so puzzles can live in JSON files.

use serde::{Deserialize, Serialize};

use crate::{
    error::{InvalidPuzzle, Result},
    solver::{
        constraint::Constraint,
        engine::{SolveStats, SolverEngine},
        universe::Universe,
    },
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleDefinition {
    /// Disjoint value sets, one per categorical property.
    pub properties: Vec<Vec<String>>,
    pub constraints: Vec<ConstraintDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConstraintDefinition {
    /// `a` and `b` describe the same entity.
    Direct { a: String, b: String },
    /// `a` and `b` are related through pairing options: for each
    /// `(other_a, other_b)` entry, one allowed outcome is `a` with `other_a`
    /// and `b` with `other_b`.
    Variable {
        a: String,
        b: String,
        options: Vec<(String, String)>,
    },
}

impl PuzzleDefinition {
    pub fn from_json(text: &str) -> Result<Self> {
        let definition = serde_json::from_str(text).map_err(InvalidPuzzle::Malformed)?;
        Ok(definition)
    }

    /// Builds the universe and engine constraints this definition describes.
    pub fn compile(&self) -> Result<(Universe<String>, Vec<Constraint>)> {
        let universe = Universe::new(self.properties.clone())?;
        let constraints = self
            .constraints
            .iter()
            .map(|definition| match definition {
                ConstraintDefinition::Direct { a, b } => Constraint::direct(&universe, a, b),
                ConstraintDefinition::Variable { a, b, options } => {
                    Constraint::variable(&universe, a, b, options)
                }
            })
            .collect::<Result<Vec<_>>>()?;
        Ok((universe, constraints))
    }

    /// Solves with the default engine. `Some` holds one sorted name list per
    /// entity (the outer list sorted too, so results compare stably); `None`
    /// means the puzzle is unsatisfiable.
    pub fn solve(&self) -> Result<(Option<Vec<Vec<String>>>, SolveStats)> {
        self.solve_with(&SolverEngine::default())
    }

    pub fn solve_with(
        &self,
        engine: &SolverEngine<String>,
    ) -> Result<(Option<Vec<Vec<String>>>, SolveStats)> {
        let (universe, constraints) = self.compile()?;
        let (families, stats) = engine.solve(&universe, &constraints)?;
        let resolved = families.map(|families| {
            let mut entities: Vec<Vec<String>> = families
                .iter()
                .map(|family| {
                    let mut names: Vec<String> =
                        family.tokens(&universe).into_iter().cloned().collect();
                    names.sort();
                    names
                })
                .collect();
            entities.sort();
            entities
        });
        Ok((resolved, stats))
    }
}
