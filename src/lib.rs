//! Gridlock is a constraint-propagation and backtracking solver for
//! logic-grid puzzles.
//!
//! A puzzle has a fixed number of entities, each described by exactly one
//! value from each of several disjoint categorical properties. Constraints
//! relate values of different properties, and the solver decides, for every
//! cross-property pair of values, whether the two describe the same entity
//! (bound) or different entities (excluded), until every entity is fully
//! known or the puzzle is proven unsatisfiable.
//!
//! # Core Concepts
//!
//! - [`Universe`](crate::solver::universe::Universe): the properties and
//!   their values, interned to dense ids.
//! - [`Constraint`](crate::solver::constraint::Constraint): a disjunction of
//!   scenarios, each a set of pair bindings that must hold together.
//! - [`KnowledgeBase`](crate::solver::knowledge::KnowledgeBase): the
//!   authoritative record of every decided pair; `claim` is its only
//!   mutator, so a recorded truth can never flip.
//! - [`SolverEngine`](crate::solver::engine::SolverEngine): repeats four
//!   inference passes to a fixed point, then guesses and backtracks when
//!   propagation stalls.
//!
//! For string-token puzzles there is also a serializable frontend in
//! [`puzzle`](crate::puzzle).
//!
//! # Example: A Two-Property Lineup
//!
//! ```
//! use gridlock::solver::constraint::Constraint;
//! use gridlock::solver::engine::SolverEngine;
//! use gridlock::solver::universe::Universe;
//!
//! // Two properties: appointment slots and people.
//! let universe = Universe::new(vec![
//!     vec!["morning", "evening"],
//!     vec!["ada", "ben"],
//! ])?;
//!
//! // Ada takes the morning slot; the rest follows by elimination.
//! let constraints = vec![Constraint::direct(&universe, &"ada", &"morning")?];
//!
//! let engine = SolverEngine::default();
//! let (families, stats) = engine.solve(&universe, &constraints)?;
//! let families = families.expect("uniquely solvable");
//!
//! let lineup: Vec<Vec<&str>> = families
//!     .iter()
//!     .map(|family| family.tokens(&universe).into_iter().copied().collect())
//!     .collect();
//! assert_eq!(lineup, vec![vec!["morning", "ada"], vec!["evening", "ben"]]);
//! assert_eq!(stats.guesses, 0);
//! # Ok::<(), gridlock::error::Error>(())
//! ```

pub mod error;
pub mod examples;
pub mod puzzle;
pub mod solver;
