use std::{collections::HashMap, time::Instant};

use tracing::debug;

use crate::{
    error::{Contradiction, Error, Result},
    solver::{
        constraint::Constraint,
        family::{assemble, Family},
        heuristics::guess::{FirstUnknownGuess, GuessOrdering},
        knowledge::KnowledgeBase,
        observer::{NullObserver, PassEvent, ProgressObserver},
        passes::{default_passes, Pass},
        universe::Universe,
        value::ValueToken,
    },
};

/// Counters describing one `solve` call, across every attempt it made.
#[derive(Debug, Clone, Default)]
pub struct SolveStats {
    /// Solving attempts started: the root plus one per guess committed.
    pub attempts: u64,
    /// Full pass rounds run across all attempts.
    pub rounds: u64,
    /// Pairs tentatively forced bound by the search.
    pub guesses: u64,
    /// Guesses abandoned after their attempt failed.
    pub backtracks: u64,
    /// Per-pass counters, keyed by pass name.
    pub pass_stats: HashMap<&'static str, PassStats>,
}

#[derive(Debug, Clone, Default)]
pub struct PassStats {
    pub runs: u64,
    pub claims: u64,
    pub time_spent_micros: u64,
}

enum Propagation {
    /// Every pair has a known truth.
    Complete,
    /// A full round added no knowledge.
    Stalled,
}

/// The main engine for solving logic-grid puzzles.
///
/// The engine repeats four inference passes (constraint collapse, exclusion
/// by binding, elimination by exhaustion, transitivity) until the knowledge
/// base stops growing. If every pair is decided, the result is assembled; if
/// propagation stalls first, the engine guesses an unresolved pair, forces it
/// bound, and retries the whole procedure on the augmented constraint set,
/// abandoning the guess on contradiction.
pub struct SolverEngine<V: ValueToken> {
    passes: Vec<Box<dyn Pass<V>>>,
    guess_ordering: Box<dyn GuessOrdering>,
    observer: Box<dyn ProgressObserver>,
}

impl<V: ValueToken> SolverEngine<V> {
    pub fn new(
        guess_ordering: Box<dyn GuessOrdering>,
        observer: Box<dyn ProgressObserver>,
    ) -> Self {
        Self {
            passes: default_passes(),
            guess_ordering,
            observer,
        }
    }

    /// Attempts to solve the puzzle described by `universe` and `constraints`.
    ///
    /// # Returns
    ///
    /// * `Ok((Some(families), stats))` if a complete assignment is found; one
    ///   family per entity, each holding exactly one value per property.
    /// * `Ok((None, stats))` if the instance is unsatisfiable.
    /// * `Err(error)` if an error escapes the solving process itself.
    pub fn solve(
        &self,
        universe: &Universe<V>,
        constraints: &[Constraint],
    ) -> Result<(Option<Vec<Family>>, SolveStats)> {
        let mut stats = SolveStats::default();
        let outcome = self.attempt(universe, constraints, &mut stats)?;
        Ok((outcome, stats))
    }

    /// One solving attempt over a fresh knowledge base. A contradiction is
    /// contained here: it fails this attempt, never the whole solve.
    fn attempt(
        &self,
        universe: &Universe<V>,
        constraints: &[Constraint],
        stats: &mut SolveStats,
    ) -> Result<Option<Vec<Family>>> {
        stats.attempts += 1;
        let mut kb = KnowledgeBase::new();

        let propagation = match self.propagate(universe, constraints, &mut kb, stats) {
            Ok(propagation) => propagation,
            Err(Error::Contradiction(_)) => return Ok(None),
            Err(other) => return Err(other),
        };

        match propagation {
            Propagation::Complete => match self.resolve(universe, constraints, &kb) {
                Ok(families) => Ok(Some(families)),
                Err(Error::Contradiction(_)) => Ok(None),
                Err(other) => Err(other),
            },
            Propagation::Stalled => self.branch(universe, constraints, &kb, stats),
        }
    }

    /// Runs the pass sequence until the knowledge base is complete or a full
    /// round adds nothing.
    fn propagate(
        &self,
        universe: &Universe<V>,
        constraints: &[Constraint],
        kb: &mut KnowledgeBase,
        stats: &mut SolveStats,
    ) -> Result<Propagation> {
        let total = universe.pair_count();
        loop {
            let before = kb.len();
            if before == total {
                return Ok(Propagation::Complete);
            }
            stats.rounds += 1;

            for pass in &self.passes {
                let entry = stats.pass_stats.entry(pass.name()).or_default();
                entry.runs += 1;
                let known_before = kb.len();
                let started = Instant::now();
                pass.run(universe, constraints, kb)?;
                entry.time_spent_micros += started.elapsed().as_micros() as u64;
                entry.claims += (kb.len() - known_before) as u64;

                self.observer.on_pass(&PassEvent {
                    pass: pass.name(),
                    pairs_known: kb.len(),
                    pairs_total: total,
                });
            }

            if kb.len() == before {
                return Ok(Propagation::Stalled);
            }
        }
    }

    /// Turns a complete knowledge base into families, after checking that
    /// every constraint actually kept a realized scenario.
    fn resolve(
        &self,
        universe: &Universe<V>,
        constraints: &[Constraint],
        kb: &KnowledgeBase,
    ) -> Result<Vec<Family>> {
        for (index, constraint) in constraints.iter().enumerate() {
            if !constraint.is_satisfied(kb) {
                return Err(Contradiction::UnsatisfiedConstraint { index }.into());
            }
        }
        assemble(universe, kb)
    }

    /// Guess-and-backtrack: forces one unresolved pair bound and retries the
    /// whole procedure on the augmented constraint set. A failed guess is
    /// abandoned without recording the pair as excluded; when every candidate
    /// fails, the instance is unsatisfiable.
    fn branch(
        &self,
        universe: &Universe<V>,
        constraints: &[Constraint],
        kb: &KnowledgeBase,
        stats: &mut SolveStats,
    ) -> Result<Option<Vec<Family>>> {
        for pair in self.guess_ordering.order(universe.unknown_pairs(kb)) {
            stats.guesses += 1;
            debug!(%pair, "propagation stalled, committing a guess");

            let mut augmented = constraints.to_vec();
            augmented.push(Constraint::forcing(pair));
            if let Some(families) = self.attempt(universe, &augmented, stats)? {
                return Ok(Some(families));
            }

            stats.backtracks += 1;
        }
        Ok(None)
    }
}

impl<V: ValueToken> Default for SolverEngine<V> {
    fn default() -> Self {
        Self::new(Box::new(FirstUnknownGuess), Box::new(NullObserver))
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use pretty_assertions::assert_eq;

    use super::*;

    fn positions_and_names() -> Universe<&'static str> {
        Universe::new(vec![vec!["1", "2", "3"], vec!["a", "b", "c"]]).unwrap()
    }

    // "a and b are positional neighbors" and "b immediately precedes c"
    fn lineup_constraints(universe: &Universe<&'static str>) -> Vec<Constraint> {
        vec![
            Constraint::variable(
                universe,
                &"a",
                &"b",
                &[("1", "2"), ("2", "1"), ("2", "3"), ("3", "2")],
            )
            .unwrap(),
            Constraint::variable(universe, &"b", &"c", &[("1", "2"), ("2", "3")]).unwrap(),
        ]
    }

    fn family_names(
        families: &[Family],
        universe: &Universe<&'static str>,
    ) -> Vec<Vec<&'static str>> {
        families
            .iter()
            .map(|family| family.tokens(universe).into_iter().copied().collect())
            .collect()
    }

    #[test]
    fn solves_the_neighbor_lineup() {
        let _ = tracing_subscriber::fmt::try_init();

        let universe = positions_and_names();
        let constraints = lineup_constraints(&universe);

        let (families, _stats) = SolverEngine::default()
            .solve(&universe, &constraints)
            .unwrap();
        let families = families.expect("the lineup has a unique assignment");

        assert_eq!(
            family_names(&families, &universe),
            vec![vec!["1", "a"], vec!["2", "b"], vec!["3", "c"]]
        );
    }

    #[test]
    fn pinning_a_to_the_rear_is_unsatisfiable() {
        let universe = positions_and_names();
        let mut constraints = lineup_constraints(&universe);
        constraints.push(Constraint::direct(&universe, &"a", &"3").unwrap());

        let (families, _stats) = SolverEngine::default()
            .solve(&universe, &constraints)
            .unwrap();
        assert!(families.is_none());
    }

    #[test]
    fn uniquely_determined_instances_need_no_guessing() {
        let universe = positions_and_names();
        let mut constraints = lineup_constraints(&universe);
        constraints.push(Constraint::direct(&universe, &"a", &"1").unwrap());

        let (families, stats) = SolverEngine::default()
            .solve(&universe, &constraints)
            .unwrap();
        assert_eq!(
            family_names(&families.unwrap(), &universe),
            vec![vec!["1", "a"], vec!["2", "b"], vec!["3", "c"]]
        );
        assert_eq!(stats.guesses, 0);
    }

    #[test]
    fn conflicting_direct_constraints_are_unsatisfiable() {
        let universe = positions_and_names();
        let constraints = vec![
            Constraint::direct(&universe, &"a", &"1").unwrap(),
            Constraint::direct(&universe, &"b", &"1").unwrap(),
        ];

        let (families, _stats) = SolverEngine::default()
            .solve(&universe, &constraints)
            .unwrap();
        assert!(families.is_none());
    }

    #[test]
    fn an_unconstrained_grid_resolves_through_search() {
        let universe = positions_and_names();

        let (families, stats) = SolverEngine::default().solve(&universe, &[]).unwrap();
        let families = families.expect("any assignment satisfies an empty constraint set");

        // well-formed partition: three entities, one value of each property
        assert_eq!(families.len(), 3);
        for family in &families {
            assert_eq!(family.members().len(), 2);
        }
        let mut all: Vec<_> = families
            .iter()
            .flat_map(|family| family.members().iter().copied())
            .collect();
        all.sort_unstable();
        assert_eq!(all, (0..6).collect::<Vec<_>>());

        // the very first round stalls with nothing known, so this must guess
        assert!(stats.guesses >= 1);
    }

    #[test]
    fn three_properties_exercise_transitivity() {
        let universe = Universe::new(vec![
            vec!["1", "2", "3"],
            vec!["a", "b", "c"],
            vec!["x", "y", "z"],
        ])
        .unwrap();
        let constraints = vec![
            Constraint::direct(&universe, &"a", &"1").unwrap(),
            Constraint::direct(&universe, &"b", &"2").unwrap(),
            Constraint::direct(&universe, &"x", &"a").unwrap(),
            Constraint::direct(&universe, &"y", &"b").unwrap(),
        ];

        let (families, stats) = SolverEngine::default()
            .solve(&universe, &constraints)
            .unwrap();
        assert_eq!(
            family_names(&families.unwrap(), &universe),
            vec![
                vec!["1", "a", "x"],
                vec!["2", "b", "y"],
                vec!["3", "c", "z"]
            ]
        );
        assert_eq!(stats.guesses, 0);
    }

    struct Recording(Rc<RefCell<Vec<(String, usize, usize)>>>);

    impl ProgressObserver for Recording {
        fn on_pass(&self, event: &PassEvent<'_>) {
            self.0
                .borrow_mut()
                .push((event.pass.to_string(), event.pairs_known, event.pairs_total));
        }
    }

    #[test]
    fn the_observer_hears_every_pass() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let engine: SolverEngine<&'static str> = SolverEngine::new(
            Box::new(FirstUnknownGuess),
            Box::new(Recording(events.clone())),
        );

        let universe = positions_and_names();
        let constraints = lineup_constraints(&universe);
        engine.solve(&universe, &constraints).unwrap();

        let events = events.borrow();
        assert!(!events.is_empty());
        // each round reports the four passes in order
        let names: Vec<&str> = events.iter().take(4).map(|(n, _, _)| n.as_str()).collect();
        assert_eq!(
            names,
            vec!["collapse", "exclusion", "elimination", "transitivity"]
        );
        for (_, known, total) in events.iter() {
            assert!(known <= total);
            assert_eq!(*total, 9);
        }
    }
}
