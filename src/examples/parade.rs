//! A small parade lineup puzzle.

use crate::puzzle::{ConstraintDefinition, PuzzleDefinition};

/// Three marchers, three positions, three instruments.
///
/// Clues: ada and ben march next to each other, ben steps off immediately
/// before cleo, the drummer leads the parade, and cleo carries the tuba.
pub fn parade_lineup() -> PuzzleDefinition {
    PuzzleDefinition {
        properties: vec![
            vec!["1".into(), "2".into(), "3".into()],
            vec!["ada".into(), "ben".into(), "cleo".into()],
            vec!["drum".into(), "flute".into(), "tuba".into()],
        ],
        constraints: vec![
            // ada and ben are positional neighbors
            ConstraintDefinition::Variable {
                a: "ada".into(),
                b: "ben".into(),
                options: vec![
                    ("1".into(), "2".into()),
                    ("2".into(), "1".into()),
                    ("2".into(), "3".into()),
                    ("3".into(), "2".into()),
                ],
            },
            // ben immediately precedes cleo
            ConstraintDefinition::Variable {
                a: "ben".into(),
                b: "cleo".into(),
                options: vec![("1".into(), "2".into()), ("2".into(), "3".into())],
            },
            ConstraintDefinition::Direct {
                a: "drum".into(),
                b: "1".into(),
            },
            ConstraintDefinition::Direct {
                a: "cleo".into(),
                b: "tuba".into(),
            },
        ],
    }
}
