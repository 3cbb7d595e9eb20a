// Builtin demo scenarios
//
// Two sets of the same three runs, one per undoable variant. The only
// difference is the direct overwrite in the third run, which the delegated
// variant has no way to express.

use crate::scenario::types::{Scenario, Step, Variant};

fn set(value: i32, author: &str) -> Step {
    Step::Set {
        value,
        author: author.into(),
    }
}

fn magic(author: &str) -> Step {
    Step::Magic {
        author: author.into(),
    }
}

fn plain() -> Scenario {
    Scenario::new(
        "plain state",
        Variant::Plain,
        vec![Step::Overwrite { value: 8 }, Step::Display],
    )
}

fn undo_then_magic(variant: Variant) -> Scenario {
    Scenario::new(
        "undo then magic",
        variant,
        vec![
            set(2, "player1"),
            set(4, "player2"),
            Step::Undo,
            magic("player2"),
            Step::Display,
        ],
    )
}

/// Plain state, then the extended variant including the bypass
pub fn inheritance() -> Vec<Scenario> {
    vec![
        plain(),
        undo_then_magic(Variant::Extended),
        Scenario::new(
            "overwrite then undo",
            Variant::Extended,
            vec![
                set(3, "player1"),
                set(6, "player2"),
                Step::Overwrite { value: 20 },
                Step::Undo,
                Step::Display,
            ],
        ),
    ]
}

/// Plain state, then the delegated variant where no bypass exists
pub fn delegation() -> Vec<Scenario> {
    vec![
        plain(),
        undo_then_magic(Variant::Delegated),
        Scenario::new(
            "undo without overwrite",
            Variant::Delegated,
            vec![set(3, "player1"), set(6, "player2"), Step::Undo, Step::Display],
        ),
    ]
}
