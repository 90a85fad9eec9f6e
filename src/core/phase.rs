//! Turn phases.
//!
//! A turn cycles through four phases with no terminal state:
//! `Draw -> Main -> Combat -> End -> Draw -> ...`. The board drives
//! the cycle and performs the per-phase bookkeeping; this module only
//! defines the cycle itself.

use serde::{Deserialize, Serialize};

/// One of the four phases of a turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Draw,
    Main,
    Combat,
    End,
}

impl Phase {
    /// All phases in cycle order.
    pub const ALL: [Phase; 4] = [Phase::Draw, Phase::Main, Phase::Combat, Phase::End];

    /// The phase that follows this one, wrapping from `End` to `Draw`.
    #[must_use]
    pub const fn next(self) -> Phase {
        match self {
            Phase::Draw => Phase::Main,
            Phase::Main => Phase::Combat,
            Phase::Combat => Phase::End,
            Phase::End => Phase::Draw,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Draw => "Draw",
            Phase::Main => "Main",
            Phase::Combat => "Combat",
            Phase::End => "End",
        };
        write!(f, "{name}")
    }
}
