//! Team identification.
//!
//! Every unit on the board belongs to a team; attack legality requires
//! the attacker and defender to be on different teams. Team ids are
//! opaque 0-based indices.

use serde::{Deserialize, Serialize};

/// Team identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Team(pub u8);

impl Team {
    /// Create a team ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw team index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Team {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team() {
        assert_eq!(Team::new(1).index(), 1);
        assert_ne!(Team::new(0), Team::new(1));
        assert_eq!(format!("{}", Team::new(2)), "Team 2");
    }
}
