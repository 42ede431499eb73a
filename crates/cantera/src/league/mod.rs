//! League management for the Cantera scoring engine.
//!
//! Provides the registry of clubs covered by the cleaned datasets and a
//! trait for iterating league membership.

pub mod clubs;

pub use clubs::{Club, LaLiga};

/// Trait for club leagues.
pub trait League {
    /// Get all club names in the league.
    fn names(&self) -> Vec<String>;

    /// Check if a club is in the league.
    fn contains(&self, club: &str) -> bool {
        self.names().contains(&club.to_string())
    }

    /// Get the number of clubs.
    fn size(&self) -> usize {
        self.names().len()
    }
}

impl League for LaLiga {
    fn names(&self) -> Vec<String> {
        self.names()
    }
}
