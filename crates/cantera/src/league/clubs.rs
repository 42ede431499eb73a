//! LaLiga club registry covering the 2019-2026 analysis window.

use std::collections::HashMap;

/// A club with its short code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Club {
    /// Full club name, as used in the metric tables.
    pub name: String,
    /// Three-letter short code.
    pub code: String,
}

impl Club {
    /// Create a new club entry.
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }
}

/// Every club that appeared in LaLiga between the 2019-20 and 2025-26
/// seasons.
#[derive(Debug, Clone)]
pub struct LaLiga {
    clubs: Vec<Club>,
    code_to_name: HashMap<String, String>,
}

impl LaLiga {
    /// Create the registry with the default club list.
    pub fn new() -> Self {
        let clubs = Self::default_clubs();
        let code_to_name = clubs
            .iter()
            .map(|c| (c.code.clone(), c.name.clone()))
            .collect();

        Self {
            clubs,
            code_to_name,
        }
    }

    /// All clubs.
    pub fn clubs(&self) -> &[Club] {
        &self.clubs
    }

    /// All club names.
    pub fn names(&self) -> Vec<String> {
        self.clubs.iter().map(|c| c.name.clone()).collect()
    }

    /// Resolve a short code to a club name.
    pub fn name_for_code(&self, code: &str) -> Option<&str> {
        self.code_to_name.get(code).map(String::as_str)
    }

    /// Look up a club by name.
    pub fn club(&self, name: &str) -> Option<&Club> {
        self.clubs.iter().find(|c| c.name == name)
    }

    fn default_clubs() -> Vec<Club> {
        vec![
            Club::new("Real Madrid", "RMA"),
            Club::new("Barcelona", "FCB"),
            Club::new("Atletico Madrid", "ATM"),
            Club::new("Sevilla", "SEV"),
            Club::new("Real Sociedad", "RSO"),
            Club::new("Real Betis", "BET"),
            Club::new("Villarreal", "VIL"),
            Club::new("Athletic Club", "ATH"),
            Club::new("Valencia", "VAL"),
            Club::new("Celta Vigo", "CEL"),
            Club::new("Osasuna", "OSA"),
            Club::new("Getafe", "GET"),
            Club::new("Granada", "GRA"),
            Club::new("Levante", "LEV"),
            Club::new("Real Valladolid", "VLL"),
            Club::new("Eibar", "EIB"),
            Club::new("Alaves", "ALA"),
            Club::new("Mallorca", "MLL"),
            Club::new("Leganes", "LEG"),
            Club::new("Espanyol", "ESP"),
            Club::new("Cadiz", "CAD"),
            Club::new("Huesca", "HUE"),
            Club::new("Elche", "ELC"),
            Club::new("Rayo Vallecano", "RAY"),
            Club::new("Almeria", "ALM"),
            Club::new("Girona", "GIR"),
            Club::new("Las Palmas", "LPA"),
            Club::new("Real Oviedo", "OVI"),
        ]
    }
}

impl Default for LaLiga {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_contents() {
        let league = LaLiga::new();
        assert!(league.clubs().len() >= 20);
        assert!(league.club("Real Madrid").is_some());
        assert!(league.club("Chelsea").is_none());
    }

    #[test]
    fn test_code_lookup() {
        let league = LaLiga::new();
        assert_eq!(league.name_for_code("GIR"), Some("Girona"));
        assert_eq!(league.name_for_code("XXX"), None);
    }

    #[test]
    fn test_codes_are_unique() {
        let league = LaLiga::new();
        assert_eq!(league.code_to_name.len(), league.clubs().len());
    }
}
