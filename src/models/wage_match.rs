//! Resolution outcome model.

use rust_decimal::Decimal;
use serde::Serialize;

/// The table level a location matched at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchLevel {
    /// An exact city; the wage is that city's figure.
    City,
    /// A state or province; the wage is the mean of its cities.
    State,
    /// A country; the wage is the mean of every city in it.
    Country,
}

impl std::fmt::Display for MatchLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchLevel::City => write!(f, "city"),
            MatchLevel::State => write!(f, "state"),
            MatchLevel::Country => write!(f, "country"),
        }
    }
}

/// A successful resolution of a location against the wage table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WageMatch {
    /// The level the location matched at.
    pub level: MatchLevel,
    /// The table name that matched, in its declared casing.
    pub name: String,
    /// The resolved hourly wage in USD.
    pub hourly_wage: Decimal,
    /// How many leaf wages contributed (1 for a city match).
    pub wage_count: usize,
}

impl WageMatch {
    /// Returns true if the wage is an average rather than one city's figure.
    pub fn is_average(&self) -> bool {
        self.level != MatchLevel::City
    }
}
