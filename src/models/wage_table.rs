//! The wage table model.
//!
//! A [`WageTable`] is an ordered three-level tree of countries, states and
//! cities. Declaration order is significant: resolution scans the tree in
//! that order and the first structural match wins.

use std::collections::HashSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EstimatorError, EstimatorResult};

/// The only currency wage tables are quoted in.
pub const USD: &str = "USD";

/// A city and its hourly wage. This is a leaf of the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    /// Human-readable city name (e.g. "San Francisco").
    pub name: String,
    /// Hourly wage in USD.
    pub hourly: Decimal,
}

/// A state or province and its cities, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    /// Human-readable state name (e.g. "California").
    pub name: String,
    /// The cities listed under this state.
    pub cities: Vec<City>,
}

/// A country and its states, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// Human-readable country name or code (e.g. "US").
    pub name: String,
    /// The states listed under this country.
    pub states: Vec<State>,
}

impl City {
    /// Creates a new city entry.
    pub fn new(name: impl Into<String>, hourly: Decimal) -> Self {
        Self {
            name: name.into(),
            hourly,
        }
    }
}

impl State {
    /// Creates a new state with the given cities.
    pub fn new(name: impl Into<String>, cities: Vec<City>) -> Self {
        Self {
            name: name.into(),
            cities,
        }
    }

    /// Returns the hourly wages of every city in this state.
    pub fn wages(&self) -> impl Iterator<Item = Decimal> + '_ {
        self.cities.iter().map(|city| city.hourly)
    }
}

impl Country {
    /// Creates a new country with the given states.
    pub fn new(name: impl Into<String>, states: Vec<State>) -> Self {
        Self {
            name: name.into(),
            states,
        }
    }

    /// Returns the hourly wages of every city in every state of this country.
    pub fn wages(&self) -> impl Iterator<Item = Decimal> + '_ {
        self.states.iter().flat_map(State::wages)
    }
}

/// The immutable Country → State → City → wage table.
///
/// A table is built once at startup and shared read-only between requests.
/// [`WageTable::new`] enforces the structural invariants:
///
/// - at least one country
/// - no country without states and no state without cities
/// - names unique within their immediate parent (case-insensitive)
/// - every wage non-negative
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WageTable {
    effective_date: NaiveDate,
    countries: Vec<Country>,
}

impl WageTable {
    /// Builds a validated wage table.
    ///
    /// # Errors
    ///
    /// Returns [`EstimatorError::InvalidTable`] if any invariant is broken.
    pub fn new(effective_date: NaiveDate, countries: Vec<Country>) -> EstimatorResult<Self> {
        if countries.is_empty() {
            return Err(invalid("table has no countries"));
        }

        ensure_unique("country", "table", countries.iter().map(|c| c.name.as_str()))?;

        for country in &countries {
            if country.states.is_empty() {
                return Err(invalid(format!("country '{}' has no states", country.name)));
            }
            ensure_unique(
                "state",
                &country.name,
                country.states.iter().map(|s| s.name.as_str()),
            )?;

            for state in &country.states {
                if state.cities.is_empty() {
                    return Err(invalid(format!(
                        "state '{}' in '{}' has no cities",
                        state.name, country.name
                    )));
                }
                ensure_unique(
                    "city",
                    &state.name,
                    state.cities.iter().map(|c| c.name.as_str()),
                )?;

                if let Some(city) = state.cities.iter().find(|c| c.hourly < Decimal::ZERO) {
                    return Err(invalid(format!(
                        "city '{}' has a negative wage: {}",
                        city.name, city.hourly
                    )));
                }
            }
        }

        Ok(Self {
            effective_date,
            countries,
        })
    }

    /// Returns the date the wage figures take effect.
    pub fn effective_date(&self) -> NaiveDate {
        self.effective_date
    }

    /// Returns the currency every wage is quoted in.
    pub fn currency(&self) -> &'static str {
        USD
    }

    /// Returns the countries in declaration order.
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// Returns every state, paired with its country, in scan order.
    pub fn states(&self) -> impl Iterator<Item = (&Country, &State)> {
        self.countries
            .iter()
            .flat_map(|country| country.states.iter().map(move |state| (country, state)))
    }

    /// Returns every city, paired with its country and state, in scan order.
    pub fn cities(&self) -> impl Iterator<Item = (&Country, &State, &City)> {
        self.states()
            .flat_map(|(country, state)| state.cities.iter().map(move |city| (country, state, city)))
    }

    /// Returns the number of leaf wages in the table.
    pub fn leaf_count(&self) -> usize {
        self.cities().count()
    }
}

fn invalid(message: impl Into<String>) -> EstimatorError {
    EstimatorError::InvalidTable {
        message: message.into(),
    }
}

fn ensure_unique<'a>(
    kind: &str,
    parent: &str,
    names: impl Iterator<Item = &'a str>,
) -> EstimatorResult<()> {
    let mut seen = HashSet::new();
    for name in names {
        if name.trim().is_empty() {
            return Err(invalid(format!("{} in '{}' has an empty name", kind, parent)));
        }
        if !seen.insert(name.to_lowercase()) {
            return Err(invalid(format!(
                "duplicate {} '{}' in '{}'",
                kind, name, parent
            )));
        }
    }
    Ok(())
}
