//! Wage table file types.
//!
//! This module contains the strongly-typed structures that are
//! deserialized from wage table YAML files. They mirror the file layout
//! and are converted into [`crate::models`] types once validated.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{City, Country, State};

/// A wage table file.
#[derive(Debug, Clone, Deserialize)]
pub struct WageTableFile {
    /// The date the wage figures take effect.
    pub effective_date: NaiveDate,
    /// The currency wages are quoted in. Only "USD" is accepted.
    pub currency: String,
    /// Countries, in scan order.
    pub countries: Vec<CountryEntry>,
}

/// A country entry in a wage table file.
#[derive(Debug, Clone, Deserialize)]
pub struct CountryEntry {
    /// The country name or code.
    pub name: String,
    /// States, in scan order.
    pub states: Vec<StateEntry>,
}

/// A state or province entry in a wage table file.
#[derive(Debug, Clone, Deserialize)]
pub struct StateEntry {
    /// The state name.
    pub name: String,
    /// Cities, in scan order.
    pub cities: Vec<CityEntry>,
}

/// A city entry in a wage table file.
#[derive(Debug, Clone, Deserialize)]
pub struct CityEntry {
    /// The city name.
    pub name: String,
    /// The hourly wage.
    pub hourly: Decimal,
}

impl From<CountryEntry> for Country {
    fn from(entry: CountryEntry) -> Self {
        Country::new(
            entry.name,
            entry.states.into_iter().map(Into::into).collect(),
        )
    }
}

impl From<StateEntry> for State {
    fn from(entry: StateEntry) -> Self {
        State::new(
            entry.name,
            entry.cities.into_iter().map(Into::into).collect(),
        )
    }
}

impl From<CityEntry> for City {
    fn from(entry: CityEntry) -> Self {
        City::new(entry.name, entry.hourly)
    }
}
