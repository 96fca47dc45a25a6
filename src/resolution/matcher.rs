//! Location resolution against the wage table.
//!
//! The table is scanned country by country in declaration order. Within a
//! country each state's cities are checked before that state's own name,
//! and the country's name is only checked after all of its states. The
//! first match wins, so a state name in an earlier country beats a city of
//! the same name in a later one.

use crate::models::{LocationQuery, MatchLevel, WageMatch, WageTable};

use super::average::mean_wage;

/// Resolves a location query to a wage.
///
/// Returns `None` when no city, state or country name matches the query's
/// token. Names are compared case-insensitively.
///
/// # Examples
///
/// ```
/// use wage_estimator::config::WageTableLoader;
/// use wage_estimator::models::{LocationQuery, MatchLevel};
/// use wage_estimator::resolution::resolve;
///
/// let table = WageTableLoader::builtin().unwrap();
/// let query = LocationQuery::parse("austin, Texas").unwrap();
/// let found = resolve(&table, &query).unwrap();
/// assert_eq!(found.level, MatchLevel::City);
/// assert_eq!(found.name, "Austin");
/// ```
pub fn resolve(table: &WageTable, query: &LocationQuery) -> Option<WageMatch> {
    resolve_token(table, query.token())
}

/// Resolves a bare token (already trimmed, first segment only).
pub fn resolve_token(table: &WageTable, token: &str) -> Option<WageMatch> {
    let needle = token.to_lowercase();
    let matches = |name: &str| name.to_lowercase() == needle;

    for country in table.countries() {
        for state in &country.states {
            if let Some(city) = state.cities.iter().find(|city| matches(city.name.as_str())) {
                return Some(WageMatch {
                    level: MatchLevel::City,
                    name: city.name.clone(),
                    hourly_wage: city.hourly,
                    wage_count: 1,
                });
            }

            if matches(state.name.as_str()) {
                if let Some(average) = mean_wage(state.wages()) {
                    return Some(WageMatch {
                        level: MatchLevel::State,
                        name: state.name.clone(),
                        hourly_wage: average.mean,
                        wage_count: average.count,
                    });
                }
            }
        }

        if matches(country.name.as_str()) {
            if let Some(average) = mean_wage(country.wages()) {
                return Some(WageMatch {
                    level: MatchLevel::Country,
                    name: country.name.clone(),
                    hourly_wage: average.mean,
                    wage_count: average.count,
                });
            }
        }
    }

    None
}
