//! Wage averaging.

use rust_decimal::Decimal;

/// The arithmetic mean of a set of wages, with how many were averaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WageAverage {
    /// The mean hourly wage.
    pub mean: Decimal,
    /// The number of wages that contributed.
    pub count: usize,
}

/// Computes the arithmetic mean of the given wages.
///
/// Returns `None` for an empty set, and on decimal overflow. An empty
/// subtree therefore has no wage rather than a zero one.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use wage_estimator::resolution::mean_wage;
///
/// let wages = [Decimal::from_str("35.60").unwrap(), Decimal::from_str("34.25").unwrap()];
/// let average = mean_wage(wages).unwrap();
/// assert_eq!(average.mean, Decimal::from_str("34.925").unwrap());
/// assert_eq!(average.count, 2);
/// ```
pub fn mean_wage(wages: impl IntoIterator<Item = Decimal>) -> Option<WageAverage> {
    let mut sum = Decimal::ZERO;
    let mut count = 0usize;

    for wage in wages {
        sum = sum.checked_add(wage)?;
        count += 1;
    }

    if count == 0 {
        return None;
    }

    let mean = sum.checked_div(Decimal::from(count))?;
    Some(WageAverage { mean, count })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_mean_of_single_wage_is_that_wage() {
        let average = mean_wage([dec("39.25")]).unwrap();
        assert_eq!(average.mean, dec("39.25"));
        assert_eq!(average.count, 1);
    }

    #[test]
    fn test_mean_of_two_wages() {
        let average = mean_wage([dec("35.60"), dec("34.25")]).unwrap();
        assert_eq!(average.mean, dec("34.925"));
    }

    #[test]
    fn test_mean_of_five_wages() {
        let wages = [
            dec("35.20"),
            dec("33.75"),
            dec("36.50"),
            dec("38.90"),
            dec("35.40"),
        ];
        let average = mean_wage(wages).unwrap();
        assert_eq!(average.mean, dec("35.95"));
        assert_eq!(average.count, 5);
    }

    #[test]
    fn test_mean_of_empty_set_is_none() {
        assert_eq!(mean_wage(std::iter::empty()), None);
    }

    #[test]
    fn test_mean_with_zero_wages() {
        let average = mean_wage([Decimal::ZERO, dec("10")]).unwrap();
        assert_eq!(average.mean, dec("5"));
    }
}
