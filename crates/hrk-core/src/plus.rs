// League-relative "plus" stats (100 = league average).

use crate::error::PlusStatError;

/// Arithmetic mean of `values`.
///
/// An empty universe has no average; this returns `UndefinedAverage`
/// rather than 0 or NaN.
pub fn mean(values: &[f64]) -> Result<f64, PlusStatError> {
    if values.is_empty() {
        return Err(PlusStatError::UndefinedAverage);
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// League average of `rate_a - rate_b` across the universe, e.g. K% - BB%.
pub fn league_average(universe: &[(f64, f64)]) -> Result<f64, PlusStatError> {
    let deltas: Vec<f64> = universe.iter().map(|(a, b)| a - b).collect();
    mean(&deltas)
}

/// Express an individual delta as a rounded percentage of the league
/// average: `round(delta / average * 100)`.
pub fn plus_stat(individual_delta: f64, league_average: f64) -> Result<i64, PlusStatError> {
    if league_average == 0.0 {
        return Err(PlusStatError::ZeroAverage);
    }
    Ok((individual_delta / league_average * 100.0).round() as i64)
}

/// `plus_stat` against a league average that may itself be undefined.
pub fn plus_against(
    individual_delta: f64,
    league_average: Result<f64, PlusStatError>,
) -> Result<i64, PlusStatError> {
    plus_stat(individual_delta, league_average?)
}
