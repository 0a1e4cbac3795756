use crate::error::SimError;

/// Parses one xG token. A token must read as a float strictly between 0 and 1;
/// anything else is malformed.
pub fn parse_probability(token: &str) -> Result<f64, SimError> {
    let trimmed = token.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| SimError::MalformedProbabilityString(trimmed.to_string()))?;
    if !(0.0 < value && value < 1.0) {
        return Err(SimError::MalformedProbabilityString(trimmed.to_string()));
    }
    Ok(value)
}

/// Converts a comma-separated xG string into a probability list, silently
/// dropping malformed and out-of-range entries (a trailing comma leaves an
/// empty token, which is dropped like any other bad one). The result may be
/// empty; the simulator treats that as a shotless team, not an error.
pub fn xg_to_values(raw: &str) -> Vec<f64> {
    raw.split(',')
        .filter_map(|token| parse_probability(token).ok())
        .collect()
}
