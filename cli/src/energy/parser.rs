use crate::energy::error::EnergyError;
use crate::energy::types::Quantity;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Number immediately followed by a unit tag
    /// Matches: digits with optional decimal point, optional exponent, optional whitespace,
    /// then letters or '/'
    /// Examples: "100cm", "2.5 eV", "1e-3h", "7kJ/mol"
    static ref QUANTITY_PATTERN: Regex = Regex::new(
        r"^([0-9]*\.?[0-9]+(?:[eE][-+]?[0-9]+)?)\s*([a-zA-Z/]+)$"
    ).unwrap();
}

/// Extract a magnitude and unit tag from the command-line arguments.
///
/// With `units` given (and non-empty) `value` must be a plain floating-point literal.
/// Otherwise `value` must carry its own unit, e.g. "100cm" or "7kJ/mol".
/// The unit tag is not validated here.
pub fn parse_quantity(value: &str, units: Option<&str>) -> Result<Quantity, EnergyError> {
    match units.filter(|u| !u.is_empty()) {
        Some(unit_tag) => {
            let magnitude = value
                .trim()
                .parse::<f64>()
                .map_err(|_| EnergyError::ParseError(value.to_string()))?;
            tracing::debug!(magnitude, unit = unit_tag, "parsed separate value and units");
            Ok(Quantity::new(magnitude, unit_tag))
        }
        None => parse_combined(value),
    }
}

fn parse_combined(value: &str) -> Result<Quantity, EnergyError> {
    let captures = QUANTITY_PATTERN
        .captures(value)
        .ok_or_else(|| EnergyError::ParseError(value.to_string()))?;

    let magnitude = captures[1]
        .parse::<f64>()
        .map_err(|_| EnergyError::ParseError(value.to_string()))?;
    let unit_tag = &captures[2];

    tracing::debug!(magnitude, unit = unit_tag, "parsed combined value and units");
    Ok(Quantity::new(magnitude, unit_tag))
}
