use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EnergyError {
    /// Value or unit could not be extracted from the input
    #[error("Could not parse value and units from '{0}'")]
    ParseError(String),

    #[error("Unsupported units: {0}")]
    UnsupportedUnit(String),
}
