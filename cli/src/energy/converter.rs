use crate::energy::constants::{
    EV_TO_NM, HARTREE_TO_CM, HARTREE_TO_EV, HARTREE_TO_KCAL, HARTREE_TO_KJ,
};
use crate::energy::error::EnergyError;
use crate::energy::parser::parse_quantity;
use crate::energy::types::{Report, ReportEntry, Unit};

/// Convert a magnitude in `unit` to Hartree.
///
/// Wavelengths go through eV first (E = hc/λ). A zero wavelength gives an
/// infinite energy rather than an error.
pub fn to_hartree(magnitude: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Hartree => magnitude,
        Unit::ElectronVolt => magnitude / HARTREE_TO_EV,
        Unit::Wavenumber => magnitude / HARTREE_TO_CM,
        Unit::KjPerMol => magnitude / HARTREE_TO_KJ,
        Unit::KcalPerMol => magnitude / HARTREE_TO_KCAL,
        Unit::Nanometre => {
            let ev = EV_TO_NM / magnitude;
            ev / HARTREE_TO_EV
        }
    }
}

/// Express a Hartree value in every supported unit
pub fn from_hartree(hartree: f64) -> Report {
    let ev = hartree * HARTREE_TO_EV;

    let entries = Unit::ALL
        .iter()
        .map(|&unit| {
            let value = match unit {
                Unit::Hartree => hartree,
                Unit::ElectronVolt => ev,
                Unit::Wavenumber => hartree * HARTREE_TO_CM,
                Unit::KjPerMol => hartree * HARTREE_TO_KJ,
                Unit::KcalPerMol => hartree * HARTREE_TO_KCAL,
                // Zero energy has an infinite wavelength
                Unit::Nanometre if ev == 0.0 => f64::INFINITY,
                Unit::Nanometre => EV_TO_NM / ev,
            };
            ReportEntry { unit, value }
        })
        .collect();

    Report::from_entries(entries)
}

/// Parse the command-line value (and optional units) and expand it into a full report
pub fn convert(value: &str, units: Option<&str>) -> Result<Report, EnergyError> {
    let quantity = parse_quantity(value, units)?;
    let hartree = quantity.to_hartree()?;
    Ok(from_hartree(hartree))
}
