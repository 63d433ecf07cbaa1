use crate::energy::converter;
use crate::energy::error::EnergyError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The supported energy units, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Hartree,
    ElectronVolt,
    Wavenumber,
    KjPerMol,
    KcalPerMol,
    Nanometre,
}

impl Unit {
    pub const ALL: [Unit; 6] = [
        Unit::Hartree,
        Unit::ElectronVolt,
        Unit::Wavenumber,
        Unit::KjPerMol,
        Unit::KcalPerMol,
        Unit::Nanometre,
    ];

    /// Label used in the report
    pub fn label(&self) -> &'static str {
        match self {
            Unit::Hartree => "Harthree",
            Unit::ElectronVolt => "eV",
            Unit::Wavenumber => "cm-1",
            Unit::KjPerMol => "kJ/mol",
            Unit::KcalPerMol => "kcal/mol",
            Unit::Nanometre => "nm",
        }
    }

    /// Tag accepted on the command line for this unit
    pub fn tag(&self) -> &'static str {
        match self {
            Unit::Hartree => "h",
            Unit::ElectronVolt => "eV",
            Unit::Wavenumber => "cm",
            Unit::KjPerMol => "kJ/mol",
            Unit::KcalPerMol => "kcal/mol",
            Unit::Nanometre => "nm",
        }
    }
}

impl FromStr for Unit {
    type Err = EnergyError;

    // Case-sensitive; `ev` and `eV` are the only two spellings with a variant
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "h" => Ok(Unit::Hartree),
            "ev" | "eV" => Ok(Unit::ElectronVolt),
            "cm" => Ok(Unit::Wavenumber),
            "kJ/mol" => Ok(Unit::KjPerMol),
            "kcal/mol" => Ok(Unit::KcalPerMol),
            "nm" => Ok(Unit::Nanometre),
            _ => Err(EnergyError::UnsupportedUnit(s.to_string())),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A magnitude together with the unit tag exactly as the user typed it
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    pub magnitude: f64,
    pub unit_tag: String,
}

impl Quantity {
    pub fn new(magnitude: f64, unit_tag: impl Into<String>) -> Self {
        Self {
            magnitude,
            unit_tag: unit_tag.into(),
        }
    }

    /// Resolve the tag to a known unit
    pub fn unit(&self) -> Result<Unit, EnergyError> {
        self.unit_tag.parse()
    }

    /// Canonical value of this quantity in Hartree
    pub fn to_hartree(&self) -> Result<f64, EnergyError> {
        let unit = self.unit()?;
        let hartree = converter::to_hartree(self.magnitude, unit);
        tracing::debug!(magnitude = self.magnitude, %unit, hartree, "canonicalized to Hartree");
        Ok(hartree)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReportEntry {
    #[serde(serialize_with = "serialize_label")]
    pub unit: Unit,
    pub value: f64,
}

fn serialize_label<S: serde::Serializer>(unit: &Unit, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(unit.label())
}

/// One energy expressed in every supported unit.
/// Entries are kept in `Unit::ALL` order, which is also the display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Report {
    entries: Vec<ReportEntry>,
}

impl Report {
    pub(crate) fn from_entries(entries: Vec<ReportEntry>) -> Self {
        Self { entries }
    }

    pub fn get(&self, unit: Unit) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.unit == unit)
            .map(|entry| entry.value)
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
