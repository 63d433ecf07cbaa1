// Energy unit conversion routed through Hartree as the canonical unit.
// Parser -> Canonicalizer (to_hartree) -> Expander (from_hartree) -> formatter

pub mod constants;
pub mod converter;
pub mod error;
pub mod formatter;
pub mod parser;
pub mod types;


pub use converter::{convert, from_hartree, to_hartree};
pub use error::EnergyError;
pub use formatter::{format_significant, render_report, OutputFormat, ReportOptions};
pub use parser::parse_quantity;
pub use types::{Quantity, Report, ReportEntry, Unit};
