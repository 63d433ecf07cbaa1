use crate::energy::types::Report;
use clap::ValueEnum;

/// Width of the unit label column in text output
const LABEL_WIDTH: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One "label: value" line per unit
    #[default]
    Text,
    /// JSON array of {unit, value} objects
    Json,
}

/// How a report is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub format: OutputFormat,
    /// Significant digits in text output
    pub precision: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            precision: 12,
        }
    }
}

/// Render a report in the requested format
pub fn render_report(report: &Report, options: &ReportOptions) -> Result<String, serde_json::Error> {
    match options.format {
        OutputFormat::Text => Ok(render_text(report, options.precision)),
        OutputFormat::Json => serde_json::to_string_pretty(report),
    }
}

fn render_text(report: &Report, precision: usize) -> String {
    report
        .entries()
        .iter()
        .map(|entry| {
            format!(
                "{:<width$}: {}\n",
                entry.unit.label(),
                format_significant(entry.value, precision),
                width = LABEL_WIDTH
            )
        })
        .collect()
}

/// Format a float with at most `digits` significant digits, like C's `%.Ng`.
///
/// Fixed notation is used when the decimal exponent lies in `-4..digits`,
/// scientific otherwise. Trailing zeros are dropped in both.
pub fn format_significant(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let digits = digits.max(1);

    // Rounding to `digits` first decides the exponent, e.g. 9.9999999999999 -> 1e1
    let scientific = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (digits as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
