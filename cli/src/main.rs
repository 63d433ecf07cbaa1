use clap::Parser;
use econv::energy::{self, OutputFormat, ReportOptions};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "e")]
#[command(about = "Simple Energy Converter", long_about = None)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Energy value and units (e.g. "2 h", "100cm", "7kJ/mol")
    value: String,

    /// Units (optional if given in value): h, ev, eV, cm, kJ/mol, kcal/mol, nm
    units: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Significant digits in text output
    #[arg(short, long, default_value_t = 12, value_parser = clap::value_parser!(u8).range(1..=17))]
    precision: u8,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let options = ReportOptions {
        format: cli.format,
        precision: cli.precision as usize,
    };

    match run(&cli.value, cli.units.as_deref(), &options) {
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(
    value: &str,
    units: Option<&str>,
    options: &ReportOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = energy::convert(value, units)?;
    print!("{}", energy::render_report(&report, options)?);
    if options.format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

/// Diagnostics go to stderr; RUST_LOG, when it names a level, overrides -v
fn init_logging(verbose: u8) {
    let from_flags = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(from_flags);

    FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
