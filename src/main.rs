mod error;
mod io;
mod model;
mod simulation;

use crate::error::{CalcResult, InventoryError};
use crate::io::{input, reporting};
use crate::simulation::config::{CalendarConfig, ProductCatalog};
use crate::simulation::engine::{self, ProductRun};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "fish-eoq [--params FILE] [--out DIR] [--weeks N] \
                     [--days-per-week N] [--weeks-per-year N]";

/// Command line options.
#[derive(Debug, Clone, PartialEq)]
struct Args {
    params: Option<PathBuf>,
    out_dir: PathBuf,
    calendar: CalendarConfig,
}

impl Args {
    fn parse<I: IntoIterator<Item = String>>(args: I) -> CalcResult<Self> {
        let mut parsed = Args {
            params: None,
            out_dir: PathBuf::from("."),
            calendar: CalendarConfig::default(),
        };

        let mut iter = args.into_iter();
        while let Some(flag) = iter.next() {
            let mut value = || {
                iter.next()
                    .ok_or_else(|| InventoryError::usage(format!("{flag} needs a value")))
            };
            match flag.as_str() {
                "--params" => parsed.params = Some(PathBuf::from(value()?)),
                "--out" => parsed.out_dir = PathBuf::from(value()?),
                "--weeks" => parsed.calendar.week_count = parse_number(&flag, &value()?)?,
                "--days-per-week" => {
                    parsed.calendar.days_per_week = parse_number(&flag, &value()?)?
                }
                "--weeks-per-year" => {
                    parsed.calendar.weeks_per_year = parse_number(&flag, &value()?)?
                }
                other => return Err(InventoryError::usage(format!("unknown flag '{other}'"))),
            }
        }

        parsed.calendar.validate()?;
        Ok(parsed)
    }
}

fn parse_number<T: std::str::FromStr>(flag: &str, raw: &str) -> CalcResult<T> {
    raw.parse()
        .map_err(|_| InventoryError::usage(format!("{flag} expects a whole number, got '{raw}'")))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(args: &Args) -> CalcResult<Vec<ProductRun>> {
    // 1. LOAD INPUTS
    let catalog = match &args.params {
        Some(path) => {
            info!(path = %path.display(), "reading product parameters");
            input::read_product_parameters(path, &args.calendar)?
        }
        None => {
            info!("no parameter file given, using demo inputs");
            ProductCatalog::demo(&args.calendar)
        }
    };

    // 2. COMPUTE
    let runs = engine::run_catalog(&catalog, &args.calendar);

    // 3. EXPORT CHART AND TABLE DATA
    std::fs::create_dir_all(&args.out_dir)?;
    reporting::write_results(&args.out_dir.join("eoq_results.csv"), &runs)?;
    reporting::write_stock_series(
        &args.out_dir.join("weekly_stock.csv"),
        &engine::stock_records(&runs),
    )?;
    reporting::write_cost_shares(
        &args.out_dir.join("cost_shares.csv"),
        &engine::cost_shares(&runs),
    )?;

    Ok(runs)
}

fn main() -> ExitCode {
    init_tracing();

    let args = match Args::parse(env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    println!("=== EOQ & Reorder Point Calculator ===");
    match run(&args) {
        Ok(runs) => {
            print!("{}", reporting::render_table(&runs));
            println!("\nResults written to {}", args.out_dir.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "run failed");
            ExitCode::FAILURE
        }
    }
}
