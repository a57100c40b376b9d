//! rwloc: command-line interface for rwloc-core
//!
//! Inspects the bundled Rwanda location dataset from your terminal: level
//! statistics, province lookups, filtered listings for every level, the full
//! path of a village, free-text search and multi-field queries.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ rwloc stats
//!
//! - Lookup a province by code or name
//!   $ rwloc province 1
//!   $ rwloc province kigali
//!
//! - List the sectors of one district, as JSON
//!   $ rwloc --json sectors --district 101
//!
//! - Show where a village sits
//!   $ rwloc village 101010102
//!
//! - Search every name level
//!   $ rwloc search gihanga --limit 5
//!
//! Data source
//! -----------
//!
//! By default the CLI loads `locations.json` bundled with `rwloc-core`. Use
//! `--input <path>` to point at another dataset (`.json` or `.json.gz`) and
//! `--strict` to reject inconsistent hierarchies at load time. Logs go to
//! stderr and are controlled by `RUST_LOG` (default `warn`).
mod args;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use rwloc_core::{LoadOptions, LocationIndex, LocationSearch, QueryFilter, SearchOptions};
use serde::Serialize;
use std::fmt::Display;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<ExitCode> {
    init_logging();
    let args = CliArgs::parse();

    // Determine input file (default JSON inside rwloc-core)
    let input_path = args.input.unwrap_or_else(|| {
        let dir = LocationIndex::default_data_dir();
        let filename = LocationIndex::default_dataset_filename();
        dir.join(filename).to_string_lossy().to_string()
    });
    let options = LoadOptions {
        validate_hierarchy: args.strict,
    };
    debug!(input = %input_path, strict = args.strict, "Loading dataset");
    let index = LocationIndex::load_from_path(&input_path, &options)?;

    let stdout = io::stdout();
    let outcome = run(args.command, &index, args.json, &mut stdout.lock())?;
    Ok(match outcome {
        Outcome::Done => ExitCode::SUCCESS,
        Outcome::NotFound(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    })
}

/// How a command ended. Only single-entity lookups can miss; empty listings,
/// searches and queries are a normal `Done`.
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Done,
    NotFound(String),
}

fn run<W: Write>(
    command: Commands,
    index: &LocationIndex,
    json: bool,
    out: &mut W,
) -> anyhow::Result<Outcome> {
    match command {
        Commands::Stats { level } => {
            let stats = index.stats();
            match level {
                Some(level) if json => print_json(out, &stats.count(level))?,
                Some(level) => writeln!(out, "{level}: {}", stats.count(level))?,
                None if json => print_json(out, &stats)?,
                None => {
                    writeln!(out, "Dataset statistics:")?;
                    writeln!(out, "  Provinces: {}", stats.total_provinces)?;
                    writeln!(out, "  Districts: {}", stats.total_districts)?;
                    writeln!(out, "  Sectors: {}", stats.total_sectors)?;
                    writeln!(out, "  Cells: {}", stats.total_cells)?;
                    writeln!(out, "  Villages: {}", stats.total_villages)?;
                }
            }
        }

        Commands::Provinces => print_all(out, &index.provinces(), json)?,

        Commands::Province { key } => {
            let found = match key.trim().parse::<u32>() {
                Ok(code) => index.find_province_by_code(code),
                Err(_) => index.find_province_by_name(&key),
            };
            match found {
                Some(p) if json => print_json(out, &p)?,
                Some(p) => {
                    writeln!(out, "Province: {}", p.name)?;
                    writeln!(out, "Code: {}", p.code)?;
                    writeln!(out, "Districts: {}", index.districts(Some(p.code)).len())?;
                }
                None => return Ok(Outcome::NotFound(format!("No province found for: {key}"))),
            }
        }

        Commands::Districts { province } => print_all(out, &index.districts(province), json)?,

        Commands::Sectors { district, province } => {
            print_all(out, &index.sectors(district, province), json)?
        }

        Commands::Cells {
            sector,
            district,
            province,
        } => print_all(
            out,
            &index.cells(sector.as_deref(), district, province),
            json,
        )?,

        Commands::Villages {
            cell,
            sector,
            district,
            province,
        } => print_all(
            out,
            &index.villages(cell, sector.as_deref(), district, province),
            json,
        )?,

        Commands::Village { code } => {
            let path = index.full_path(code);
            match (&path.province, &path.district, &path.sector, &path.cell, &path.village) {
                (Some(p), Some(d), Some(s), Some(c), Some(v)) => {
                    if json {
                        print_json(out, &path)?;
                    } else {
                        writeln!(out, "Province: {p}")?;
                        writeln!(out, "District: {} ({})", d.name, d.code)?;
                        writeln!(out, "Sector:   {} ({})", s.name, s.code)?;
                        writeln!(out, "Cell:     {} ({})", c.name, c.code)?;
                        writeln!(out, "Village:  {} ({})", v.name, v.code)?;
                    }
                }
                _ => return Ok(Outcome::NotFound(format!("Village {code} not found"))),
            }
        }

        Commands::Search {
            term,
            case_sensitive,
            limit,
        } => {
            let options = SearchOptions {
                limit,
                ..SearchOptions::new(term.as_str()).case_sensitive(case_sensitive)
            };
            let hits = index.search(&options);
            if hits.is_empty() && !json {
                writeln!(out, "No locations found matching: {term}")?;
            } else {
                print_all(out, &hits, json)?;
            }
        }

        Commands::Query(query) => {
            let filter = QueryFilter::from(query);
            let hits = index.query(&filter);
            if hits.is_empty() && !json {
                writeln!(out, "No locations match the given filter")?;
            } else {
                print_all(out, &hits, json)?;
            }
        }
    }

    Ok(Outcome::Done)
}

/// Logs to stderr so stdout stays clean for `--json` consumers.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> anyhow::Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

fn print_all<W: Write, T: Serialize + Display>(
    out: &mut W,
    items: &[T],
    json: bool,
) -> anyhow::Result<()> {
    if json {
        return print_json(out, items);
    }
    for item in items {
        writeln!(out, "{item}")?;
    }
    Ok(())
}
