mod report;

use anyhow::Context;
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;
use witness_parser::parse_solver_output;
use witness_protocol::CheckKind;
use witness_solver::{GridGraph, PathValidator};

use crate::report::AnswerReport;

#[derive(Parser)]
#[command(author, version, about = "Checks clingo grid-path answer sets")]
struct Cli {
    /// Saved clingo output
    #[arg(value_name = "FILE")]
    input: PathBuf,

    #[arg(long, default_value_t = 3)]
    rows: u32,

    #[arg(long, default_value_t = 3)]
    cols: u32,

    /// Also require the path to visit every grid cell
    #[arg(long)]
    completeness: bool,

    /// Emit a JSON array instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let grid = GridGraph::with_dimensions(cli.rows, cli.cols)?;
    let mut validator = PathValidator::new(&grid);
    if cli.completeness {
        validator = validator.with_check(CheckKind::Completeness);
    }

    info!(file = ?cli.input, grid = %grid.spec(), "reading solver output");
    let text = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    let results = parse_solver_output(&text)
        .with_context(|| format!("failed to parse {}", cli.input.display()))?;

    let reports: Vec<AnswerReport> = results
        .iter()
        .map(|sr| AnswerReport::build(sr, &validator))
        .collect();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            print!("{}", report);
        }
    }

    let failing = reports.iter().filter(|r| !r.is_valid()).count();
    info!(answers = reports.len(), failing, "done");

    Ok(if failing == 0 { ExitCode::SUCCESS } else { ExitCode::from(2) })
}
