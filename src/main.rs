//! # Hoptable CLI
//!
//! Command-line caller around the hoptable library. Takes an edge list on
//! the command line and either emits the full distance table as JSON or
//! answers a single source/destination query:
//!   hoptable table "BRU->AMS,AMS->CDG" --pretty
//!   hoptable distance "BRU->AMS,AMS->CDG" --from BRU --to CDG

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::error;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use hoptable::solve::INFINITY;
use hoptable::{build_distance_table, parse_edge_list, shortest_distances};

#[derive(Parser)]
#[command(name = "hoptable")]
#[command(about = "All-pairs shortest-distance tables for directed city graphs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the full distance table from an edge list
    Table {
        /// Edge list, e.g. "BRU->AMS,AMS->CDG"
        edges: String,
        /// Output JSON file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Shortest distance between two vertices
    Distance {
        /// Edge list, e.g. "BRU->AMS,AMS->CDG"
        edges: String,
        /// Start vertex
        #[arg(long)]
        from: String,
        /// Destination vertex
        #[arg(long)]
        to: String,
    },
}

fn main() {
    // Logging goes to stderr so stdout stays clean for JSON output
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = run() {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Table {
            edges,
            output,
            pretty,
        } => table_command(&edges, output.as_deref(), pretty),
        Commands::Distance { edges, from, to } => distance_command(&edges, &from, &to),
    }
}

fn table_command(edges: &str, output: Option<&Path>, pretty: bool) -> Result<()> {
    if edges.is_empty() {
        bail!("edge list is empty: expected at least one 'source->destination' edge");
    }

    let start = Instant::now();
    let graph = parse_edge_list(edges)?;
    eprintln!(
        "Parsed {} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let solve_start = Instant::now();
    let records = build_distance_table(&graph)?;
    eprintln!(
        "Computed {} records in {:.2}s",
        records.len(),
        solve_start.elapsed().as_secs_f64()
    );

    let json = if pretty {
        serde_json::to_string_pretty(&records)?
    } else {
        serde_json::to_string(&records)?
    };

    match output {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!(
                "✓ Table written to {} ({:.2}s total)",
                path.display(),
                start.elapsed().as_secs_f64()
            );
        }
        None => println!("{json}"),
    }

    Ok(())
}

fn distance_command(edges: &str, from: &str, to: &str) -> Result<()> {
    if edges.is_empty() {
        bail!("edge list is empty: expected at least one 'source->destination' edge");
    }

    let graph = parse_edge_list(edges)?;
    let destination = graph
        .index_of(to)
        .with_context(|| format!("destination vertex '{to}' is not in the graph"))?;

    let start = Instant::now();
    let distances = shortest_distances(&graph, from)?;
    eprintln!(
        "Solved {} vertices in {:.3}s",
        graph.vertex_count(),
        start.elapsed().as_secs_f64()
    );

    match distances[destination as usize] {
        INFINITY => println!("{from} -> {to}: unreachable"),
        distance => println!("{from} -> {to}: {distance}"),
    }

    Ok(())
}
