//! Command-line entry point: order the clients of a JSON export into a route.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use client_routing::client::{load_clients, locate_records};
use client_routing::config::Config;
use client_routing::utils::{render_route, save_route, write_route, RouteStatistics};
use client_routing::RouteAssembler;
use log::{info, LevelFilter};

/// Compute a short visiting order over clients, starting from the origin.
#[derive(Debug, Parser)]
#[command(name = "client-routing", version, about)]
struct Args {
    /// JSON file holding an array of client records
    input: PathBuf,

    /// Write the numbered visiting order to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the ordered records as JSON instead of a numbered list
    #[arg(long)]
    json: bool,

    /// Draw the route on a character grid
    #[arg(long)]
    plot: bool,

    /// Explicit cap on 2-opt passes
    #[arg(long)]
    max_passes: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    // RUST_LOG, when set, overrides the -v flags
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logger(args.verbose);

    info!("Loading clients from: {}", args.input.display());
    let records = load_clients(&args.input)?;

    let mut config = Config::new();
    if let Some(passes) = args.max_passes {
        config = config.with_max_passes(passes);
    }
    let assembler = RouteAssembler::new(config);

    let start_time = Instant::now();
    let located = locate_records(&records);
    let plan = assembler.plan(&located);
    let runtime = start_time.elapsed();

    let ordered: Vec<_> = plan
        .stops
        .iter()
        .filter_map(|stop| records.get(stop.id).cloned())
        .collect();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &ordered)?;
        writeln!(out)?;
    } else {
        write_route(&ordered, &mut out)?;
    }

    if args.plot {
        let points: Vec<_> = plan.stops.iter().map(|stop| stop.point).collect();
        eprint!("{}", render_route(&points, 80, 25));
    }

    info!("{}", RouteStatistics::from_plan(&plan, runtime).format());

    if let Some(path) = &args.output {
        info!("Saving route to: {}", path.display());
        save_route(&ordered, path)?;
    }

    Ok(())
}
