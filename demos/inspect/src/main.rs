//! inspect — command-line driver for the bridge inspection toolkit.
//!
//! Loads an inventory CSV (see `bridge_clean::loader` for the layout) and
//! answers one query per invocation:
//!
//! ```text
//! inspect --data testdata/reference_bridges.csv route --lat 43.10 --lon -80.15 --max 3 --radius 50
//! inspect --data testdata/reference_bridges.csv near --lat 43.10 --lon -80.15 --radius 50
//! inspect --data testdata/reference_bridges.csv average --id 1 --start 2005 --stop 2013
//! ```
//!
//! Set `RUST_LOG=debug` to trace each route step.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use bridge_clean::load_bridges_csv;
use bridge_core::{
    Bridge, BridgeId, BridgeIdSet, GeoPoint, RehabKind, find_bridge_by_id, inspect_bridge,
    rehabilitate_bridge,
};
use bridge_route::{
    GreedyPlanner, RouteConfig, RoutePlanner, calculate_average_condition, find_worst_bci,
    get_bridge_condition,
};
use bridge_spatial::{BridgeIndex, find_bridges_in_radius};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(author, version, about = "Bridge inventory queries and inspection routing")]
struct Cli {
    /// Inventory CSV to load.
    #[arg(long)]
    data: PathBuf,

    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show one bridge record.
    Show {
        #[arg(long)]
        id: u32,
    },
    /// List bridges within a radius of a point.
    Near {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        /// Radius in kilometres.
        #[arg(long)]
        radius: f64,
        /// Ids to leave out.
        #[arg(long, value_delimiter = ',')]
        exclude: Vec<u32>,
    },
    /// Report the worst-condition bridge among the given ids.
    Worst {
        #[arg(long, value_delimiter = ',', required = true)]
        ids: Vec<u32>,
    },
    /// Average BCI of one bridge over an inclusive year window.
    Average {
        #[arg(long)]
        id: u32,
        #[arg(long)]
        start: i32,
        #[arg(long)]
        stop: i32,
    },
    /// Plan a greedy worst-condition inspection route.
    Route {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        /// Maximum number of bridges to visit.
        #[arg(long, default_value_t = RouteConfig::default().max_bridges)]
        max: usize,
        /// Maximum distance between consecutive stops, in kilometres.
        #[arg(long, default_value_t = RouteConfig::default().radius_km)]
        radius: f64,
    },
    /// Record an inspection, then show the updated bridge.
    Inspect {
        #[arg(long)]
        id: u32,
        /// Inspection date, MM/DD/YYYY.
        #[arg(long)]
        date: String,
        #[arg(long)]
        bci: f64,
    },
    /// Record a rehabilitation, then show the updated bridges.
    Rehab {
        #[arg(long, value_delimiter = ',', required = true)]
        ids: Vec<u32>,
        #[arg(long)]
        year: i32,
        /// Update the major (instead of minor) rehabilitation year.
        #[arg(long)]
        major: bool,
    },
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing()?;
    let cli = Cli::parse();

    let mut bridges = load(&cli.data)?;
    let json = cli.json;

    match cli.command {
        Command::Show { id } => {
            let bridge = lookup(&bridges, BridgeId(id))?;
            print_bridges(&[bridge], json)
        }
        Command::Near { lat, lon, radius, exclude } => {
            let exclusions: BridgeIdSet = exclude.into_iter().map(BridgeId).collect();
            let found = find_bridges_in_radius(&bridges, GeoPoint::new(lat, lon), radius, &exclusions)?;
            print_ids(&found, json)
        }
        Command::Worst { ids } => {
            let ids: Vec<BridgeId> = ids.into_iter().map(BridgeId).collect();
            let worst = find_worst_bci(&bridges, &ids)?;
            let score = get_bridge_condition(&bridges, worst);
            if json {
                println!("{}", serde_json::json!({ "id": worst, "bci": score }));
            } else {
                println!("{} (BCI {score})", worst.0);
            }
            Ok(())
        }
        Command::Average { id, start, stop } => {
            let bridge = lookup(&bridges, BridgeId(id))?;
            let avg = calculate_average_condition(bridge, start, stop)?;
            if json {
                println!("{}", serde_json::json!({ "id": id, "start": start, "stop": stop, "average": avg }));
            } else {
                println!("{avg:.3}");
            }
            Ok(())
        }
        Command::Route { lat, lon, max, radius } => {
            let config = RouteConfig::new(max, radius);
            let route = GreedyPlanner::new(BridgeIndex::build(&bridges))
                .plan(&bridges, GeoPoint::new(lat, lon), &config)?;
            info!(stops = route.len(), total_km = route.total_km(), "route planned");

            if json {
                println!("{}", serde_json::to_string_pretty(&route)?);
            } else {
                for (i, (id, leg)) in route.bridges.iter().zip(&route.legs_km).enumerate() {
                    let name = lookup(&bridges, *id).map(|b| b.name.as_str()).unwrap_or("<unknown>");
                    println!("{:>3}. {:>5}  {:>9.3} km  {}", i + 1, id.0, leg, name);
                }
            }
            Ok(())
        }
        Command::Inspect { id, date, bci } => {
            inspect_bridge(&mut bridges, BridgeId(id), &date, bci)?;
            print_bridges(&[lookup(&bridges, BridgeId(id))?], json)
        }
        Command::Rehab { ids, year, major } => {
            let ids: Vec<BridgeId> = ids.into_iter().map(BridgeId).collect();
            let kind = if major { RehabKind::Major } else { RehabKind::Minor };
            rehabilitate_bridge(&mut bridges, &ids, year, kind)?;
            let updated = ids
                .iter()
                .map(|&id| lookup(&bridges, id))
                .collect::<Result<Vec<_>>>()?;
            print_bridges(&updated, json)
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load(path: &Path) -> Result<Vec<Bridge>> {
    let bridges = load_bridges_csv(path)
        .with_context(|| format!("failed to load bridge inventory from {}", path.display()))?;
    if bridges.is_empty() {
        bail!("{} contains no bridges", path.display());
    }
    Ok(bridges)
}

fn lookup(bridges: &[Bridge], id: BridgeId) -> Result<&Bridge> {
    find_bridge_by_id(bridges, id).with_context(|| format!("no bridge with id {}", id.0))
}

fn print_ids(ids: &[BridgeId], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(ids)?);
    } else {
        let list: Vec<String> = ids.iter().map(|id| id.0.to_string()).collect();
        println!("{}", list.join(", "));
    }
    Ok(())
}

fn print_bridges(bridges: &[&Bridge], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(bridges)?);
        return Ok(());
    }
    for b in bridges {
        let condition = b
            .condition()
            .map_or_else(|| "n/a".to_owned(), |s| format!("{s:.1}"));
        println!("{} - {} (hwy {})", b.id.0, b.name, b.highway);
        println!("    location        {}", b.location);
        println!("    spans           {} {:?}", b.span_count, b.span_lengths);
        println!("    deck length     {:.1}", b.deck_length);
        println!("    last inspected  {}", b.last_inspected);
        println!("    latest BCI      {condition}");
    }
    Ok(())
}

fn init_tracing() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).context("installing tracing subscriber")
}
