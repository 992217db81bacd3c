//! Mesh route compiler CLI.
//!
//! # Architecture Overview
//!
//! ```text
//!   route document ──▶ config::loader ──▶ config::validation ──▶ routing ──▶ JSON on stdout
//!                                                                  ▲
//!   mesh config ─────▶ config::loader ──▶ naming::ClusterNaming ───┘
//! ```
//!
//! Commands:
//! - `compile`  print the VirtualService for a route document
//! - `validate` check a route document's traffic split
//! - `route`    show which rule an authority would be dispatched to

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use mesh_route_compiler::config::{load_config, load_route_document, validate_traffic, RouteDocument};
use mesh_route_compiler::observability::init_logging;
use mesh_route_compiler::{ClusterNaming, MeshConfig, VirtualServiceBuilder};

#[derive(Parser)]
#[command(name = "mesh-route-compiler")]
#[command(about = "Compile route traffic splits into mesh routing rules", long_about = None)]
struct Cli {
    /// Mesh configuration file (TOML). Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the VirtualService for a route document
    Compile {
        route_file: PathBuf,

        /// Single-line JSON output
        #[arg(long)]
        compact: bool,
    },
    /// Validate a route document's traffic split
    Validate { route_file: PathBuf },
    /// Show the rule a request authority would match
    Route {
        route_file: PathBuf,

        #[arg(long)]
        host: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => MeshConfig::default(),
    };
    let level = cli
        .log_level
        .as_deref()
        .unwrap_or(&config.observability.log_level);
    init_logging(level);

    let naming = ClusterNaming::new(config.naming.clone());
    let builder = VirtualServiceBuilder::new(&naming);

    match cli.command {
        Commands::Compile { route_file, compact } => {
            let document = load_checked(&route_file)?;
            let vs = builder.make_virtual_service(&document.route, &document.traffic);
            let json = if compact {
                serde_json::to_string(&vs)?
            } else {
                serde_json::to_string_pretty(&vs)?
            };
            println!("{}", json);
        }
        Commands::Validate { route_file } => {
            load_checked(&route_file)?;
            println!("{}: ok", route_file.display());
        }
        Commands::Route { route_file, host } => {
            let document = load_checked(&route_file)?;
            let spec = builder.build(&document.route, &document.traffic.targets);
            match spec.route_for(&host) {
                Some(rule) => println!("{}", serde_json::to_string_pretty(rule)?),
                None => {
                    tracing::warn!(host = %host, "No rule matches authority");
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

/// Load a route document and reject it if the traffic split is malformed.
fn load_checked(path: &Path) -> Result<RouteDocument, Box<dyn std::error::Error>> {
    let document = load_route_document(path)?;
    if let Err(errors) = validate_traffic(&document.route, &document.traffic) {
        for err in &errors {
            tracing::error!(file = %path.display(), "{}", err);
        }
        return Err(format!("{} validation error(s) in {}", errors.len(), path.display()).into());
    }
    tracing::info!(
        route = %document.route.name,
        targets = document.traffic.targets.len(),
        "Route document loaded"
    );
    Ok(document)
}
