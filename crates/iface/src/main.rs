//! iface - network interface counter collector.
//!
//! Exposes the collector's three host entry points (metric catalog, metric
//! collection, plugin metadata) as subcommands that print JSON on stdout.
//! Logs go to stderr.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;
#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{Level, debug, error, warn};
use tracing_subscriber::EnvFilter;

use iface_core::collector::{DEFAULT_NET_DEV_PATH, FileSystem, RealFs};
use iface_core::plugin::{
    CollectorConfig, CollectorPlugin, Config, IfaceCollector, Metric, Namespace,
};

/// Network interface counter collector.
#[derive(Parser, Debug)]
#[command(name = "iface", about = "Network interface counter collector", version)]
struct Args {
    /// Path to the interface statistics table.
    #[arg(long, env = "IFACE_SOURCE", default_value = DEFAULT_NET_DEV_PATH, global = true)]
    source: PathBuf,

    /// Increase logging verbosity (-v for debug, -vv for trace). Default is info level.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every metric the collector can produce.
    MetricTypes {
        /// Plugin configuration as a JSON object.
        #[arg(long, value_name = "JSON", value_parser = parse_config)]
        config: Option<Config>,
    },
    /// Collect current values for the given namespaces.
    Collect {
        /// Metric namespaces, e.g. /intel/procfs/iface/eth0/bytes_recv.
        #[arg(value_name = "NAMESPACE", required_unless_present = "stdin")]
        namespaces: Vec<Namespace>,

        /// Read a JSON array of namespace strings from stdin.
        #[arg(long, conflicts_with = "namespaces")]
        stdin: bool,
    },
    /// Print plugin metadata.
    Meta,
}

fn parse_config(s: &str) -> Result<Config, String> {
    Config::from_json(s).map_err(|e| format!("invalid config: {}", e))
}

/// Initializes the tracing subscriber with the appropriate log level.
/// Default level is INFO. Use -q for quiet mode (errors only).
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let mut filter = EnvFilter::from_default_env();
    for target in ["iface", "iface_core"] {
        if let Ok(directive) = format!("{}={}", target, level).parse() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Parses the `--stdin` request body.
fn read_namespaces(input: &str) -> Result<Vec<Namespace>, String> {
    let raw: Vec<String> =
        serde_json::from_str(input).map_err(|e| format!("invalid request: {}", e))?;
    raw.iter()
        .map(|s| s.parse::<Namespace>().map_err(|e| e.to_string()))
        .collect()
}

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{}", json);
    Ok(())
}

fn run<F: FileSystem>(plugin: &IfaceCollector<F>, command: Command) -> Result<(), String> {
    match command {
        Command::MetricTypes { config } => {
            let config = config.unwrap_or_default();
            let metrics = plugin
                .get_metric_types(&config)
                .map_err(|e| e.to_string())?;
            print_json(&metrics)
        }
        Command::Collect { namespaces, stdin } => {
            let namespaces = if stdin {
                let mut input = String::new();
                std::io::stdin()
                    .read_to_string(&mut input)
                    .map_err(|e| format!("failed to read stdin: {}", e))?;
                read_namespaces(&input)?
            } else {
                namespaces
            };

            let requests: Vec<Metric> = namespaces.into_iter().map(Metric::request).collect();
            let metrics = plugin
                .collect_metrics(&requests)
                .map_err(|e| e.to_string())?;
            print_json(&metrics)
        }
        Command::Meta => print_json(&plugin.meta()),
    }
}

fn main() {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet);
    debug!(
        "iface {} starting, source={}",
        env!("CARGO_PKG_VERSION"),
        args.source.display()
    );

    let plugin = IfaceCollector::new(
        RealFs::new(),
        CollectorConfig {
            source: args.source,
        },
    );
    if !plugin.source_exists() {
        warn!(source = %plugin.source().display(), "statistics table not found");
    }

    if let Err(e) = run(&plugin, args.command) {
        error!("{}", e);
        std::process::exit(1);
    }
}
