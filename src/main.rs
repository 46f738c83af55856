//! Geoseek CLI
//!
//! Demo driver for the address search core.
//!
//! Usage:
//!     geoseek search "Тверская 7" --host http://localhost:8000
//!     geoseek repl --host http://localhost:8000
//!     geoseek test --host http://localhost:8000

use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

use geoseek::adapters::console::ConsoleSurface;
use geoseek::adapters::headless::HeadlessMap;
use geoseek::adapters::http::HttpSearchClient;
use geoseek::core::{RequestController, SearchConfig};
use geoseek::ports::Surface;

/// Geoseek - address search with map overlay sync
#[derive(Parser)]
#[command(name = "geoseek")]
#[command(version)]
#[command(about = "Search free-text addresses and sync results to a map overlay", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// One-shot address search
    Search {
        /// Free-text address to look up
        address: String,

        /// Search service base URL
        #[arg(long, default_value = "http://localhost:8000")]
        host: String,

        /// Transport timeout in seconds
        #[arg(long, default_value = "10")]
        timeout: u64,
    },

    /// Interactive search loop, one address per line
    Repl {
        /// Search service base URL
        #[arg(long, default_value = "http://localhost:8000")]
        host: String,

        /// Transport timeout in seconds
        #[arg(long, default_value = "10")]
        timeout: u64,
    },

    /// Check that the search service is reachable
    Test {
        /// Search service base URL
        #[arg(long, default_value = "http://localhost:8000")]
        host: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            address,
            host,
            timeout,
        } => cmd_search(&address, &host, timeout),
        Commands::Repl { host, timeout } => cmd_repl(&host, timeout),
        Commands::Test { host } => cmd_test(&host),
    }
}

fn build_session(
    host: &str,
    timeout: u64,
) -> (RequestController<HeadlessMap>, HttpSearchClient) {
    let config = SearchConfig::new().with_transport_timeout(Duration::from_secs(timeout));
    let client = HttpSearchClient::new(host, &config);
    let controller = RequestController::new(config, HeadlessMap::new());
    (controller, client)
}

fn cmd_search(address: &str, host: &str, timeout: u64) {
    let (mut controller, client) = build_session(host, timeout);
    let mut surface = ConsoleSurface::new();
    run_query(&mut controller, &client, &mut surface, address);
}

fn cmd_repl(host: &str, timeout: u64) {
    let (mut controller, client) = build_session(host, timeout);
    let mut surface = ConsoleSurface::new();

    println!("Geoseek. Type an address, or /quit to exit.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        // let an expired notification leave the screen before prompting
        if controller.tick(Instant::now()) {
            surface.dismiss_notification();
        }

        print!("address> ");
        stdout.flush().unwrap();

        let mut input = String::new();
        if stdin.lock().read_line(&mut input).is_err() || input.is_empty() {
            break;
        }

        match input.trim().to_lowercase().as_str() {
            "/quit" | "/exit" | "/q" => {
                println!("Goodbye!");
                break;
            }
            "/help" => {
                println!();
                println!("Commands:");
                println!("  /quit    - Exit");
                println!("  /help    - Show this help");
                println!("Anything else is searched as an address.");
                println!();
                continue;
            }
            _ => {}
        }

        run_query(&mut controller, &client, &mut surface, &input);
        println!();
    }
}

fn cmd_test(host: &str) {
    let config = SearchConfig::new();
    let client = HttpSearchClient::new(host, &config);

    if client.is_available() {
        println!("Search service reachable at {}", client.base_url());
    } else {
        eprintln!("Error: cannot reach search service at {}", client.base_url());
        eprintln!("Check the host and that the backend is running.");
        std::process::exit(1);
    }
}

fn run_query(
    controller: &mut RequestController<HeadlessMap>,
    client: &HttpSearchClient,
    surface: &mut ConsoleSurface,
    address: &str,
) {
    controller.search(address, client, Instant::now());

    if let Some(searched) = controller.searched_address() {
        println!("Results for: {}", searched);
    }
    surface.render_results(controller.state(), &controller.results());
    report_map(controller);

    if let Some(notification) = controller.notification() {
        surface.show_notification(notification);
    }
}

fn report_map(controller: &RequestController<HeadlessMap>) {
    let map = controller.overlay().widget();
    if map.markers().is_empty() {
        return;
    }

    println!("  map: {} marker(s)", map.markers().len());
    if let Some(bounds) = map.viewport() {
        let lats: Vec<f64> = bounds.iter().map(|(lat, _)| *lat).collect();
        let lons: Vec<f64> = bounds.iter().map(|(_, lon)| *lon).collect();
        let min_lat = lats.iter().cloned().fold(f64::INFINITY, f64::min);
        let max_lat = lats.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let min_lon = lons.iter().cloned().fold(f64::INFINITY, f64::min);
        let max_lon = lons.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        println!(
            "  view: ({}, {}) to ({}, {})",
            min_lat, min_lon, max_lat, max_lon
        );
    }
}
