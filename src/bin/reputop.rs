//! reputop - Interactive TUI viewer for reputation-aggregator node lists.
//!
//! Shows the provider and requestor collections reported by the aggregator
//! backend as a tabbed card list.
//!
//! Usage:
//!   reputop                                  # backend at http://localhost:5555/
//!   reputop --url http://repu.example:8080/  # custom backend base URL
//!   reputop --provider-url http://a/provider --requestor-url http://b/requestor

use tikv_jemallocator::Jemalloc;
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use url::Url;

use reputop::config::Endpoints;
use reputop::source::HttpNodeSource;
use reputop::tui::App;

/// Redraw heartbeat for the event loop.
const TICK_RATE: Duration = Duration::from_millis(250);

/// Interactive TUI viewer for reputation-aggregator node lists.
#[derive(Parser)]
#[command(name = "reputop", about = "Reputation aggregator viewer")]
struct Args {
    /// Base URL of the aggregator backend. The provider and requestor
    /// collections are joined onto it.
    #[arg(long, default_value = "http://localhost:5555/")]
    url: Url,

    /// Explicit provider collection endpoint (overrides --url).
    #[arg(long, value_name = "URL")]
    provider_url: Option<Url>,

    /// Explicit requestor collection endpoint (overrides --url).
    #[arg(long, value_name = "URL")]
    requestor_url: Option<Url>,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = 10)]
    timeout: u64,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut endpoints = match Endpoints::from_base(&args.url) {
        Ok(endpoints) => endpoints,
        Err(e) => {
            eprintln!("Error: invalid base URL '{}': {}", args.url, e);
            std::process::exit(1);
        }
    };
    if let Some(provider) = args.provider_url {
        endpoints.provider = provider;
    }
    if let Some(requestor) = args.requestor_url {
        endpoints.requestor = requestor;
    }

    let source = match HttpNodeSource::new(endpoints, Duration::from_secs(args.timeout)) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let app = App::new(Arc::new(source));
    if let Err(e) = app.run(TICK_RATE) {
        eprintln!("Error running TUI: {}", e);
        std::process::exit(1);
    }
}
