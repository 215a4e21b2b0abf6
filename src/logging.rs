//! Native tracing subscriber.
//!
//! `RUST_LOG` overrides the default filter (`fundme=info`, everything else at
//! `warn`). `FUNDME_LOG_JSON=1` switches to JSON lines for log shipping.

use tracing_subscriber::{fmt, EnvFilter};

pub const ENV_LOG_JSON: &str = "FUNDME_LOG_JSON";

const DEFAULT_FILTER: &str = "warn,fundme=info";

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn json_enabled() -> bool {
    matches!(std::env::var(ENV_LOG_JSON).as_deref(), Ok("1") | Ok("true"))
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init_logging() {
    let builder = fmt::Subscriber::builder().with_env_filter(filter()).with_writer(std::io::stderr);
    let installed = if json_enabled() {
        builder.json().with_current_span(false).try_init()
    } else {
        builder.compact().with_target(false).try_init()
    };
    if installed.is_ok() {
        tracing::debug!(json = json_enabled(), "logging initialised");
    }
}
