use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use roadcast_core::service::DEFAULT_LOCATION;

/// Location pre-filled in the travel form.
pub(crate) const DEFAULT_FORM_LOCATION: &str = "New York";

/// Command line and environment settings for the dashboard.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "roadcast",
    version,
    about = "Simulated weather and traffic dashboard for the terminal"
)]
pub(crate) struct Settings {
    /// Location used for the live panel on start and reload
    #[arg(long, env = "ROADCAST_LOCATION", default_value = DEFAULT_LOCATION)]
    pub location: String,

    /// Location pre-filled in the travel form
    #[arg(long, env = "ROADCAST_FORM_LOCATION", default_value = DEFAULT_FORM_LOCATION)]
    pub form_location: String,

    /// Seed for reproducible readings
    #[arg(long, env = "ROADCAST_SEED")]
    pub seed: Option<u64>,

    /// Redraw and input poll interval in milliseconds
    #[arg(
        long,
        env = "ROADCAST_TICK_MS",
        default_value_t = 120,
        value_parser = clap::value_parser!(u64).range(10..=5_000)
    )]
    pub tick_ms: u64,

    /// Write tracing output to this file (filtered by `RUST_LOG`)
    #[arg(long, env = "ROADCAST_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Draw the theme background without animation
    #[arg(long)]
    pub no_effects: bool,
}

impl Settings {
    pub(crate) fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}
