use clap::Parser;
use landmarks::core::config::{self, CliOverrides, LandmarksConfig};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "landmarks", about = "Browse landmarks with tabbed, restorable navigation")]
struct Args {
    /// Open a deep link at launch, e.g. landmarks://landmark/golden-gate-bridge
    #[arg(long, value_name = "URL")]
    open: Option<String>,

    /// Directory holding the saved navigation state
    #[arg(long, value_name = "DIR")]
    state_dir: Option<PathBuf>,

    /// Start at the tab roots instead of restoring saved navigation
    #[arg(long)]
    no_restore: bool,

    /// Keep navigation state in memory only
    #[arg(long, conflicts_with = "state_dir")]
    ephemeral: bool,

    /// Log level: error, warn, info, debug, trace or off
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // The logger isn't up yet, so a bad config file is reported once it is
    let (file_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (LandmarksConfig::default(), Some(e)),
    };
    let cli = CliOverrides {
        state_dir: args.state_dir,
        log_level: args.log_level,
        no_restore: args.no_restore,
        ephemeral: args.ephemeral,
    };
    let resolved = config::resolve(&file_config, &cli);

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    if let Some(e) = config_error {
        log::warn!("Ignoring config file: {}", e);
    }
    log::info!("Landmarks starting up");
    log::debug!("Resolved config: {:?}", resolved);

    landmarks::tui::run(resolved, args.open)
}
