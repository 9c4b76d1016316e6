//! Runtime configuration (command line with environment fallbacks).

use std::path::PathBuf;

use clap::Parser;

use crate::store::DEFAULT_SAVE_FILE;
use crate::types::SpawnPolicy;

/// Tile themes understood by the terminal view.
pub const THEMES: [&str; 2] = ["numeric", "milestone"];

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "tui-2048")]
#[command(author, version, about = "Play 2048 in the terminal")]
pub struct Config {
    /// Save file location
    #[arg(long, env = "TUI2048_SAVE_PATH", value_name = "FILE", default_value = DEFAULT_SAVE_FILE)]
    pub save_path: PathBuf,

    /// Spawn rule after accepted moves: classic | lenient
    #[arg(long, env = "TUI2048_SPAWN_POLICY", default_value = "classic", value_parser = parse_policy)]
    pub spawn_policy: SpawnPolicy,

    /// Tile theme: numeric | milestone
    #[arg(long, env = "TUI2048_THEME", default_value = "numeric", value_parser = THEMES)]
    pub theme: String,

    /// Fixed RNG seed (deterministic spawns and shuffles)
    #[arg(long, env = "TUI2048_SEED")]
    pub seed: Option<u64>,

    /// Ignore any existing save and start a new game
    #[arg(long)]
    pub fresh: bool,

    /// Never read or write the save file
    #[arg(long)]
    pub no_save: bool,

    /// Shuffle, restart and tile removal without a yes/no prompt
    #[arg(long)]
    pub no_confirm: bool,

    /// Write logs to this file (logging is off when unset)
    #[arg(long, env = "TUI2048_LOG_FILE", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log filter directive, e.g. `debug` or `tui_2048_engine=trace`
    #[arg(long, env = "TUI2048_LOG", default_value = "info")]
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            save_path: PathBuf::from(DEFAULT_SAVE_FILE),
            spawn_policy: SpawnPolicy::default(),
            theme: THEMES[0].to_string(),
            seed: None,
            fresh: false,
            no_save: false,
            no_confirm: false,
            log_file: None,
            log_filter: "info".to_string(),
        }
    }
}

fn parse_policy(s: &str) -> Result<SpawnPolicy, String> {
    SpawnPolicy::from_str(s).ok_or_else(|| format!("unknown spawn policy `{s}` (expected classic or lenient)"))
}
