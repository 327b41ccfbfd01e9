//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.deckhand/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::stats::DEFAULT_MAX_BAR_WIDTH;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DeckhandConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub chart: ChartConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub data_dir: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ChartConfig {
    pub max_bar_width: Option<usize>,
    pub bar_symbol: Option<String>,
}

/// Bar colours per rating, as colour names or `#rrggbb`.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ThemeConfig {
    pub blackout: Option<String>,
    pub wrong: Option<String>,
    pub hard: Option<String>,
    pub good: Option<String>,
    pub easy: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BAR_SYMBOL: &str = "█";

/// Rating colours in rating order (Blackout → Easy).
pub const DEFAULT_RATING_COLORS: [&str; 5] = ["red", "lightred", "yellow", "green", "cyan"];

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub data_dir: PathBuf,
    pub max_bar_width: usize,
    pub bar_symbol: String,
    /// Colour specs in rating order (Blackout → Easy).
    pub rating_colors: [String; 5],
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.deckhand/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".deckhand"))
}

/// Returns the path to `~/.deckhand/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.deckhand/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `DeckhandConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<DeckhandConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(DeckhandConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(DeckhandConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<DeckhandConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r##"# Deckhand Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# data_dir = "~/.deckhand/decks"    # One JSON file per deck. Or DECKHAND_DATA_DIR / --data-dir

# [chart]
# max_bar_width = 30
# bar_symbol = "█"

# [theme]                           # Colour names ("red", "lightgreen") or "#rrggbb"
# blackout = "red"
# wrong = "lightred"
# hard = "yellow"
# good = "green"
# easy = "cyan"
"##;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_data_dir` is from the `--data-dir` flag (None = not specified).
pub fn resolve(config: &DeckhandConfig, cli_data_dir: Option<&Path>) -> ResolvedConfig {
    // Data dir: CLI → env → config → default
    let data_dir = cli_data_dir
        .map(Path::to_path_buf)
        .or_else(|| std::env::var("DECKHAND_DATA_DIR").ok().map(PathBuf::from))
        .or_else(|| config.general.data_dir.as_deref().map(expand_home))
        .unwrap_or_else(default_data_dir);

    let theme = &config.theme;
    let overrides = [
        &theme.blackout,
        &theme.wrong,
        &theme.hard,
        &theme.good,
        &theme.easy,
    ];
    let rating_colors = std::array::from_fn(|i| {
        overrides[i]
            .clone()
            .unwrap_or_else(|| DEFAULT_RATING_COLORS[i].to_string())
    });

    let max_bar_width = match config.chart.max_bar_width {
        Some(0) => {
            warn!("chart.max_bar_width must be positive, using {}", DEFAULT_MAX_BAR_WIDTH);
            DEFAULT_MAX_BAR_WIDTH
        }
        Some(width) => width,
        None => DEFAULT_MAX_BAR_WIDTH,
    };

    let resolved = ResolvedConfig {
        data_dir,
        max_bar_width,
        bar_symbol: config
            .chart
            .bar_symbol
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_BAR_SYMBOL.to_string()),
        rating_colors,
    };
    debug!("Resolved config: {:?}", resolved);
    resolved
}

fn default_data_dir() -> PathBuf {
    config_dir()
        .map(|d| d.join("decks"))
        .unwrap_or_else(|| PathBuf::from("decks"))
}

/// Expand a leading `~/` to the home directory.
fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}
