//! Process configuration
//!
//! Optional YAML overrides for the process-wide tuning constants, plus the
//! global verbose flag. Configuration is read once per process; the core
//! never reads it implicitly - callers pass the loaded defaults into the
//! pipeline explicitly.

mod defaults;

pub use defaults::EnhanceDefaults;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use serde::Deserialize;

// Global verbose flag for controlling debug output
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set the global verbose flag. When true, debug messages will be printed.
pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::SeqCst);
}

/// Check if verbose mode is enabled.
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Print a message to stderr only if verbose mode is enabled.
#[macro_export]
macro_rules! verbose_println {
    ($($arg:tt)*) => {
        if $crate::config::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}

/// Candidate config file names searched on disk.
const CONFIG_FILENAMES: &[&str] = &["relume.yml", "relume.yaml"];

/// Complete configuration file structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RelumeConfig {
    pub defaults: EnhanceDefaults,
}

impl RelumeConfig {
    fn sanitize(mut self) -> Self {
        self.defaults.sanitize();
        self
    }
}

/// Loaded configuration plus where it came from and any load warnings.
pub struct ConfigHandle {
    pub config: RelumeConfig,
    pub source: Option<PathBuf>,
    pub warnings: Vec<String>,
}

/// Load configuration from disk, optionally forcing a specific path.
///
/// Falls back to built-in defaults when nothing parseable is found; parse
/// failures become warnings rather than hard errors.
pub fn load_config(custom_path: Option<&Path>) -> ConfigHandle {
    let mut warnings = Vec::new();

    for candidate in config_candidates(custom_path) {
        if !candidate.exists() || !candidate.is_file() {
            continue;
        }

        match fs::read_to_string(&candidate) {
            Ok(contents) => match serde_yaml::from_str::<RelumeConfig>(&contents) {
                Ok(config) => {
                    let source = fs::canonicalize(&candidate).unwrap_or(candidate);
                    return ConfigHandle {
                        config: config.sanitize(),
                        source: Some(source),
                        warnings,
                    };
                }
                Err(err) => warnings.push(format!(
                    "Failed to parse config {}: {}",
                    candidate.display(),
                    err
                )),
            },
            Err(err) => warnings.push(format!(
                "Failed to read config {}: {}",
                candidate.display(),
                err
            )),
        }
    }

    ConfigHandle {
        config: RelumeConfig::default(),
        source: None,
        warnings,
    }
}

/// Ordered list of config file candidates to try.
fn config_candidates(custom_path: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(path) = custom_path {
        candidates.push(path.to_path_buf());
    }

    if let Ok(env_path) = std::env::var("RELUME_CONFIG") {
        candidates.push(PathBuf::from(env_path));
    }

    if let Ok(cwd) = std::env::current_dir() {
        for name in CONFIG_FILENAMES {
            candidates.push(cwd.join("config").join(name));
            candidates.push(cwd.join(name));
        }
    }

    if let Some(home_dir) = dirs::home_dir() {
        for name in CONFIG_FILENAMES {
            candidates.push(home_dir.join(".relume").join(name));
        }
    }

    candidates
}

static CONFIG_HANDLE: OnceLock<ConfigHandle> = OnceLock::new();

/// Access the global configuration (loaded once per process).
pub fn config_handle() -> &'static ConfigHandle {
    CONFIG_HANDLE.get_or_init(|| load_config(None))
}

/// Report the config source and any warnings, once, in verbose mode.
pub fn log_config_usage() {
    static LOGGED: OnceLock<()> = OnceLock::new();
    LOGGED.get_or_init(|| {
        if !is_verbose() {
            return;
        }
        let handle = config_handle();
        if let Some(source) = &handle.source {
            eprintln!("[relume] Loaded config from {}", source.display());
        } else {
            eprintln!("[relume] Using built-in defaults");
        }
        for warning in &handle.warnings {
            eprintln!("[relume] Config warning: {}", warning);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_falls_back_to_defaults() {
        let handle = load_config(Some(Path::new("/nonexistent/relume.yml")));
        assert!(handle.source.is_none());
        assert_eq!(handle.config.defaults.clip_limit, 2.0);
        assert_eq!(handle.config.defaults.tile_rows, 16);
        assert_eq!(handle.config.defaults.tile_cols, 32);
    }

    #[test]
    fn test_yaml_parsing_and_sanitization() {
        let yaml = "defaults:\n  clip_limit: 3.5\n  tile_rows: 0\n";
        let config: RelumeConfig = serde_yaml::from_str(yaml).unwrap();
        let config = config.sanitize();
        assert_eq!(config.defaults.clip_limit, 3.5);
        // Zero rows is clamped, unspecified fields keep their defaults
        assert_eq!(config.defaults.tile_rows, 1);
        assert_eq!(config.defaults.tile_cols, 32);
    }
}
