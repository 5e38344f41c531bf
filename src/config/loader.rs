/// Configuration loader
use super::schema::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable pointing at an explicit config file
pub const CONFIG_ENV_VAR: &str = "OSU4CROS_CONFIG";

/// Load configuration
///
/// Lookup order:
/// 1. `$OSU4CROS_CONFIG`, which must exist when set
/// 2. `<executable>.config` next to the binary, if present
/// 3. Built-in defaults
pub fn load_config() -> Result<Config, String> {
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
        return load_config_from(Path::new(&path));
    }

    if let Some(path) = adjacent_config_path() {
        if path.is_file() {
            return load_config_from(&path);
        }
    }

    let config = Config::default();
    config.validate()?;
    Ok(config)
}

/// Load and validate a JSON config file
pub fn load_config_from(path: &Path) -> Result<Config, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config file {}: {}", path.display(), e))?;

    let config: Config = serde_json::from_str(&content)
        .map_err(|e| format!("Failed to parse config {}: {}", path.display(), e))?;

    config.validate()?;

    Ok(config)
}

/// Named: <executable>.config (e.g., "osu4cros.config")
fn adjacent_config_path() -> Option<PathBuf> {
    let exe_path = std::env::current_exe().ok()?;
    Some(PathBuf::from(format!("{}.config", exe_path.display())))
}
