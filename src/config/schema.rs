/// Configuration schema for the installer
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
///
/// Every field has a default, so an empty JSON object (or no config file at
/// all) reproduces the stock osu!(lazer) installation.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Where the AppImage is fetched from
    pub source_url: String,

    /// File name of the downloaded package inside the home directory
    pub download_file_name: String,

    /// Directory name of the installed tree inside the home directory
    pub install_root_name: String,

    /// Directory the AppImage runtime extracts into.
    /// Fixed by the AppImage format; only change it if you know what you're doing.
    pub extraction_dir_name: String,

    /// File name of the launcher entry under `~/.local/share/applications`
    pub desktop_entry_name: String,

    /// Overrides the user's home directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_dir: Option<PathBuf>,

    /// Directory the extraction subprocess runs in (defaults to the current directory)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_dir: Option<PathBuf>,

    /// Log level used when RUST_LOG is unset: "trace", "debug", "info", "warn", "error"
    pub log_level: String,

    /// Host identification probes
    pub probe: ProbeConfig,
}

/// Where and what to look for when identifying the host
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// DMI product name exposed by the hypervisor
    pub product_name_path: PathBuf,

    /// Product name of the supported guest
    pub expected_product: String,

    /// os-release candidates, first readable one wins
    pub os_release_paths: Vec<PathBuf>,

    /// os-release ID of the incompatible nested container
    pub nested_distro_id: String,

    /// Shown to users stuck in the nested container
    pub help_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_url: "https://github.com/ppy/osu/releases/latest/download/osu.AppImage"
                .to_string(),
            download_file_name: "osu.AppImage".to_string(),
            install_root_name: "osu-lazer".to_string(),
            extraction_dir_name: "squashfs-root".to_string(),
            desktop_entry_name: "osu-lazer.desktop".to_string(),
            home_dir: None,
            work_dir: None,
            log_level: "warn".to_string(),
            probe: ProbeConfig::default(),
        }
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            product_name_path: PathBuf::from("/sys/class/dmi/id/product_name"),
            expected_product: "crosvm".to_string(),
            os_release_paths: vec![
                PathBuf::from("/etc/os-release"),
                PathBuf::from("/usr/lib/os-release"),
            ],
            nested_distro_id: "debian".to_string(),
            help_url: "https://www.exemple.com/".to_string(),
        }
    }
}

impl Config {
    /// Get the effective source URL, prioritizing compile-time override
    pub fn effective_source_url(&self) -> String {
        // If OSU4CROS_SOURCE_URL was set at compile time, use it (hardcoded into binary)
        if let Some(compile_time_url) = option_env!("OSU4CROS_SOURCE_URL") {
            if !compile_time_url.is_empty() {
                return compile_time_url.to_string();
            }
        }

        self.source_url.clone()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        let url = self.effective_source_url();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err("source_url must start with http:// or https://".to_string());
        }

        for (field, value) in [
            ("download_file_name", &self.download_file_name),
            ("install_root_name", &self.install_root_name),
            ("extraction_dir_name", &self.extraction_dir_name),
            ("desktop_entry_name", &self.desktop_entry_name),
        ] {
            validate_file_name(field, value)?;
        }

        if self.probe.expected_product.is_empty() {
            return Err("probe.expected_product cannot be empty".to_string());
        }

        if self.probe.os_release_paths.is_empty() {
            return Err("probe.os_release_paths cannot be empty".to_string());
        }

        Ok(())
    }
}

/// Names are joined onto directories, so they must be a single plain component
fn validate_file_name(field: &str, value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err(format!("{} cannot be empty", field));
    }

    let mut components = Path::new(value).components();
    match (components.next(), components.next()) {
        (Some(std::path::Component::Normal(_)), None) => Ok(()),
        _ => Err(format!("{} must be a plain file name, got '{}'", field, value)),
    }
}
