/// os-release parsing (freedesktop.org format)
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{InstallError, Result};

/// `ID` assumed when the file does not declare one
const DEFAULT_ID: &str = "linux";

/// Parse `KEY=VALUE` lines, dropping comments and surrounding quotes
pub fn parse_os_release(content: &str) -> HashMap<String, String> {
    let mut fields = HashMap::new();
    fields.insert("ID".to_string(), DEFAULT_ID.to_string());

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            fields.insert(key.trim().to_string(), unquote(value.trim()));
        }
    }

    fields
}

fn unquote(value: &str) -> String {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return value[1..value.len() - 1].to_string();
        }
    }
    value.to_string()
}

/// Read the `ID` field from the first readable os-release file
pub fn os_release_id(paths: &[PathBuf]) -> Result<String> {
    let mut last_error = None;

    for path in paths {
        match fs::read_to_string(path) {
            Ok(content) => {
                let mut fields = parse_os_release(&content);
                return Ok(fields.remove("ID").unwrap_or_else(|| DEFAULT_ID.to_string()));
            }
            Err(e) => {
                tracing::debug!("os-release candidate {} unreadable: {}", path.display(), e);
                last_error = Some((path.clone(), e));
            }
        }
    }

    let (path, source) = last_error.unwrap_or_else(|| {
        (
            Path::new("os-release").to_path_buf(),
            io::Error::new(io::ErrorKind::NotFound, "no os-release candidates"),
        )
    });
    Err(InstallError::Probe { path, source })
}
