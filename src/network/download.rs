/// Streaming download of the release asset
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::error::{InstallError, Result};
use crate::utils::units::display_mb;

/// Bytes read from the response per write to disk
pub const CHUNK_SIZE: usize = 8192;

/// Download `url` to `file_path`
///
/// # Arguments
/// * `url` - Remote asset
/// * `file_path` - Destination file
/// * `allow_overwrite` - Replace `file_path` if it already exists
///
/// # Returns
/// Number of bytes written. An interrupted transfer leaves a partial file behind.
pub fn download(url: &str, file_path: &Path, allow_overwrite: bool) -> Result<u64> {
    if !allow_overwrite && file_path.exists() {
        return Err(InstallError::FileExists(file_path.to_path_buf()));
    }

    // No total timeout: the asset is large and links can be slow
    let client = reqwest::blocking::Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .timeout(None)
        .build()?;

    tracing::info!("GET {}", url);
    let mut response = client.get(url).send()?.error_for_status()?;
    tracing::debug!("📡 Response status: {}", response.status());

    let total_size = response.content_length().unwrap_or(0);
    let file_name = file_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let progress = progress_line();
    let mut file = File::create(file_path)?;
    let mut buffer = [0u8; CHUNK_SIZE];
    let mut downloaded_size: u64 = 0;

    loop {
        let read = response.read(&mut buffer)?;
        if read == 0 {
            break;
        }

        file.write_all(&buffer[..read])?;
        downloaded_size += read as u64;

        progress.set_message(format!(
            "[{}/{}MB] Downloading '{}' at '{}'...",
            display_mb(downloaded_size),
            display_mb(total_size),
            file_name,
            url
        ));
    }

    file.flush()?;
    progress.finish();
    println!("\nDone!\n");

    if total_size > 0 && downloaded_size != total_size {
        tracing::warn!(
            "⚠️  Received {} bytes, server announced {}",
            downloaded_size,
            total_size
        );
    }

    Ok(downloaded_size)
}

/// Single line redrawn in place on stdout
fn progress_line() -> ProgressBar {
    let progress = ProgressBar::with_draw_target(None, ProgressDrawTarget::stdout());
    if let Ok(style) = ProgressStyle::with_template("{msg}") {
        progress.set_style(style);
    }
    progress
}
