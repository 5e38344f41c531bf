/// Self-extracting package (AppImage) installation
use std::fs;
use std::io;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use walkdir::WalkDir;

use crate::error::{InstallError, Result};

/// Directory produced by `--appimage-extract`
pub const DEFAULT_EXTRACTION_DIR: &str = "squashfs-root";

/// Where and under which name a package gets installed
#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    /// Parent directory of the installation (defaults to the current directory)
    pub install_path: Option<PathBuf>,
    /// Name of the installed tree (defaults to the package's file stem)
    pub target_name: Option<String>,
    /// Directory the extractor runs in (defaults to the current directory)
    pub work_dir: Option<PathBuf>,
    /// Override for the extractor's output directory name
    pub extraction_dir_name: Option<String>,
}

pub fn is_executable(path: &Path) -> io::Result<bool> {
    Ok(fs::metadata(path)?.permissions().mode() & 0o111 != 0)
}

pub fn make_executable(path: &Path) -> io::Result<()> {
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
}

/// Extract `package` and install the resulting tree
///
/// Any existing `{install_path}/{target_name}` is deleted first, without
/// backup. Returns the directory the package ended up in.
pub fn install_self_extracting_package(package: &Path, options: &InstallOptions) -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    let work_dir = options.work_dir.clone().unwrap_or_else(|| cwd.clone());
    let install_path = options.install_path.clone().unwrap_or_else(|| cwd.clone());
    let target_name = match &options.target_name {
        Some(name) => name.clone(),
        None => package
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .ok_or_else(|| {
                InstallError::Config(format!("no file name in '{}'", package.display()))
            })?,
    };
    let extraction_dir_name = options
        .extraction_dir_name
        .as_deref()
        .unwrap_or(DEFAULT_EXTRACTION_DIR);

    // Relative packages would resolve against work_dir once we spawn there
    let package = if package.is_absolute() {
        package.to_path_buf()
    } else {
        cwd.join(package)
    };

    if !is_executable(&package)? {
        tracing::debug!("Setting mode 0755 on {}", package.display());
        make_executable(&package)?;
    }

    println!(
        "Installing '{}' in '{}' as '{}'...",
        package.display(),
        install_path.display(),
        target_name
    );

    extract(&package, &work_dir)?;
    let extracted = work_dir.join(extraction_dir_name);

    let destination = install_path.join(&target_name);
    if destination.exists() {
        tracing::info!("Removing previous installation at {}", destination.display());
        fs::remove_dir_all(&destination)?;
    }

    fs::create_dir_all(&install_path)?;
    move_dir(&extracted, &destination)?;

    println!("Done!\n");
    Ok(destination)
}

/// Run the package's own extractor in `work_dir`
fn extract(package: &Path, work_dir: &Path) -> Result<()> {
    tracing::debug!("Running {} --appimage-extract in {}", package.display(), work_dir.display());

    let status = Command::new(package)
        .arg("--appimage-extract")
        .current_dir(work_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .status()?;

    if !status.success() {
        return Err(InstallError::Extraction {
            package: package.to_path_buf(),
            status,
        });
    }

    Ok(())
}

/// Rename `from` to `to`, copying when they sit on different filesystems
fn move_dir(from: &Path, to: &Path) -> Result<()> {
    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(e) if e.raw_os_error() == Some(libc::EXDEV) => {
            tracing::debug!("Cross-device move, copying {} to {}", from.display(), to.display());
            copy_tree(from, to)?;
            fs::remove_dir_all(from)?;
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn copy_tree(from: &Path, to: &Path) -> Result<()> {
    for entry in WalkDir::new(from).follow_links(false) {
        let entry = entry.map_err(io::Error::from)?;
        let relative = entry
            .path()
            .strip_prefix(from)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let target = to.join(relative);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            fs::create_dir_all(&target)?;
        } else if file_type.is_symlink() {
            std::os::unix::fs::symlink(fs::read_link(entry.path())?, &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }

    Ok(())
}
