/// The installation flow, one blocking step after another
///
/// Flow:
/// 1. Greet and wait for Enter
/// 2. Verify the host → mismatch aborts before touching network or disk
/// 3. Download the AppImage into the home directory
/// 4. Extract it and install the tree under the home directory
/// 5. Write the desktop entry
///
/// Any error aborts the remaining steps; nothing is rolled back.
use std::io::BufRead;
use std::path::PathBuf;

use console::style;

use crate::config::Config;
use crate::error::{InstallError, Result};
use crate::install::{InstallOptions, install_self_extracting_package, render_desktop_entry, write_desktop_entry};
use crate::network::download;
use crate::verification::verify_host;

/// Every path the flow reads or writes, resolved from the config
#[derive(Debug, Clone, PartialEq)]
pub struct InstallPaths {
    pub home: PathBuf,
    pub work_dir: PathBuf,
    pub package: PathBuf,
    pub install_root: PathBuf,
    pub desktop_entry: PathBuf,
}

impl InstallPaths {
    pub fn resolve(config: &Config) -> Result<Self> {
        let home = config
            .home_dir
            .clone()
            .or_else(dirs::home_dir)
            .ok_or(InstallError::NoHomeDir)?;
        let work_dir = match &config.work_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };

        Ok(Self {
            package: home.join(&config.download_file_name),
            install_root: home.join(&config.install_root_name),
            desktop_entry: home
                .join(".local/share/applications")
                .join(&config.desktop_entry_name),
            work_dir,
            home,
        })
    }
}

/// Block until the user hits Enter
fn wait_for_confirmation<R: BufRead>(input: &mut R) -> Result<()> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(InstallError::NoConfirmation);
    }
    Ok(())
}

/// Run the full installation
pub fn execute_sync<R: BufRead>(config: &Config, input: &mut R) -> Result<InstallPaths> {
    println!(
        "Welcome to 'osu4cros', probably the only osu!(lazer) installer for ChromeOS devices. (Press Ctrl + C to exit)..."
    );
    println!("Hit 'Enter' to install osu! (lazer)...");
    wait_for_confirmation(input)?;

    println!("Verifying system integrity...");
    verify_host(&config.probe)?;
    println!("{}\n", style("Done!").green());

    let paths = InstallPaths::resolve(config)?;
    tracing::debug!("Resolved paths: {:?}", paths);

    download(&config.effective_source_url(), &paths.package, true)?;

    let installed = install_self_extracting_package(
        &paths.package,
        &InstallOptions {
            install_path: Some(paths.home.clone()),
            target_name: Some(config.install_root_name.clone()),
            work_dir: Some(paths.work_dir.clone()),
            extraction_dir_name: Some(config.extraction_dir_name.clone()),
        },
    )?;
    tracing::info!("Installed into {}", installed.display());

    println!("Creating desktop entry...");
    write_desktop_entry(&render_desktop_entry(&paths.install_root), &paths.desktop_entry)?;
    println!("{}\n", style("Done!").green());

    println!(
        "Thank you for using 'osu4cros'! You can launch 'osu!' from the App Launcher.\n\
         Don't forget to apply the recommended settings when launching the game!\n\n\
         Have fun <3\n"
    );

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProbeConfig;
    use crate::install::appimage::tests::fake_appimage_script;
    use std::fs;
    use std::io::{BufReader, Cursor, Read, Write};
    use std::net::TcpListener;
    use std::path::Path;
    use std::thread;
    use tempfile::TempDir;

    fn serve_forever(body: Vec<u8>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { continue };
                let mut reader = BufReader::new(stream.try_clone().unwrap());
                let mut request = Vec::new();
                let mut byte = [0u8; 1];
                while !request.ends_with(b"\r\n\r\n") && reader.read(&mut byte).unwrap_or(0) == 1 {
                    request.push(byte[0]);
                }

                let header = format!(
                    "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                    body.len()
                );
                let _ = stream.write_all(header.as_bytes());
                let _ = stream.write_all(&body);
            }
        });

        format!("http://{}/osu.AppImage", addr)
    }

    fn test_config(root: &Path, product: &str, os_id: &str, source_url: String) -> Config {
        let product_path = root.join("product_name");
        let os_release = root.join("os-release");
        fs::write(&product_path, format!("{}\n", product)).unwrap();
        fs::write(&os_release, format!("ID={}\n", os_id)).unwrap();

        let home = root.join("home");
        let work = root.join("work");
        fs::create_dir_all(&home).unwrap();
        fs::create_dir_all(&work).unwrap();

        Config {
            source_url,
            home_dir: Some(home),
            work_dir: Some(work),
            probe: ProbeConfig {
                product_name_path: product_path,
                os_release_paths: vec![os_release],
                ..ProbeConfig::default()
            },
            ..Config::default()
        }
    }

    const UNREACHABLE: &str = "http://127.0.0.1:9/osu.AppImage";

    #[test]
    fn test_resolve_paths() {
        let config = Config {
            home_dir: Some(PathBuf::from("/home/chronos")),
            work_dir: Some(PathBuf::from("/tmp")),
            ..Config::default()
        };

        let paths = InstallPaths::resolve(&config).unwrap();
        assert_eq!(paths.package, PathBuf::from("/home/chronos/osu.AppImage"));
        assert_eq!(paths.install_root, PathBuf::from("/home/chronos/osu-lazer"));
        assert_eq!(
            paths.desktop_entry,
            PathBuf::from("/home/chronos/.local/share/applications/osu-lazer.desktop")
        );
    }

    #[test]
    fn test_unsupported_host_stops_before_any_io() {
        let root = TempDir::new().unwrap();
        let config = test_config(root.path(), "VirtualBox", "steamrt", UNREACHABLE.to_string());

        let err = execute_sync(&config, &mut Cursor::new(b"\n".to_vec())).unwrap_err();

        assert!(matches!(err, InstallError::UnsupportedHost));
        assert_eq!(fs::read_dir(root.path().join("home")).unwrap().count(), 0);
    }

    #[test]
    fn test_nested_container_stops_before_any_io() {
        let root = TempDir::new().unwrap();
        let config = test_config(root.path(), "crosvm", "debian", UNREACHABLE.to_string());

        let err = execute_sync(&config, &mut Cursor::new(b"\n".to_vec())).unwrap_err();

        assert!(matches!(err, InstallError::NestedContainer { .. }));
        assert_eq!(fs::read_dir(root.path().join("home")).unwrap().count(), 0);
    }

    #[test]
    fn test_closed_stdin_is_not_a_confirmation() {
        let root = TempDir::new().unwrap();
        let config = test_config(root.path(), "crosvm", "steamrt", UNREACHABLE.to_string());

        let err = execute_sync(&config, &mut Cursor::new(Vec::new())).unwrap_err();

        assert!(matches!(err, InstallError::NoConfirmation));
    }

    #[test]
    fn test_full_flow_twice_is_idempotent() {
        let root = TempDir::new().unwrap();
        let url = serve_forever(fake_appimage_script("osu!").into_bytes());
        let config = test_config(root.path(), "crosvm", "steamrt", url);

        let paths = execute_sync(&config, &mut Cursor::new(b"\n".to_vec())).unwrap();
        let first = fs::read(&paths.desktop_entry).unwrap();

        let paths = execute_sync(&config, &mut Cursor::new(b"\n".to_vec())).unwrap();
        let second = fs::read(&paths.desktop_entry).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            fs::read_to_string(paths.install_root.join("AppRun")).unwrap(),
            "osu!"
        );
        assert!(paths.package.is_file());
        assert!(!paths.work_dir.join("squashfs-root").exists());

        let entry = String::from_utf8(second).unwrap();
        assert!(entry.contains(&format!("Exec={}/AppRun", paths.install_root.display())));
    }
}
