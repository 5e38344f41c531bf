/// Launcher registration through a freedesktop desktop entry
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Desktop entry for an osu!(lazer) tree extracted at `install_root`
pub fn render_desktop_entry(install_root: &Path) -> String {
    let root = install_root.display();
    format!(
        "\
# Desktop Entry Specification: https://standards.freedesktop.org/desktop-entry-spec/desktop-entry-spec-latest.html
[Desktop Entry]

Version=1.5
Type=Application
Name=osu!(lazer)
Comment=A free-to-win rhythm game. Rhythm is just a *click* away!
Icon={root}/usr/share/icons/hicolor/256x256/apps/osu.png
Exec={root}/AppRun
Terminal=false
MimeType=application/x-osu-beatmap-archive;application/x-osu-skin-archive;application/x-osu-beatmap;application/x-osu-storyboard;application/x-osu-replay;x-scheme-handler/osu;
Categories=Game;
StartupWMClass=osu!
SingleMainWindow=true
StartupNotify=true"
    )
}

/// Write `content` to `path`, creating parent directories and replacing any existing file
pub fn write_desktop_entry(content: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}
