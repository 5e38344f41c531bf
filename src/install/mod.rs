/// Install module - Unpack the AppImage and register it with the desktop
pub mod appimage;
pub mod desktop_entry;

pub use appimage::{InstallOptions, install_self_extracting_package};
pub use desktop_entry::{render_desktop_entry, write_desktop_entry};
