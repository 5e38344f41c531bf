/// Verification module - Make sure we run on a supported ChromeOS guest
pub mod host;
pub mod os_release;

pub use host::verify_host;
