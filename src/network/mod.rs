/// Network module - Fetch the release asset
pub mod download;

pub use download::download;
