/// Execution module - Drive the installation steps in order
pub mod sync;

pub use sync::execute_sync;
