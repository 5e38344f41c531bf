/// Utility module - Terminal helpers, unit conversion, logging and interrupt handling
pub mod interrupt;
pub mod logging;
pub mod terminal;
pub mod units;

pub use interrupt::install_interrupt_handler;
pub use logging::init_logging;
