//! Global stylesheet for the Folio shell.

mod styles;

pub use styles::GLOBAL_STYLES;
