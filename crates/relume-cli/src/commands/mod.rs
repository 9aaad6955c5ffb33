//! Command implementations for the relume CLI.

mod enhance;
mod metrics;

pub use enhance::cmd_enhance;
pub use metrics::cmd_metrics;
