//! Core primitives for primkit.
//! Every operation here is total: absent inputs degrade to a safe default.

pub mod arith;
pub mod bits;
pub mod config;
pub mod counter;
pub mod geometry;
pub mod logging;
pub mod strings;

pub use arith::{add, checked_factorial, factorial, multiply, ArithError};
pub use bits::{count_bits, reverse_bits};
pub use config::{ConfigError, LogConfig, ENV_LOG_DIR, ENV_LOG_LEVEL};
pub use counter::{get_counter, increment_counter, process_counter, reset_counter, Counter};
pub use geometry::{point_init, rect_area, rect_contains_point, rect_init, Point, Rectangle};
pub use logging::{default_log_level, init_logging, logging_status};
pub use strings::{string_copy, string_length};

/// Minimal health-check API for linkage probes.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
