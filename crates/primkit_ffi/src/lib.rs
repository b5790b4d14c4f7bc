//! C ABI surface for primkit.
//!
//! # Responsibility
//! - Export every core operation under its unmangled C symbol name.
//! - Translate null pointers into absent inputs for the core.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Null pointers never fault: they degrade to a no-op or a zero/false result.
//! - `Point`/`Rectangle` are passed by pointer with their `#[repr(C)]` layout.
//!
//! # See also
//! - include/primkit.h

mod api;

pub use api::*;
pub use primkit_core::{Point, Rectangle};

/// Version of the exported symbol/layout contract.
pub const ABI_VERSION: u32 = 1;
