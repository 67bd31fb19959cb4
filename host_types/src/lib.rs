//! # Host Types
//!
//! This crate defines the wire vocabulary shared between guest scripts and
//! the device runtime.
//!
//! ## Philosophy
//!
//! The enumerations and constants here cross the host/guest boundary as raw
//! numbers. Their values are a versioned contract: they must remain stable
//! across host and guest releases, so every discriminant is pinned by a test.
//!
//! Handles (file handles, panel/control/log/plot indices, radio indices) are
//! plain integers carried opaquely. Their lifecycle is entirely host-owned;
//! this layer never constructs, destroys, or validates them.

pub mod enums;
pub mod event;

pub use enums::{
    GuiEventType, LedMode, PanelLedColor, PanelLedSize, PrintColor, PrintDataType,
    EVENT_TYPE_COUNT,
};
pub use event::{
    EventNumber, EventRecord, EVENT_DATA_MAX, EVENT_NUMTYPE_FLOAT, EVENT_NUMTYPE_INT,
    EVENT_NUMTYPE_UINT,
};

/// File open mode: read-only.
pub const FILE_MODE_READ: i32 = 0;
/// File open mode: write, truncating any existing content.
pub const FILE_MODE_WRITE: i32 = 1;
/// File open mode: write, appending to existing content.
pub const FILE_MODE_APPEND: i32 = 2;
