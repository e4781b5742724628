//! Input mapping: pointer and device-orientation events drive one spotlight.

/// Cursor-to-NDC normalisation and the pointer light system.
pub mod pointer;

/// Device-orientation event, WASM listener bridge and its light system.
pub mod orientation;
