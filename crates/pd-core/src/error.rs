//! Error types for catalog and descriptor boundaries.
//!
//! The interaction core itself never errors — bad pointer input degrades
//! to a no-op. These errors cover the edges where external data enters:
//! device-class strings, JSON catalogs, and flow descriptors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    /// A device-class string outside the closed set. Only reachable at
    /// the parse boundary; `DeviceClass` itself is total.
    #[error("unknown device class \"{0}\" (expected \"web\" or \"mobile\")")]
    UnknownDeviceClass(String),

    /// JSON parse error from a template or feature catalog.
    #[error("catalog parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A flow link references a node id that is not in the flow.
    #[error("flow link \"{link}\" references unknown node \"{endpoint}\"")]
    DanglingFlowLink { link: String, endpoint: String },
}
