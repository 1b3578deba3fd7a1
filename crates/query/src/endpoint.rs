//! Tracking endpoint paths and reserved parameter names.
//!
//! Centralized constants for the tracking API wire contract. These values
//! are matched by the server-side decoders and must not change.

/// Path for event recording queries
pub const EVENT_PATH: &str = "/e";

/// Path for property recording queries
pub const PROPERTIES_PATH: &str = "/s";

/// Path for identity alias queries
pub const ALIAS_PATH: &str = "/a";

/// Reserved property key flagging an explicit timestamp.
///
/// Sent as `_d=1` when the encoder injects its own default timestamp.
pub const TIMESTAMP_FLAG_KEY: &str = "_d";

/// Reserved property key carrying the epoch-seconds timestamp value.
pub const TIMESTAMP_VALUE_KEY: &str = "_t";
