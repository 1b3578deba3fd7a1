//! Metrik Query Encoder
//!
//! This crate builds the percent-encoded query strings the Metrik mobile
//! SDK sends to its tracking endpoints. It is the encoding layer between
//! application-level calls ("record this event with these properties") and
//! the transport layer that issues the HTTP GET; the encoder itself
//! performs no I/O.
//!
//! # Architecture
//!
//! - [`encode`] - percent-encoding in the tracking API's wire variant
//! - [`QueryEncoder`] - assembles the event (`/e`), properties (`/s`) and
//!   alias (`/a`) queries from immutable [`Configuration`]
//! - [`DiagnosticSink`] - injectable receiver for advisory warnings about
//!   dropped property entries
//!
//! # Design Principles
//!
//! - **Never blocks the send pipeline**: no public operation returns an
//!   error. Invalid property entries are excluded individually and reported
//!   through the diagnostic sink; the query is still produced.
//! - **Immutable after construction**: a [`QueryEncoder`] holds only its
//!   configuration and sink, so it is safe to share across threads.
//! - **No scheme/host**: the produced string is a path+query suffix; the
//!   transport layer owns the endpoint address.
//!
//! # Quick Start
//!
//! ```
//! use metrik_query::{Configuration, QueryEncoder};
//!
//! let encoder = QueryEncoder::new(Configuration::new(
//!     "abc123",
//!     "and-2.0",
//!     "TestAgent/1.0",
//! ));
//!
//! let query = encoder.create_alias_query("alias1", "user1");
//! assert_eq!(query, "/a?_k=abc123&_c=and-2.0&_u=TestAgent/1.0&_p=alias1&_n=user1");
//! ```
//!
//! # Wire Format
//!
//! All three queries share the shape
//! `{path}?_k={key}&_c={clientType}&_u={userAgent}&_p=..[&_n=..][&_d=1&_t=..][&props]`.
//! The parameter names and paths are part of the server contract and must
//! not change; see [`EVENT_PATH`], [`PROPERTIES_PATH`] and [`ALIAS_PATH`].

mod diagnostic;
mod encode;
mod endpoint;
mod properties;
mod query;

pub use diagnostic::{Diagnostic, DiagnosticSink, TracingSink};
pub use encode::{encode, encode_event, encode_identity};
pub use endpoint::{
    ALIAS_PATH, EVENT_PATH, PROPERTIES_PATH, TIMESTAMP_FLAG_KEY, TIMESTAMP_VALUE_KEY,
};
pub use properties::MAX_ENCODED_KEY_LENGTH;
pub use query::{Configuration, QueryEncoder};

// Test modules - only compiled during testing
#[cfg(test)]
mod encode_test;
#[cfg(test)]
pub(crate) mod test_sink;
