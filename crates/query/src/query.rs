//! Query assembly for the tracking endpoints.
//!
//! [`QueryEncoder`] combines immutable [`Configuration`] with the
//! percent-encoder and property-map encoder to produce the three query
//! shapes the tracking API accepts. Each call is a pure transformation;
//! the encoder retains no state across calls.

use std::collections::HashMap;
use std::fmt::Write;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::diagnostic::{DiagnosticSink, TracingSink};
use crate::encode::{encode_event, encode_identity};
use crate::endpoint::{
    ALIAS_PATH, EVENT_PATH, PROPERTIES_PATH, TIMESTAMP_FLAG_KEY, TIMESTAMP_VALUE_KEY,
};
use crate::properties;

/// Immutable encoder configuration, fixed at construction.
///
/// All three values are inserted into every query verbatim, **without**
/// percent-encoding: they are static, operator-supplied configuration, and
/// the SDK integrator is responsible for keeping them URL-safe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Product key identifying the account (`_k`)
    pub key: String,

    /// Client type identifier and version, e.g. `and-2.0` (`_c`)
    pub client_type: String,

    /// User-agent string reported with every query (`_u`)
    pub user_agent: String,
}

impl Configuration {
    /// Create a new configuration
    pub fn new(
        key: impl Into<String>,
        client_type: impl Into<String>,
        user_agent: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            client_type: client_type.into(),
            user_agent: user_agent.into(),
        }
    }
}

/// Builds percent-encoded query strings for the tracking endpoints.
///
/// The encoder is immutable after construction and performs no I/O; the
/// transport layer takes each returned string verbatim and issues the HTTP
/// GET. Calls are independent and safe from multiple threads.
///
/// # Example
///
/// ```
/// use metrik_query::{Configuration, QueryEncoder};
///
/// let encoder = QueryEncoder::new(Configuration::new(
///     "abc123",
///     "and-2.0",
///     "TestAgent/1.0",
/// ));
///
/// let query = encoder.create_event_query("Purchased Item", None, "user1", 1_000_000_000);
/// assert_eq!(
///     query,
///     "/e?_k=abc123&_c=and-2.0&_u=TestAgent/1.0&_p=user1&_n=Purchased%20Item&_d=1&_t=1000000000"
/// );
/// ```
pub struct QueryEncoder {
    config: Configuration,
    sink: Arc<dyn DiagnosticSink>,
}

impl QueryEncoder {
    /// Create an encoder that reports diagnostics through `tracing`
    pub fn new(config: Configuration) -> Self {
        Self::with_sink(config, Arc::new(TracingSink))
    }

    /// Create an encoder with an injected diagnostic sink
    pub fn with_sink(config: Configuration, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { config, sink }
    }

    /// The configuration this encoder was built with
    #[inline]
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Assemble an alias query (`/a`).
    ///
    /// Applies `alias` to `identity`. On the wire `_p` carries the alias
    /// and `_n` the identity; the mapping reads as inverted relative to the
    /// event and properties queries, but it is what the server decodes and
    /// must be preserved exactly.
    pub fn create_alias_query(&self, alias: &str, identity: &str) -> String {
        format!(
            "{}?_k={}&_c={}&_u={}&_p={}&_n={}",
            ALIAS_PATH,
            self.config.key,
            self.config.client_type,
            self.config.user_agent,
            encode_identity(alias),
            encode_identity(identity),
        )
    }

    /// Assemble an event query (`/e`).
    ///
    /// `timestamp` is epoch seconds and is injected as `&_d=1&_t={timestamp}`
    /// only when `properties` does not already carry both [`TIMESTAMP_FLAG_KEY`]
    /// and [`TIMESTAMP_VALUE_KEY`]; caller-supplied `_d`/`_t` entries are not
    /// stripped and flow through property validation like any other key.
    pub fn create_event_query(
        &self,
        name: &str,
        properties: Option<&HashMap<String, String>>,
        identity: &str,
        timestamp: i64,
    ) -> String {
        let mut query = format!(
            "{}?_k={}&_c={}&_u={}&_p={}&_n={}",
            EVENT_PATH,
            self.config.key,
            self.config.client_type,
            self.config.user_agent,
            encode_identity(identity),
            encode_event(name),
        );

        if !properties_contain_timestamp(properties) {
            // Infallible for String; discard the fmt plumbing result.
            let _ = write!(query, "&_d=1&_t={timestamp}");
        }

        query.push_str(&self.encode_properties(properties));

        query
    }

    /// Assemble a properties query (`/s`).
    ///
    /// Identical to [`create_event_query`](Self::create_event_query) but
    /// with no event name and no `_n` field.
    pub fn create_properties_query(
        &self,
        properties: Option<&HashMap<String, String>>,
        identity: &str,
        timestamp: i64,
    ) -> String {
        let mut query = format!(
            "{}?_k={}&_c={}&_u={}&_p={}",
            PROPERTIES_PATH,
            self.config.key,
            self.config.client_type,
            self.config.user_agent,
            encode_identity(identity),
        );

        if !properties_contain_timestamp(properties) {
            let _ = write!(query, "&_d=1&_t={timestamp}");
        }

        query.push_str(&self.encode_properties(properties));

        query
    }

    /// Encode a property map into a `&key=value` suffix.
    ///
    /// Invalid entries are dropped individually and reported through this
    /// encoder's diagnostic sink; see
    /// [`MAX_ENCODED_KEY_LENGTH`](crate::MAX_ENCODED_KEY_LENGTH) for the
    /// key limit.
    pub fn encode_properties(&self, properties: Option<&HashMap<String, String>>) -> String {
        properties::encode_properties(properties, self.sink.as_ref())
    }
}

/// True if the map already carries an explicit timestamp.
///
/// Both sentinel keys must be present; their values are not inspected.
fn properties_contain_timestamp(properties: Option<&HashMap<String, String>>) -> bool {
    properties.is_some_and(|props| {
        props.contains_key(TIMESTAMP_FLAG_KEY) && props.contains_key(TIMESTAMP_VALUE_KEY)
    })
}
