//! Property-map encoding.
//!
//! Turns a property map into the `&key=value&key2=value2` suffix appended
//! to an event or properties query. Each entry is validated independently:
//! an invalid entry is dropped and reported through the diagnostic sink,
//! and never aborts processing of the remaining entries.

use std::collections::HashMap;

use crate::diagnostic::{Diagnostic, DiagnosticSink};
use crate::encode::encode;

/// Maximum length of a percent-encoded property key.
///
/// The limit applies to the encoded form, not the raw key: a short key made
/// of multi-byte or escaped characters can still exceed it.
pub const MAX_ENCODED_KEY_LENGTH: usize = 255;

/// Encode a property map into a `&key=value` suffix.
///
/// Returns `""` for an absent or empty map, so the result can always be
/// appended to a query as-is. Segments follow the map's traversal order,
/// which is unspecified; callers must not rely on segment order.
pub(crate) fn encode_properties(
    properties: Option<&HashMap<String, String>>,
    sink: &dyn DiagnosticSink,
) -> String {
    let Some(properties) = properties else {
        return String::new();
    };
    if properties.is_empty() {
        return String::new();
    }

    let mut suffix = String::new();

    for (key, value) in properties {
        if key.is_empty() {
            sink.report(&Diagnostic::EmptyPropertyKey);
            continue;
        }

        let encoded_key = encode(key);
        if encoded_key.len() > MAX_ENCODED_KEY_LENGTH {
            sink.report(&Diagnostic::PropertyKeyTooLong {
                key: key.clone(),
                encoded_len: encoded_key.len(),
                encoded_key,
            });
            continue;
        }

        // Emptiness is checked on the raw value, before encoding.
        if value.is_empty() {
            sink.report(&Diagnostic::EmptyPropertyValue { key: key.clone() });
            continue;
        }

        suffix.push('&');
        suffix.push_str(&encoded_key);
        suffix.push('=');
        suffix.push_str(&encode(value));
    }

    suffix
}
