//! Advisory diagnostics for dropped property entries.
//!
//! The encoder never fails a call: entries that violate the property rules
//! are excluded from the output and reported through an injectable
//! [`DiagnosticSink`]. The default sink forwards to `tracing` at WARN.

use thiserror::Error;

use crate::properties::MAX_ENCODED_KEY_LENGTH;

/// Advisory warning emitted while encoding a property map.
///
/// Diagnostics never surface as errors to the caller; they describe entries
/// the encoder dropped from the output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// Property key was the empty string
    #[error("property keys must not be empty strings, dropping property")]
    EmptyPropertyKey,

    /// Percent-encoded property key exceeded [`MAX_ENCODED_KEY_LENGTH`]
    #[error(
        "property key cannot be longer than {MAX_ENCODED_KEY_LENGTH} characters when URL \
         escaped: the submitted key is {key:?}, the escaped key is {encoded_key:?} \
         ({encoded_len} characters), dropping property"
    )]
    PropertyKeyTooLong {
        /// Raw key as supplied by the caller
        key: String,
        /// Percent-encoded form of the key
        encoded_key: String,
        /// Length of the encoded form
        encoded_len: usize,
    },

    /// Property value was the empty string
    #[error("property values must not be empty strings, dropping property {key:?}")]
    EmptyPropertyValue {
        /// Key of the dropped entry
        key: String,
    },
}

/// Receiver for advisory encoding diagnostics.
///
/// Implementations must not panic: a sink failure must never fail the
/// encoding call it was reporting on.
pub trait DiagnosticSink: Send + Sync {
    /// Report one advisory diagnostic.
    fn report(&self, diagnostic: &Diagnostic);
}

/// Default sink, forwards diagnostics to `tracing` at WARN level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        tracing::warn!(%diagnostic, "dropping invalid property");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_empty_property_key() {
        let diagnostic = Diagnostic::EmptyPropertyKey;
        assert_eq!(
            diagnostic.to_string(),
            "property keys must not be empty strings, dropping property"
        );
    }

    #[test]
    fn test_display_property_key_too_long() {
        let diagnostic = Diagnostic::PropertyKeyTooLong {
            key: "a key".to_string(),
            encoded_key: "a%20key".to_string(),
            encoded_len: 7,
        };
        let message = diagnostic.to_string();
        assert!(message.contains("255 characters"));
        assert!(message.contains("\"a key\""));
        assert!(message.contains("\"a%20key\""));
        assert!(message.contains("(7 characters)"));
    }

    #[test]
    fn test_display_empty_property_value() {
        let diagnostic = Diagnostic::EmptyPropertyValue {
            key: "color".to_string(),
        };
        assert_eq!(
            diagnostic.to_string(),
            "property values must not be empty strings, dropping property \"color\""
        );
    }
}
