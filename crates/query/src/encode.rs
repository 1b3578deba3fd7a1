//! Percent-encoding in the tracking API's wire variant.
//!
//! The tracking endpoints expect a stricter encoding than ordinary form
//! encoding: space is `%20` (never `+`), `*` is `%2A`, and `~` stays
//! literal. ASCII alphanumerics and `-`, `_`, `.` pass through unchanged;
//! every other byte of the value's UTF-8 form becomes a `%XX` triplet.
//!
//! Encoding a `&str` is total: there is no failure path, and every input
//! produces a valid query-safe string.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters escaped in tracking query values.
///
/// NOTE: `*` must stay in this set (`%2A`) and `~` must stay out of it
/// (literal); the server-side decoders rely on both.
const QUERY_VALUE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode a value for inclusion in a tracking query.
///
/// # Example
///
/// ```
/// use metrik_query::encode;
///
/// assert_eq!(encode("a b*c~d"), "a%20b%2Ac~d");
/// ```
#[inline]
#[must_use]
pub fn encode(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE_SET).to_string()
}

/// Percent-encode a user identity.
///
/// Pass-through to [`encode`]; kept as a named operation so the identity
/// encoding can diverge from the generic one without touching callers.
#[inline]
#[must_use]
pub fn encode_identity(identity: &str) -> String {
    encode(identity)
}

/// Percent-encode an event name.
///
/// Pass-through to [`encode`], kept distinct for the same reason as
/// [`encode_identity`].
#[inline]
#[must_use]
pub fn encode_event(name: &str) -> String {
    encode(name)
}
