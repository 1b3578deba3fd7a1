//! Tests for the percent-encoder

use crate::encode::{encode, encode_event, encode_identity};

// =============================================================================
// Wire-variant characters
// =============================================================================

#[test]
fn test_encode_space_as_percent_triplet() {
    assert_eq!(encode(" "), "%20");
}

#[test]
fn test_encode_star_escaped() {
    assert_eq!(encode("*"), "%2A");
}

#[test]
fn test_encode_tilde_literal() {
    assert_eq!(encode("~"), "~");
}

#[test]
fn test_encode_mixed_variant_characters() {
    assert_eq!(encode("a b*c~d"), "a%20b%2Ac~d");
}

// =============================================================================
// Unreserved set
// =============================================================================

#[test]
fn test_encode_alphanumerics_pass_through() {
    assert_eq!(
        encode("abcXYZ0123456789"),
        "abcXYZ0123456789"
    );
}

#[test]
fn test_encode_dash_underscore_dot_pass_through() {
    assert_eq!(encode("a-b_c.d"), "a-b_c.d");
}

#[test]
fn test_encode_empty_string() {
    assert_eq!(encode(""), "");
}

// =============================================================================
// Reserved and unsafe characters
// =============================================================================

#[test]
fn test_encode_query_delimiters() {
    assert_eq!(encode("&"), "%26");
    assert_eq!(encode("="), "%3D");
    assert_eq!(encode("?"), "%3F");
}

#[test]
fn test_encode_plus_is_not_space() {
    // A literal plus must survive as %2B so the server does not decode it
    // back to a space.
    assert_eq!(encode("+"), "%2B");
    assert_eq!(encode("1+1"), "1%2B1");
}

#[test]
fn test_encode_slash_and_percent() {
    assert_eq!(encode("/"), "%2F");
    assert_eq!(encode("%"), "%25");
}

#[test]
fn test_encode_non_ascii_utf8_bytes() {
    assert_eq!(encode("é"), "%C3%A9");
    assert_eq!(encode("日"), "%E6%97%A5");
}

// =============================================================================
// Named pass-throughs
// =============================================================================

#[test]
fn test_encode_identity_matches_encode() {
    assert_eq!(encode_identity("user one"), encode("user one"));
    assert_eq!(encode_identity("user one"), "user%20one");
}

#[test]
fn test_encode_event_matches_encode() {
    assert_eq!(encode_event("Purchased Item*"), encode("Purchased Item*"));
    assert_eq!(encode_event("Purchased Item*"), "Purchased%20Item%2A");
}
