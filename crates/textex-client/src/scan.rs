//! # Compat JSON Field Scanner
//!
//! A minimal substring scanner for pulling single fields out of JSON-looking
//! text without a full parse.
//!
//! Regular API responses are deserialized with `serde_json` into the typed
//! structs in [`crate::types`]. This module exists for the places where the
//! backend returns loosely-shaped bodies (error messages, legacy endpoints)
//! and the historical extraction behavior must be matched exactly.
//!
//! ## Known defects (kept deliberately)
//!
//! The scanner's quirks are its contract; existing callers and stored data
//! depend on them:
//!
//! - The *first textual occurrence* of `"key":` wins, regardless of nesting
//!   depth. `{"outer":{"total":1},"total":2}` yields `"1"` for `total`.
//! - String values stop at the next quote with no escape decoding, so an
//!   embedded `\"` truncates the result.
//! - [`extract_objects`] pairs each `{` with the *first* following `}`, not
//!   the balanced one, so array elements containing nested objects break.
//!
//! Do not use this module as a template for new parsing code.

/// Extracts a single scalar field from a JSON-looking blob.
///
/// Searches for the literal pattern `"<key>":`. A quoted value is returned
/// up to the next quote; a bare token (number, bool, null) is returned up to
/// the next `,`, `}` or `]`, trimmed of surrounding whitespace.
///
/// Returns an empty string when the key is absent or the structure is
/// malformed; it never panics and makes no distinction between the two.
///
/// # Examples
///
/// ```
/// use textex_client::scan::extract_field;
///
/// let body = r#"{"id":"42","fileName":"report.pdf"}"#;
/// assert_eq!(extract_field(body, "fileName"), "report.pdf");
///
/// let body = r#"{"total":7,"active":5}"#;
/// assert_eq!(extract_field(body, "active"), "5");
/// ```
#[must_use]
pub fn extract_field(json: &str, key: &str) -> String {
    let pattern = format!("\"{}\":", key);
    let Some(pos) = json.find(&pattern) else {
        return String::new();
    };

    let rest = &json[pos + pattern.len()..];
    let rest = rest.trim_start_matches(' ');

    if let Some(stripped) = rest.strip_prefix('"') {
        // String value: up to the next quote, escaped or not.
        match stripped.find('"') {
            Some(end) => stripped[..end].to_string(),
            None => String::new(),
        }
    } else {
        // Bare token: up to the next comma or closing bracket.
        let end = rest
            .find([',', '}', ']'])
            .unwrap_or(rest.len());
        rest[..end].trim().to_string()
    }
}

/// Extracts a human-readable message from an error response body.
///
/// Tries the `message` field, then `error`, then falls back to the trimmed
/// raw body. Always returns *something* displayable.
#[must_use]
pub fn extract_message(json: &str) -> String {
    let message = extract_field(json, "message");
    if !message.is_empty() {
        return message;
    }
    let error = extract_field(json, "error");
    if !error.is_empty() {
        return error;
    }
    json.trim().to_string()
}

/// Splits a JSON array blob into successive `{…}` object spans.
///
/// Each span runs from a `{` to the *first* following `}` (not the balanced
/// one). Callers apply [`extract_field`] to each span. Pass the array portion
/// of the document; anything before the first `{` is skipped.
#[must_use]
pub fn extract_objects(json: &str) -> Vec<&str> {
    let mut spans = Vec::new();
    let mut offset = 0;

    while let Some(open) = json[offset..].find('{') {
        let start = offset + open;
        let Some(close) = json[start..].find('}') else {
            break;
        };
        let end = start + close;
        spans.push(&json[start..=end]);
        offset = end + 1;
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_field() {
        let body = r#"{"id":"42","fileName":"report.pdf"}"#;
        assert_eq!(extract_field(body, "fileName"), "report.pdf");
        assert_eq!(extract_field(body, "id"), "42");
    }

    #[test]
    fn test_bare_numeric_field() {
        let body = r#"{"total":7,"active":5}"#;
        assert_eq!(extract_field(body, "total"), "7");
        assert_eq!(extract_field(body, "active"), "5");
    }

    #[test]
    fn test_bare_token_trims_whitespace() {
        let body = r#"{"count": 12 , "ok": true }"#;
        assert_eq!(extract_field(body, "count"), "12");
        assert_eq!(extract_field(body, "ok"), "true");
    }

    #[test]
    fn test_absent_key_is_empty() {
        let body = r#"{"id":"42"}"#;
        assert_eq!(extract_field(body, "missing"), "");
    }

    #[test]
    fn test_malformed_is_empty() {
        assert_eq!(extract_field("not json at all", "id"), "");
        assert_eq!(extract_field(r#"{"id":"unterminated"#, "id"), "");
    }

    #[test]
    fn test_nested_shadowing_first_occurrence_wins() {
        // Known defect, pinned on purpose: the inner object's field is found
        // first because matching is purely textual.
        let body = r#"{"outer":{"total":1},"total":2}"#;
        assert_eq!(extract_field(body, "total"), "1");
    }

    #[test]
    fn test_embedded_escaped_quote_truncates() {
        // Known defect: no escape decoding, the value stops at the first quote.
        let body = r#"{"name":"a\"b"}"#;
        assert_eq!(extract_field(body, "name"), r#"a\"#);
    }

    #[test]
    fn test_space_after_colon() {
        let body = r#"{"role": "Admin"}"#;
        assert_eq!(extract_field(body, "role"), "Admin");
    }

    #[test]
    fn test_null_and_negative_tokens() {
        let body = r#"{"value":null,"delta":-3}"#;
        assert_eq!(extract_field(body, "value"), "null");
        assert_eq!(extract_field(body, "delta"), "-3");
    }

    #[test]
    fn test_extract_message_prefers_message_field() {
        assert_eq!(
            extract_message(r#"{"message":"user not found"}"#),
            "user not found"
        );
        assert_eq!(extract_message(r#"{"error":"bad request"}"#), "bad request");
        assert_eq!(extract_message("  plain text body "), "plain text body");
    }

    #[test]
    fn test_extract_objects_flat_array() {
        let body = r#"[{"id":"1","name":"a"},{"id":"2","name":"b"}]"#;
        let spans = extract_objects(body);
        assert_eq!(spans.len(), 2);
        assert_eq!(extract_field(spans[0], "id"), "1");
        assert_eq!(extract_field(spans[1], "name"), "b");
    }

    #[test]
    fn test_extract_objects_unbalanced_defect() {
        // Known defect: the first `}` closes the span, so a nested object
        // splits its parent element in two.
        let body = r#"[{"id":"1","meta":{"k":"v"}},{"id":"2"}]"#;
        let spans = extract_objects(body);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0], r#"{"id":"1","meta":{"k":"v"}"#);
        assert_eq!(extract_field(spans[1], "id"), "2");
    }

    #[test]
    fn test_extract_objects_empty_input() {
        assert!(extract_objects("[]").is_empty());
        assert!(extract_objects("").is_empty());
    }
}
