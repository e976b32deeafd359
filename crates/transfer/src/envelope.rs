//! Provider error envelope classification.
//!
//! The provider can signal an application-level failure inside an
//! HTTP 200 body by returning `{"error_code": n, "error_msg": "..."}`.
//! Not every response carries that shape, so a body that does not
//! decode as the envelope is a provider-specific success payload and
//! passes through unchanged.

use serde::Deserialize;

/// The provider's `{error_code, error_msg}` wrapper.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub error_code: i64,
    #[serde(default)]
    pub error_msg: String,
}

/// Classifies a raw response body.
///
/// Returns `Some((code, message))` only when the body decodes as the
/// envelope shape and carries a nonzero code. Decode failure and a
/// zero code both mean success.
pub fn classify(body: &[u8]) -> Option<(i64, String)> {
    match serde_json::from_slice::<ErrorEnvelope>(body) {
        Ok(env) if env.error_code != 0 => Some((env.error_code, env.error_msg)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_code_is_success() {
        assert_eq!(classify(br#"{"error_code":0}"#), None);
    }

    #[test]
    fn nonzero_code_is_failure_with_both_fields() {
        let body = br#"{"error_code":31045,"error_msg":"user not exists"}"#;
        assert_eq!(
            classify(body),
            Some((31045, "user not exists".to_string()))
        );
    }

    #[test]
    fn missing_code_defaults_to_success() {
        assert_eq!(classify(br#"{"path":"/apps/x","size":5}"#), None);
    }

    #[test]
    fn non_envelope_body_passes_through() {
        assert_eq!(classify(b"not json at all"), None);
        assert_eq!(classify(br#"[1,2,3]"#), None);
        assert_eq!(classify(b""), None);
    }

    #[test]
    fn missing_message_still_classifies() {
        assert_eq!(classify(br#"{"error_code":-6}"#), Some((-6, String::new())));
    }
}
