//! Response bodies the backend sends that are not domain entities

use serde::Deserialize;

/// Body of a failed write: `{ "error": "..." }`
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Parse a failure body. Anything that is not the expected shape
    /// yields no reason.
    pub fn reason(body: &[u8]) -> Option<String> {
        serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_from_error_field() {
        assert_eq!(
            ErrorBody::reason(br#"{"error": "Missing required fields"}"#),
            Some("Missing required fields".to_string())
        );
    }

    #[test]
    fn test_no_reason_for_other_shapes() {
        assert_eq!(ErrorBody::reason(br#"{"message": "nope"}"#), None);
        assert_eq!(ErrorBody::reason(br#"{"error": 42}"#), None);
        assert_eq!(ErrorBody::reason(b"<html>502 Bad Gateway</html>"), None);
        assert_eq!(ErrorBody::reason(b""), None);
    }
}
