//! The uniform JSON response envelope.

use serde::Serialize;

/// Response shape shared by every endpoint: `{success, err, message?, count?}`.
///
/// Field names and types are fixed for compatibility with existing clients;
/// absent optional fields are omitted from the serialized body entirely.
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub success: bool,
    pub err: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
}

impl Envelope {
    /// Successful response carrying a counter value.
    pub fn count(count: i64) -> Self {
        Self {
            success: true,
            err: false,
            message: None,
            count: Some(count),
        }
    }

    /// Successful response carrying a message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            err: false,
            message: Some(message.into()),
            count: None,
        }
    }

    /// Error response carrying a message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            err: true,
            message: Some(message.into()),
            count: None,
        }
    }

    /// Body for unmatched routes. Keeps `err: false` despite `success: false`;
    /// existing clients depend on that exact combination.
    pub fn not_found() -> Self {
        Self {
            success: false,
            err: false,
            message: Some("404 not found".to_string()),
            count: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_envelope_omits_message() {
        let json = serde_json::to_value(Envelope::count(6)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"success": true, "err": false, "count": 6})
        );
    }

    #[test]
    fn error_envelope_omits_count() {
        let json = serde_json::to_value(Envelope::error("Invalid slug!")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"success": false, "err": true, "message": "Invalid slug!"})
        );
    }

    #[test]
    fn not_found_envelope_keeps_err_false() {
        let json = serde_json::to_value(Envelope::not_found()).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["err"], false);
        assert_eq!(json["message"], "404 not found");
    }
}
