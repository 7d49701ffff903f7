use serde_json::Value;
use thiserror::Error;

/// Failure categories reported by provider adapters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderErrorKind {
    Auth,
    Quota,
    ModelNotFound,
    Other,
}

impl ProviderErrorKind {
    /// Classify a provider error from its HTTP status and vendor error code.
    ///
    /// A recognized code wins over the status. A bare 404 is `Other`, since
    /// a wrong base URL path looks the same as an unknown model.
    pub fn classify(status: u16, code: Option<&str>) -> Self {
        match code {
            Some("invalid_api_key" | "invalid_authentication" | "authentication_error"
            | "permission_error") => Self::Auth,
            Some("insufficient_quota" | "rate_limit_exceeded" | "rate_limit_error") => Self::Quota,
            Some("model_not_found" | "not_found_error") => Self::ModelNotFound,
            _ => match status {
                401 | 403 => Self::Auth,
                429 => Self::Quota,
                _ => Self::Other,
            },
        }
    }
}

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ProviderError {
    pub kind: ProviderErrorKind,
    pub message: String,
}

impl ProviderError {
    pub fn new(kind: ProviderErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Other, message)
    }

    /// Build an error from a non-success response.
    ///
    /// Both OpenAI and Anthropic wrap failures as `{"error": {"message", "code" | "type"}}`.
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed: Option<Value> = serde_json::from_str(body).ok();
        let error = parsed.as_ref().and_then(|v| v.get("error"));

        let code = error.and_then(|e| {
            e.get("code")
                .and_then(Value::as_str)
                .or_else(|| e.get("type").and_then(Value::as_str))
        });

        let message = error
            .and_then(|e| e.get("message"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    format!("HTTP {}", status)
                } else {
                    format!("HTTP {}: {}", status, trimmed)
                }
            });

        Self::new(ProviderErrorKind::classify(status, code), message)
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::other(format!("Request timed out: {}", err))
        } else if err.is_decode() {
            Self::other(format!("Failed to parse response: {}", err))
        } else {
            Self::other(format!("Request failed: {}", err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_classify() {
        assert_eq!(ProviderErrorKind::classify(401, None), ProviderErrorKind::Auth);
        assert_eq!(ProviderErrorKind::classify(403, None), ProviderErrorKind::Auth);
        assert_eq!(ProviderErrorKind::classify(429, None), ProviderErrorKind::Quota);
        assert_eq!(ProviderErrorKind::classify(404, None), ProviderErrorKind::Other);
        assert_eq!(ProviderErrorKind::classify(500, None), ProviderErrorKind::Other);
        assert_eq!(ProviderErrorKind::classify(400, None), ProviderErrorKind::Other);
    }

    #[test]
    fn vendor_codes_win_over_status() {
        assert_eq!(
            ProviderErrorKind::classify(400, Some("model_not_found")),
            ProviderErrorKind::ModelNotFound
        );
        assert_eq!(
            ProviderErrorKind::classify(400, Some("invalid_api_key")),
            ProviderErrorKind::Auth
        );
        assert_eq!(
            ProviderErrorKind::classify(500, Some("insufficient_quota")),
            ProviderErrorKind::Quota
        );
    }

    #[test]
    fn bare_not_found_is_not_a_model_error() {
        let err = ProviderError::from_response(404, "404 page not found");
        assert_eq!(err.kind, ProviderErrorKind::Other);
        assert_eq!(err.message, "HTTP 404: 404 page not found");

        let err = ProviderError::from_response(
            404,
            r#"{"error":{"message":"The model `gpt-9` does not exist","code":"model_not_found"}}"#,
        );
        assert_eq!(err.kind, ProviderErrorKind::ModelNotFound);
    }

    #[test]
    fn openai_error_body_is_parsed() {
        let body = r#"{"error":{"message":"You exceeded your current quota","type":"insufficient_quota","param":null,"code":"insufficient_quota"}}"#;
        let err = ProviderError::from_response(429, body);
        assert_eq!(err.kind, ProviderErrorKind::Quota);
        assert_eq!(err.message, "You exceeded your current quota");
    }

    #[test]
    fn anthropic_error_type_is_used_when_code_is_absent() {
        let body = r#"{"type":"error","error":{"type":"authentication_error","message":"invalid x-api-key"}}"#;
        let err = ProviderError::from_response(400, body);
        assert_eq!(err.kind, ProviderErrorKind::Auth);
        assert_eq!(err.message, "invalid x-api-key");
    }

    #[test]
    fn non_json_body_keeps_raw_text() {
        let err = ProviderError::from_response(502, "Bad Gateway");
        assert_eq!(err.kind, ProviderErrorKind::Other);
        assert_eq!(err.message, "HTTP 502: Bad Gateway");

        let empty = ProviderError::from_response(503, "");
        assert_eq!(empty.message, "HTTP 503");
    }
}
