use crate::domain::errors::DomainError;
use reqwest::StatusCode;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

pub fn map_reqwest(err: reqwest::Error) -> DomainError {
    if err.is_timeout() {
        return DomainError::Source(format!("request timed out: {err}"));
    }
    if err.is_decode() {
        return DomainError::Source(format!("unexpected response body: {err}"));
    }
    DomainError::Source(err.to_string())
}

/// Translate a non-success response into a domain error, keeping the server's
/// `message` when the body carries one.
pub fn map_status(status: StatusCode, body: &str) -> DomainError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unknown status")
                .to_string()
        });

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            DomainError::Unauthorized(format!("{status}: {message}"))
        }
        _ => DomainError::Source(format!("{status}: {message}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_statuses_are_unauthorized() {
        let err = map_status(StatusCode::UNAUTHORIZED, r#"{"message":"Invalid key"}"#);
        assert!(matches!(err, DomainError::Unauthorized(msg) if msg.contains("Invalid key")));

        let err = map_status(StatusCode::FORBIDDEN, "");
        assert!(matches!(err, DomainError::Unauthorized(_)));
    }

    #[test]
    fn other_statuses_fall_back_to_reason() {
        let err = map_status(StatusCode::BAD_GATEWAY, "<html>oops</html>");
        assert!(matches!(err, DomainError::Source(msg) if msg.contains("Bad Gateway")));
    }
}
