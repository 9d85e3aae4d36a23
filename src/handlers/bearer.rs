use crate::core::error::ServiceError;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;

fn missing_header() -> ServiceError {
    ServiceError::Auth("Missing or invalid Authorization header".to_string())
}

/// Pull the bearer token out of the `Authorization` header. Every
/// authenticated endpoint goes through here; the token itself is checked
/// against the backend afterwards.
pub fn bearer_token(headers: &HeaderMap) -> Result<String, ServiceError> {
    let value = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(missing_header)?;

    let token = value.strip_prefix("Bearer ").ok_or_else(missing_header)?.trim();
    if token.is_empty() {
        return Err(missing_header());
    }

    Ok(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value.parse().unwrap());
        headers
    }

    #[test]
    fn test_extracts_bearer_token() {
        let headers = headers_with("Bearer abc123");
        assert_eq!(bearer_token(&headers).unwrap(), "abc123");
    }

    #[test]
    fn test_missing_header_is_auth_error() {
        let err = bearer_token(&HeaderMap::new()).unwrap_err();
        assert!(matches!(err, ServiceError::Auth(_)));
    }

    #[test]
    fn test_rejects_other_schemes() {
        let err = bearer_token(&headers_with("Basic dXNlcjpwdw==")).unwrap_err();
        assert!(matches!(err, ServiceError::Auth(_)));
    }

    #[test]
    fn test_rejects_empty_token() {
        let err = bearer_token(&headers_with("Bearer ")).unwrap_err();
        assert!(matches!(err, ServiceError::Auth(_)));
    }
}
