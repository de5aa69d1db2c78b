use base64::Engine as _;
use chrono::{DateTime, Utc};

use crate::error::AuthError;

/// Decode the `exp` claim of a JWT without verifying its signature.
///
/// Best-effort: used only to report expiry in `pcl auth status`.
///
/// # Errors
///
/// Returns [`AuthError::InvalidToken`] if the token is not a three-part JWT
/// or the `exp` claim is missing or malformed.
pub fn decode_expiry(jwt: &str) -> Result<DateTime<Utc>, AuthError> {
    let parts: Vec<&str> = jwt.split('.').collect();
    if parts.len() != 3 {
        return Err(AuthError::InvalidToken("not a JWT".into()));
    }
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(parts[1].trim_end_matches('='))
        .map_err(|e| AuthError::InvalidToken(format!("base64 decode failed: {e}")))?;
    let value: serde_json::Value = serde_json::from_slice(&payload)
        .map_err(|e| AuthError::InvalidToken(format!("JSON parse failed: {e}")))?;
    let exp = value["exp"]
        .as_i64()
        .ok_or_else(|| AuthError::InvalidToken("missing exp claim".into()))?;
    DateTime::from_timestamp(exp, 0)
        .ok_or_else(|| AuthError::InvalidToken("invalid exp timestamp".into()))
}

/// True when the token's `exp` is at or before `now`. Tokens without a
/// readable `exp` are treated as unexpired; the backend has the final say.
#[must_use]
pub fn is_expired(jwt: &str, now: DateTime<Utc>) -> bool {
    decode_expiry(jwt).is_ok_and(|exp| exp <= now)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_jwt_with_exp(exp: i64) -> String {
        let engine = base64::engine::general_purpose::URL_SAFE_NO_PAD;
        let header = engine.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = engine.encode(format!(r#"{{"sub":"1","exp":{exp}}}"#));
        let signature = engine.encode("sig");
        format!("{header}.{payload}.{signature}")
    }

    #[test]
    fn decodes_exp_claim() {
        let exp = Utc::now().timestamp() + 3600;
        let decoded = decode_expiry(&make_jwt_with_exp(exp)).unwrap();
        assert_eq!(decoded.timestamp(), exp);
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert!(decode_expiry("not-a-jwt").is_err());
        assert!(decode_expiry("a.!!!.c").is_err());
    }

    #[test]
    fn missing_exp_is_an_error_but_not_expired() {
        let engine = base64::engine::general_purpose::URL_SAFE_NO_PAD;
        let jwt = format!("{}.{}.{}", engine.encode("{}"), engine.encode(r#"{"sub":"1"}"#), "x");
        assert!(decode_expiry(&jwt).is_err());
        assert!(!is_expired(&jwt, Utc::now()));
    }

    #[test]
    fn past_exp_is_expired() {
        let jwt = make_jwt_with_exp(Utc::now().timestamp() - 10);
        assert!(is_expired(&jwt, Utc::now()));
    }
}
