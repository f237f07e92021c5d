//! Best-effort bearer token inspection.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::professionals::PlanTier;

/// Identity claims carried in the token payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenClaims {
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<PlanTier>,
}

/// Decodes the payload segment of a bearer token WITHOUT verifying its
/// signature.
///
/// This exists for exactly one purpose: when the backend is unreachable,
/// the session can still display who is signed in. The result is
/// display-only and must never feed an authorization decision; the
/// signature is not checked and the claims are whatever the token says
/// they are.
///
/// Malformed input (wrong segment count, invalid base64, invalid JSON)
/// yields `None`; this never panics.
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return None;
    }
    let payload = URL_SAFE_NO_PAD.decode(segments[1]).ok()?;
    serde_json::from_slice(&payload).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(claims: &TokenClaims) -> String {
        let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(claims).unwrap());
        format!("header.{}.signature", payload)
    }

    #[test]
    fn test_round_trip() {
        let claims = TokenClaims {
            id: "prof-001".to_string(),
            email: "joao.silva@example.com".to_string(),
            name: Some("Dr. João Silva".to_string()),
            plan: Some(PlanTier::Professional),
        };
        assert_eq!(decode_claims(&encode(&claims)), Some(claims));
    }

    #[test]
    fn test_optional_claims_may_be_absent() {
        let payload = URL_SAFE_NO_PAD.encode(r#"{"id":"prof-001","email":"a@b.c"}"#);
        let token = format!("header.{}.signature", payload);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.name, None);
        assert_eq!(claims.plan, None);
    }

    #[test]
    fn test_wrong_segment_count_is_none() {
        assert_eq!(decode_claims("only-one-segment"), None);
        assert_eq!(decode_claims("two.segments"), None);
        assert_eq!(decode_claims("four.whole.token.segments"), None);
        assert_eq!(decode_claims(""), None);
    }

    #[test]
    fn test_invalid_base64_is_none() {
        assert_eq!(decode_claims("header.!!!not-base64!!!.signature"), None);
    }

    #[test]
    fn test_invalid_json_payload_is_none() {
        let payload = URL_SAFE_NO_PAD.encode("not json at all");
        let token = format!("header.{}.signature", payload);
        assert_eq!(decode_claims(&token), None);
    }
}
