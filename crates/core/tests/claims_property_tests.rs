//! Property tests for the unverified token decode.
//!
//! The decode is a best-effort convenience and must hold two properties
//! under arbitrary input: a well-formed payload round-trips exactly, and
//! no input, however malformed, makes it panic.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use posturekit_core::auth::{decode_claims, TokenClaims};
use posturekit_core::professionals::PlanTier;
use proptest::prelude::*;

fn plan_strategy() -> impl Strategy<Value = Option<PlanTier>> {
    prop_oneof![
        Just(None),
        Just(Some(PlanTier::Free)),
        Just(Some(PlanTier::Professional)),
        Just(Some(PlanTier::Clinic)),
    ]
}

fn claims_strategy() -> impl Strategy<Value = TokenClaims> {
    (
        "[a-z0-9-]{1,24}",
        "[a-z0-9.]{1,16}@[a-z0-9.]{1,16}",
        proptest::option::of("[A-Za-zÀ-ú. ]{1,40}"),
        plan_strategy(),
    )
        .prop_map(|(id, email, name, plan)| TokenClaims {
            id,
            email,
            name,
            plan,
        })
}

proptest! {
    #[test]
    fn decode_round_trips_encoded_claims(claims in claims_strategy()) {
        let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&claims).unwrap());
        let token = format!("header.{}.signature", payload);
        prop_assert_eq!(decode_claims(&token), Some(claims));
    }

    #[test]
    fn decode_never_panics_on_arbitrary_input(token in ".{0,200}") {
        // Any outcome is fine; reaching this line is the property.
        let _ = decode_claims(&token);
    }

    #[test]
    fn decode_rejects_wrong_segment_counts(
        payload in "[A-Za-z0-9_-]{0,64}",
        extra in "[A-Za-z0-9_-]{1,16}",
    ) {
        prop_assert_eq!(decode_claims(&payload), None);
        let four = format!("h.{}.s.{}", payload, extra);
        prop_assert_eq!(decode_claims(&four), None);
    }
}
