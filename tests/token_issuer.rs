//! Token issuer integration tests

use assert_matches::assert_matches;
use globetrotter::backend::{BackendError, Claims, ErrorKind, TokenIssuer, User};
use globetrotter::shared::AppConfig;
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use pretty_assertions::assert_eq;
use serde_json::Value;

const SECRET: &str = "integration-secret";

fn rich_user() -> User {
    User {
        user_id: 17,
        username: "wanderer".to_string(),
        first_name: Some("Ibn".to_string()),
        last_name: Some("Battuta".to_string()),
        email: Some("ibn@example.com".to_string()),
        is_admin: true,
    }
}

/// Decode the payload as untyped JSON so no field can hide behind `Claims`
fn payload(token: &str) -> serde_json::Map<String, Value> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.required_spec_claims.clear();
    validation.validate_exp = false;

    let data = decode::<Value>(token, &DecodingKey::from_secret(SECRET.as_bytes()), &validation)
        .expect("token decodes");
    match data.claims {
        Value::Object(map) => map,
        other => panic!("Expected object payload, got {:?}", other),
    }
}

#[test]
fn test_payload_contains_only_user_id_and_username() {
    let issuer = TokenIssuer::new(SECRET).unwrap();
    let token = issuer.issue(&rich_user()).unwrap();

    let payload = payload(&token);
    let mut keys: Vec<&str> = payload.keys().map(String::as_str).collect();
    keys.sort_unstable();

    assert_eq!(keys, vec!["user_id", "username"]);
    assert_eq!(payload["user_id"], 17);
    assert_eq!(payload["username"], "wanderer");
}

#[test]
fn test_token_is_hs256_without_expiry() {
    let token = TokenIssuer::new(SECRET).unwrap().issue(&rich_user()).unwrap();

    assert_eq!(decode_header(&token).unwrap().alg, Algorithm::HS256);
    assert!(!payload(&token).contains_key("exp"));
}

#[test]
fn test_issuer_from_config_round_trips() {
    let config = AppConfig::builder().secret_key(SECRET).build().unwrap();
    let issuer = TokenIssuer::from_config(&config).unwrap();

    let token = issuer.issue(&rich_user()).unwrap();

    assert_eq!(
        issuer.verify(&token).unwrap(),
        Claims { user_id: 17, username: "wanderer".to_string() }
    );
}

#[test]
fn test_missing_secret_is_config_error() {
    let config = AppConfig::builder().build().unwrap();
    let err = TokenIssuer::from_config(&config).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Config);
    assert_eq!(err.to_string(), "missing value: SECRET_KEY");
}

#[test]
fn test_tampered_token_is_rejected() {
    let issuer = TokenIssuer::new(SECRET).unwrap();
    let token = issuer.issue(&rich_user()).unwrap();

    let forged = TokenIssuer::new("attacker").unwrap().issue(&User::new(1, "root")).unwrap();
    let forged_payload = forged.split('.').nth(1).unwrap();

    let mut parts: Vec<&str> = token.split('.').collect();
    parts[1] = forged_payload;

    assert_matches!(issuer.verify(&parts.join(".")), Err(BackendError::Token(_)));
}
