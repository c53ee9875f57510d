use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Claims carried by a session token.
///
/// Field names follow the wire format clients already consume (`userId`, `firstName`).
/// Only `userId`, `role` and `exp` are required; any other signed claim is kept in `extra`
/// so the decoded set round-trips exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub user_id: i64,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    pub exp: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Access denied. No token provided.")]
    MissingToken,

    #[error("Invalid or expired token.")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),

    #[error("role '{required}' required")]
    RoleMismatch { required: String },
}

/// Pulls the token out of an `Authorization` header value.
///
/// Everything after the first space is the token; the scheme word is not inspected.
pub fn extract_bearer(authorization: Option<&str>) -> Option<&str> {
    let (_, token) = authorization?.split_once(' ')?;
    (!token.is_empty()).then_some(token)
}

/// HS256 session token signer/verifier.
///
/// - Key material is not printable via Debug.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_seconds: i64,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("validation", &self.validation)
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}

impl TokenService {
    pub fn new(secret: &str, ttl_seconds: i64, leeway_seconds: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = leeway_seconds;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl_seconds,
        }
    }

    /// Issue a token for a freshly authenticated user, expiring `ttl_seconds` from now.
    pub fn issue(
        &self,
        user_id: i64,
        role: &str,
        first_name: Option<&str>,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            user_id,
            role: role.to_string(),
            first_name: first_name.map(str::to_string),
            iat: Some(now),
            // huge TTLs clamp to the far future instead of wrapping into the past
            exp: now.saturating_add(self.ttl_seconds),
            extra: Map::new(),
        };

        self.sign(&claims)
    }

    pub fn sign(&self, claims: &Claims) -> Result<String, jsonwebtoken::errors::Error> {
        let mut header = Header::new(Algorithm::HS256);
        header.typ = Some("JWT".to_string());
        jsonwebtoken::encode(&header, claims, &self.encoding_key)
    }

    /// Verify signature and `exp`, then decode the claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(AuthError::InvalidToken)?;

        Ok(data.claims)
    }

    /// Header value in, claim set out. This is the only way claims reach a request.
    pub fn authenticate(&self, authorization: Option<&str>) -> Result<Claims, AuthError> {
        let token = extract_bearer(authorization).ok_or(AuthError::MissingToken)?;
        self.verify(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";
    const EIGHT_HOURS: i64 = 8 * 60 * 60;

    fn service(secret: &str) -> TokenService {
        TokenService::new(secret, EIGHT_HOURS, 0)
    }

    #[test]
    fn extract_bearer_takes_everything_after_first_space() {
        assert_eq!(extract_bearer(Some("Bearer abc.def.ghi")), Some("abc.def.ghi"));
        assert_eq!(extract_bearer(Some("Bearer a b")), Some("a b"));
        assert_eq!(extract_bearer(Some("Token abc")), Some("abc"));
    }

    #[test]
    fn extract_bearer_without_token_substring_is_none() {
        assert_eq!(extract_bearer(None), None);
        assert_eq!(extract_bearer(Some("")), None);
        assert_eq!(extract_bearer(Some("Bearer")), None);
        assert_eq!(extract_bearer(Some("Bearer ")), None);
        assert_eq!(extract_bearer(Some("abc.def.ghi")), None);
    }

    #[test]
    fn issued_token_verifies_with_same_secret() {
        let tokens = service(SECRET);
        let token = tokens.issue(1, "barber", None).unwrap();

        let claims = tokens.verify(&token).unwrap();
        assert_eq!(claims.user_id, 1);
        assert_eq!(claims.role, "barber");
        assert_eq!(claims.first_name, None);
        assert_eq!(claims.exp - claims.iat.unwrap(), EIGHT_HOURS);
    }

    #[test]
    fn verified_claims_match_signed_claims_exactly() {
        let tokens = service(SECRET);
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            user_id: 42,
            role: "customer".to_string(),
            first_name: Some("Ada".to_string()),
            iat: Some(now),
            exp: now + 60,
            extra: Map::new(),
        };

        let token = tokens.sign(&claims).unwrap();
        assert_eq!(tokens.verify(&token).unwrap(), claims);
    }

    // Payload signed by any HS256 signer, not only by `issue`.
    fn sign_raw(secret: &str, payload: &Value) -> String {
        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            payload,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn minimal_payload_without_iat_verifies() {
        let exp = chrono::Utc::now().timestamp() + EIGHT_HOURS;
        let token = sign_raw(
            SECRET,
            &serde_json::json!({"userId": 1, "role": "barber", "exp": exp}),
        );

        let claims = service(SECRET).verify(&token).unwrap();
        assert_eq!(claims.user_id, 1);
        assert_eq!(claims.role, "barber");
        assert_eq!(claims.iat, None);
        assert_eq!(claims.exp, exp);
        assert!(claims.extra.is_empty());

        let err = service("another-secret").verify(&token).unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken(_)));
    }

    #[test]
    fn unknown_claims_survive_verification() {
        let exp = chrono::Utc::now().timestamp() + 60;
        let payload = serde_json::json!({
            "userId": 1,
            "role": "barber",
            "firstName": "Ada",
            "shopId": 17,
            "iat": exp - 60,
            "exp": exp,
        });
        let token = sign_raw(SECRET, &payload);

        let claims = service(SECRET).verify(&token).unwrap();
        assert_eq!(claims.extra.get("shopId"), Some(&serde_json::json!(17)));
        assert_eq!(serde_json::to_value(&claims).unwrap(), payload);
    }

    #[test]
    fn oversized_ttl_saturates_instead_of_wrapping() {
        let tokens = TokenService::new(SECRET, i64::MAX, 0);
        let token = tokens.issue(1, "barber", None).unwrap();

        let claims = tokens.verify(&token).unwrap();
        assert_eq!(claims.exp, i64::MAX);
    }

    #[test]
    fn token_from_other_secret_is_invalid() {
        let token = service(SECRET).issue(1, "barber", None).unwrap();

        let err = service("another-secret").verify(&token).unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken(_)));
    }

    #[test]
    fn expired_token_is_invalid() {
        let tokens = service(SECRET);
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            user_id: 1,
            role: "barber".to_string(),
            first_name: None,
            iat: Some(now - 2 * 3600),
            exp: now - 3600,
            extra: Map::new(),
        };
        let token = tokens.sign(&claims).unwrap();

        let err = tokens.verify(&token).unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken(_)));
    }

    #[test]
    fn leeway_accepts_recently_expired_token() {
        let tokens = TokenService::new(SECRET, EIGHT_HOURS, 120);
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            user_id: 1,
            role: "barber".to_string(),
            first_name: None,
            iat: Some(now - 600),
            exp: now - 30,
            extra: Map::new(),
        };
        let token = tokens.sign(&claims).unwrap();

        assert!(tokens.verify(&token).is_ok());
    }

    #[test]
    fn malformed_token_is_invalid() {
        let err = service(SECRET).verify("not-a-jwt").unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken(_)));
    }

    #[test]
    fn authenticate_distinguishes_missing_from_invalid() {
        let tokens = service(SECRET);

        assert!(matches!(
            tokens.authenticate(None),
            Err(AuthError::MissingToken)
        ));
        assert!(matches!(
            tokens.authenticate(Some("Bearer")),
            Err(AuthError::MissingToken)
        ));
        assert!(matches!(
            tokens.authenticate(Some("Bearer garbage")),
            Err(AuthError::InvalidToken(_))
        ));

        let token = tokens.issue(7, "customer", Some("Sam")).unwrap();
        let claims = tokens
            .authenticate(Some(&format!("Bearer {token}")))
            .unwrap();
        assert_eq!(claims.user_id, 7);
        assert_eq!(claims.first_name.as_deref(), Some("Sam"));
    }

    #[test]
    fn debug_output_hides_key_material() {
        let rendered = format!("{:?}", service("super-secret-value"));
        assert!(!rendered.contains("super-secret-value"));
    }
}
