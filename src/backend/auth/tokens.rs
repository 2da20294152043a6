/**
 * Identity Tokens
 *
 * This module issues and validates signed, time-bounded identity tokens
 * (JWTs) for user sessions.
 *
 * # Signing
 *
 * Tokens are signed with an HMAC algorithm (HS256 by default) keyed by the
 * shared secret the service was built with. Asymmetric algorithms are
 * rejected at construction time because a shared secret cannot key them.
 *
 * # Validity
 *
 * A token is valid when its signature verifies and it has not expired.
 * Nothing is looked up on the server; there is no revocation.
 */

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::backend::auth::error::{AuthError, TokenError, ValidationError};

/// Issuer claim placed in every token
pub const TOKEN_ISSUER: &str = "chirpy";

/// Lifetime used when a login request does not ask for one
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 3600;

/// Longest lifetime a login request may ask for
pub const MAX_TOKEN_TTL_SECS: i64 = 3600;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Issuer
    pub iss: String,
    /// User ID
    pub sub: String,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Issues and validates identity tokens with one shared secret
#[derive(Clone)]
pub struct TokenService {
    algorithm: Algorithm,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("algorithm", &self.algorithm)
            .finish_non_exhaustive()
    }
}

impl TokenService {
    /// Create an HS256 token service
    ///
    /// # Errors
    /// `ValidationError::EmptySecret` if `secret` is empty
    pub fn new(secret: &str) -> Result<Self, AuthError> {
        Self::with_algorithm(secret, Algorithm::HS256)
    }

    /// Create a token service for a specific HMAC algorithm
    ///
    /// # Errors
    /// * `ValidationError::EmptySecret` - `secret` is empty
    /// * `ValidationError::UnsupportedAlgorithm` - `algorithm` is not
    ///   HS256, HS384 or HS512
    pub fn with_algorithm(secret: &str, algorithm: Algorithm) -> Result<Self, AuthError> {
        if secret.is_empty() {
            return Err(ValidationError::EmptySecret.into());
        }
        if !matches!(algorithm, Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512) {
            return Err(ValidationError::UnsupportedAlgorithm(algorithm).into());
        }

        let mut validation = Validation::new(algorithm);
        validation.leeway = 0;
        validation.set_issuer(&[TOKEN_ISSUER]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        Ok(Self {
            algorithm,
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        })
    }

    /// Signing algorithm in use
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Issue a token for `subject` valid for `ttl` from now
    ///
    /// # Errors
    /// * `ValidationError::NonPositiveTtl` - `ttl` is zero or negative
    /// * `ValidationError::TtlOutOfRange` - expiry overflows
    pub fn issue(&self, subject: Uuid, ttl: Duration) -> Result<String, AuthError> {
        self.issue_at(subject, ttl, Utc::now())
    }

    pub(crate) fn issue_at(
        &self,
        subject: Uuid,
        ttl: Duration,
        issued_at: DateTime<Utc>,
    ) -> Result<String, AuthError> {
        if ttl <= Duration::zero() {
            return Err(ValidationError::NonPositiveTtl.into());
        }
        let expires_at = issued_at
            .checked_add_signed(ttl)
            .ok_or(ValidationError::TtlOutOfRange)?;

        let claims = Claims {
            iss: TOKEN_ISSUER.to_string(),
            sub: subject.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to sign token: {:?}", e);
            AuthError::Internal("token signing failed".to_string())
        })
    }

    /// Validate a token and return its subject
    ///
    /// The signature is checked before any claim is trusted.
    ///
    /// # Errors
    /// * `TokenError::SignatureInvalid` - signed with another secret or
    ///   algorithm
    /// * `TokenError::Malformed` - not a token, or an unacceptable claim set
    /// * `TokenError::Expired` - past `exp`
    /// * `TokenError::InvalidSubject` - `sub` is not a UUID
    pub fn validate(&self, token: &str) -> Result<Uuid, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(TokenError::from)?;

        Uuid::parse_str(&data.claims.sub).map_err(|_| TokenError::InvalidSubject.into())
    }
}

/// Lifetime rules for tokens issued at login
///
/// Two independent rules: an absent or zero request gets the default
/// lifetime, and a request above the maximum is capped to the maximum.
/// Negative requests are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenLifetimePolicy {
    default_secs: i64,
    max_secs: i64,
}

impl Default for TokenLifetimePolicy {
    fn default() -> Self {
        Self {
            default_secs: DEFAULT_TOKEN_TTL_SECS,
            max_secs: MAX_TOKEN_TTL_SECS,
        }
    }
}

impl TokenLifetimePolicy {
    /// Create a policy; requires `0 < default_secs <= max_secs`
    pub fn new(default_secs: i64, max_secs: i64) -> Result<Self, ValidationError> {
        if default_secs <= 0 || max_secs <= 0 {
            return Err(ValidationError::NonPositiveTtl);
        }
        if default_secs > max_secs || Duration::try_seconds(max_secs).is_none() {
            return Err(ValidationError::TtlOutOfRange);
        }
        Ok(Self {
            default_secs,
            max_secs,
        })
    }

    pub fn default_secs(&self) -> i64 {
        self.default_secs
    }

    pub fn max_secs(&self) -> i64 {
        self.max_secs
    }

    /// Resolve a requested lifetime in seconds
    pub fn resolve(&self, requested_secs: Option<i64>) -> Result<Duration, ValidationError> {
        let secs = match requested_secs {
            None | Some(0) => self.default_secs,
            Some(secs) if secs < 0 => return Err(ValidationError::NonPositiveTtl),
            Some(secs) => secs.min(self.max_secs),
        };
        Duration::try_seconds(secs).ok_or(ValidationError::TtlOutOfRange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn service() -> TokenService {
        TokenService::new("test_secret_key").unwrap()
    }

    #[test]
    fn test_round_trip_returns_subject() {
        let user_id = Uuid::new_v4();
        let token = service().issue(user_id, Duration::seconds(3600)).unwrap();
        assert!(!token.is_empty());
        assert_eq!(service().validate(&token).unwrap(), user_id);
    }

    #[test]
    fn test_claims_contents() {
        let user_id = Uuid::new_v4();
        let token = service().issue(user_id, Duration::hours(1)).unwrap();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[TOKEN_ISSUER]);
        let claims = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"test_secret_key"),
            &validation,
        )
        .unwrap()
        .claims;

        assert_eq!(claims.iss, TOKEN_ISSUER);
        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_issue_rejects_non_positive_ttl() {
        let user_id = Uuid::new_v4();
        assert_matches!(
            service().issue(user_id, Duration::zero()),
            Err(AuthError::Validation(ValidationError::NonPositiveTtl))
        );
        assert_matches!(
            service().issue(user_id, Duration::hours(-1)),
            Err(AuthError::Validation(ValidationError::NonPositiveTtl))
        );
    }

    #[test]
    fn test_empty_secret_rejected() {
        assert_matches!(
            TokenService::new(""),
            Err(AuthError::Validation(ValidationError::EmptySecret))
        );
    }

    #[test]
    fn test_asymmetric_algorithm_rejected() {
        for algorithm in [Algorithm::ES256, Algorithm::RS256, Algorithm::EdDSA] {
            assert_matches!(
                TokenService::with_algorithm("test_secret_key", algorithm),
                Err(AuthError::Validation(ValidationError::UnsupportedAlgorithm(a))) if a == algorithm
            );
        }
    }

    #[test]
    fn test_other_hmac_algorithms_round_trip() {
        let user_id = Uuid::new_v4();
        for algorithm in [Algorithm::HS384, Algorithm::HS512] {
            let service = TokenService::with_algorithm("test_secret_key", algorithm).unwrap();
            let token = service.issue(user_id, Duration::minutes(5)).unwrap();
            assert_eq!(service.validate(&token).unwrap(), user_id);
        }
    }

    #[test]
    fn test_wrong_secret_is_signature_invalid() {
        let token = service().issue(Uuid::new_v4(), Duration::hours(1)).unwrap();
        let other = TokenService::new("another_secret").unwrap();
        assert_eq!(
            other.validate(&token),
            Err(AuthError::Token(TokenError::SignatureInvalid))
        );
    }

    #[test]
    fn test_algorithm_mismatch_is_signature_invalid() {
        let token = TokenService::with_algorithm("test_secret_key", Algorithm::HS512)
            .unwrap()
            .issue(Uuid::new_v4(), Duration::hours(1))
            .unwrap();
        assert_eq!(
            service().validate(&token),
            Err(AuthError::Token(TokenError::SignatureInvalid))
        );
    }

    #[test]
    fn test_expired_token() {
        let issued_at = Utc::now() - Duration::hours(2);
        let token = service()
            .issue_at(Uuid::new_v4(), Duration::hours(1), issued_at)
            .unwrap();
        assert_eq!(
            service().validate(&token),
            Err(AuthError::Token(TokenError::Expired))
        );
    }

    #[test]
    fn test_valid_until_expiry() {
        let user_id = Uuid::new_v4();
        let issued_at = Utc::now() - Duration::minutes(59);
        let token = service()
            .issue_at(user_id, Duration::hours(1), issued_at)
            .unwrap();
        assert_eq!(service().validate(&token).unwrap(), user_id);
    }

    #[test]
    fn test_malformed_inputs() {
        let token = service().issue(Uuid::new_v4(), Duration::hours(1)).unwrap();
        let (without_signature, _) = token.rsplit_once('.').unwrap();
        let truncated_header = &token[..10];

        for input in [
            "",
            "invalid.token.format",
            "not.a.jwt",
            "garbage",
            without_signature,
            truncated_header,
        ] {
            assert_eq!(
                service().validate(input),
                Err(AuthError::Token(TokenError::Malformed)),
                "input: {input:?}"
            );
        }
    }

    #[test]
    fn test_invalid_subject() {
        let now = Utc::now();
        let claims = Claims {
            iss: TOKEN_ISSUER.to_string(),
            sub: "not-a-uuid".to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(1)).timestamp(),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"test_secret_key"),
        )
        .unwrap();

        assert_eq!(
            service().validate(&token),
            Err(AuthError::Token(TokenError::InvalidSubject))
        );
    }

    #[test]
    fn test_foreign_issuer_rejected() {
        let now = Utc::now();
        let claims = Claims {
            iss: "someone-else".to_string(),
            sub: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(1)).timestamp(),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"test_secret_key"),
        )
        .unwrap();

        assert_eq!(
            service().validate(&token),
            Err(AuthError::Token(TokenError::Malformed))
        );
    }

    #[test]
    fn test_policy_default_when_absent() {
        let policy = TokenLifetimePolicy::default();
        assert_eq!(policy.resolve(None).unwrap(), Duration::seconds(3600));
        assert_eq!(policy.resolve(Some(0)).unwrap(), Duration::seconds(3600));
    }

    #[test]
    fn test_policy_caps_at_max() {
        let policy = TokenLifetimePolicy::new(60, 600).unwrap();
        assert_eq!(policy.resolve(Some(600)).unwrap(), Duration::seconds(600));
        assert_eq!(policy.resolve(Some(601)).unwrap(), Duration::seconds(600));
        assert_eq!(policy.resolve(Some(i64::MAX)).unwrap(), Duration::seconds(600));
    }

    #[test]
    fn test_policy_keeps_shorter_requests() {
        let policy = TokenLifetimePolicy::default();
        assert_eq!(policy.resolve(Some(30)).unwrap(), Duration::seconds(30));
        assert_eq!(policy.resolve(Some(3599)).unwrap(), Duration::seconds(3599));
    }

    #[test]
    fn test_policy_rejects_negative() {
        let policy = TokenLifetimePolicy::default();
        assert_eq!(policy.resolve(Some(-1)), Err(ValidationError::NonPositiveTtl));
        assert_eq!(policy.resolve(Some(i64::MIN)), Err(ValidationError::NonPositiveTtl));
    }

    #[test]
    fn test_policy_construction() {
        assert!(TokenLifetimePolicy::new(3600, 3600).is_ok());
        assert_eq!(TokenLifetimePolicy::new(0, 3600), Err(ValidationError::NonPositiveTtl));
        assert_eq!(TokenLifetimePolicy::new(7200, 3600), Err(ValidationError::TtlOutOfRange));
    }
}
