//! Property-based tests for the credential verifier, tokens and chirp rules
//!
//! bcrypt is slow by design, so the password properties run few cases.

use chrono::Duration;
use proptest::prelude::*;
use uuid::Uuid;

use chirpy::backend::auth::{hash_password, verify_password, AuthError, TokenService};
use chirpy::shared::chirp::{clean_profanity, prepare_chirp_body};
use chirpy::shared::MAX_CHIRP_LENGTH;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn test_hash_verifies_only_its_password(
        password in "[ -~]{0,36}",
        other in "[ -~]{0,36}",
    ) {
        let hash = hash_password(&password).unwrap();
        prop_assert_ne!(&hash, &password);
        prop_assert!(verify_password(&password, &hash).is_ok());
        if other != password {
            prop_assert_eq!(verify_password(&other, &hash), Err(AuthError::Mismatch));
        }
    }
}

proptest! {
    #[test]
    fn test_overlong_passwords_rejected(password in "[a-z]{37,64}") {
        prop_assert!(matches!(
            hash_password(&password),
            Err(AuthError::Validation(_))
        ));
    }

    #[test]
    fn test_token_round_trip(secret in "[a-zA-Z0-9]{1,64}", ttl in 1i64..100_000) {
        let service = TokenService::new(&secret).unwrap();
        let user_id = Uuid::new_v4();
        let token = service.issue(user_id, Duration::seconds(ttl)).unwrap();
        prop_assert_eq!(service.validate(&token).unwrap(), user_id);
    }

    #[test]
    fn test_token_rejected_under_other_secret(
        secret in "[a-z]{8,32}",
        other in "[A-Z]{8,32}",
    ) {
        let token = TokenService::new(&secret)
            .unwrap()
            .issue(Uuid::new_v4(), Duration::hours(1))
            .unwrap();
        let result = TokenService::new(&other).unwrap().validate(&token);
        prop_assert!(matches!(result, Err(AuthError::Token(_))));
    }

    #[test]
    fn test_clean_text_is_unchanged(words in prop::collection::vec("[a-j]{1,8}", 0..20)) {
        let body = words.join(" ");
        prop_assert_eq!(clean_profanity(&body), body);
    }

    #[test]
    fn test_profane_words_never_survive(
        prefix in "[a-j ]{0,20}",
        word in prop::sample::select(vec!["kerfuffle", "SHARBERT", "Fornax"]),
        suffix in "[a-j ]{0,20}",
    ) {
        let body = format!("{} {} {}", prefix, word, suffix);
        let cleaned = clean_profanity(&body);
        prop_assert!(!cleaned.to_lowercase().split(' ').any(|w| w == word.to_lowercase()));
        prop_assert_eq!(cleaned.len(), body.len() - word.len() + 4);
    }

    #[test]
    fn test_chirp_length_limit(body in "[a-z ]{0,200}") {
        let result = prepare_chirp_body(&body);
        prop_assert_eq!(result.is_ok(), body.chars().count() <= MAX_CHIRP_LENGTH);
    }
}
