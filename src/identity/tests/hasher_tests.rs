//! Tests for the Argon2id credential hasher.

use crate::config::CredentialConfig;
use crate::identity::{
    adapters::Argon2CredentialHasher,
    domain::PasswordHash,
    ports::{CredentialHasher, HashingError},
};
use rstest::{fixture, rstest};

#[fixture]
fn hasher() -> Argon2CredentialHasher {
    Argon2CredentialHasher::from_config(&CredentialConfig::lightweight())
        .expect("lightweight parameters are valid")
}

#[rstest]
fn hash_produces_salted_argon2id_phc_strings(hasher: Argon2CredentialHasher) {
    let first = hasher.hash("password123").expect("hashing should succeed");
    let second = hasher.hash("password123").expect("hashing should succeed");

    assert!(first.as_str().starts_with("$argon2id$"));
    assert!(!first.as_str().contains("password123"));
    assert_ne!(first, second, "salts should differ");
}

#[rstest]
fn verify_accepts_matching_and_rejects_other_passwords(hasher: Argon2CredentialHasher) {
    let hash = hasher.hash("password123").expect("hashing should succeed");

    assert_eq!(hasher.verify("password123", &hash), Ok(true));
    assert_eq!(hasher.verify("password124", &hash), Ok(false));
}

#[rstest]
fn verify_reads_cost_parameters_from_the_hash(hasher: Argon2CredentialHasher) {
    let stronger = Argon2CredentialHasher::from_config(&CredentialConfig {
        memory_kib: 64,
        iterations: 2,
        parallelism: 1,
    })
    .expect("valid parameters");
    let hash = stronger.hash("password123").expect("hashing should succeed");

    assert_eq!(hasher.verify("password123", &hash), Ok(true));
}

#[rstest]
fn verify_reports_malformed_hashes(hasher: Argon2CredentialHasher) {
    let result = hasher.verify("password123", &PasswordHash::new("password123"));
    assert!(matches!(result, Err(HashingError::MalformedHash(_))));
}

#[rstest]
fn invalid_parameters_are_rejected() {
    let result = Argon2CredentialHasher::from_config(&CredentialConfig {
        memory_kib: 1,
        iterations: 0,
        parallelism: 1,
    });
    assert!(matches!(result, Err(HashingError::InvalidParameters(_))));
}
