//! Tests for registration, login, and logout.

use std::sync::Arc;

use crate::config::CredentialConfig;
use crate::identity::{
    adapters::Argon2CredentialHasher,
    domain::{IdentityDomainError, PasswordHash, UserId},
    ports::{CredentialHasher, HashingError},
    services::{IdentityError, IdentityStore, RegisterRequest},
};
use crate::notification::adapters::RecordingNotificationSink;
use crate::storage::{KeyValueStore, Persistence, adapters::InMemoryKeyValueStore};
use mockall::mock;
use rstest::{fixture, rstest};

mock! {
    pub Hasher {}

    impl CredentialHasher for Hasher {
        fn hash(&self, password: &str) -> Result<PasswordHash, HashingError>;
        fn verify(&self, password: &str, hash: &PasswordHash) -> Result<bool, HashingError>;
    }
}

struct Harness {
    store: InMemoryKeyValueStore,
    identity: IdentityStore<InMemoryKeyValueStore>,
}

fn identity_over(store: &InMemoryKeyValueStore) -> IdentityStore<InMemoryKeyValueStore> {
    let persistence = Persistence::new(
        Arc::new(store.clone()),
        Arc::new(RecordingNotificationSink::new()),
    );
    let hasher = Argon2CredentialHasher::from_config(&CredentialConfig::lightweight())
        .expect("valid parameters");
    IdentityStore::new(persistence, Arc::new(hasher), Vec::new(), None)
}

#[fixture]
fn harness() -> Harness {
    let store = InMemoryKeyValueStore::new();
    let identity = identity_over(&store);
    Harness { store, identity }
}

fn register_john(identity: &mut IdentityStore<InMemoryKeyValueStore>) {
    identity
        .register(RegisterRequest::new("John Doe", "john@example.com", "password123"))
        .expect("registration should succeed");
}

#[rstest]
fn register_assigns_ids_after_the_highest_existing(mut harness: Harness) {
    register_john(&mut harness.identity);
    let jane = harness
        .identity
        .register(RegisterRequest::new("Jane Smith", "jane@example.com", "secret"))
        .expect("registration should succeed");

    assert_eq!(jane.id(), UserId::new(2));
    assert_eq!(harness.identity.users().len(), 2);
}

#[rstest]
fn register_persists_hashed_passwords_only(mut harness: Harness) {
    register_john(&mut harness.identity);

    let raw = harness
        .store
        .get("users")
        .expect("read should succeed")
        .expect("users should be stored");
    assert!(raw.contains("john@example.com"));
    assert!(raw.contains("$argon2id$"));
    assert!(!raw.contains("password123"));
}

#[rstest]
fn duplicate_email_is_rejected_without_appending(mut harness: Harness) {
    register_john(&mut harness.identity);

    let result = harness
        .identity
        .register(RegisterRequest::new("Johnny", "john@example.com", "other"));

    assert!(matches!(result, Err(IdentityError::DuplicateEmail(_))));
    assert_eq!(harness.identity.users().len(), 1);
}

#[rstest]
fn email_uniqueness_is_case_sensitive(mut harness: Harness) {
    register_john(&mut harness.identity);

    let result = harness
        .identity
        .register(RegisterRequest::new("Other John", "John@example.com", "pw"));

    assert!(result.is_ok());
}

#[rstest]
fn mismatched_confirmation_is_rejected(mut harness: Harness) {
    let result = harness.identity.register(
        RegisterRequest::new("John Doe", "john@example.com", "password123")
            .with_confirmation("password321"),
    );

    assert!(matches!(
        result,
        Err(IdentityError::Validation(
            IdentityDomainError::PasswordMismatch
        ))
    ));
    assert!(harness.identity.users().is_empty());
    assert!(harness.store.snapshot().is_empty());
}

#[rstest]
#[case("", "john@example.com", "pw", IdentityDomainError::EmptyName)]
#[case("John", "john@example.com", "", IdentityDomainError::EmptyPassword)]
#[case(
    "John",
    "not-an-email",
    "pw",
    IdentityDomainError::InvalidEmail("not-an-email".to_owned())
)]
fn invalid_registration_input_is_rejected(
    mut harness: Harness,
    #[case] name: &str,
    #[case] email: &str,
    #[case] password: &str,
    #[case] expected: IdentityDomainError,
) {
    let result = harness
        .identity
        .register(RegisterRequest::new(name, email, password));

    match result {
        Err(IdentityError::Validation(err)) => assert_eq!(err, expected),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[rstest]
fn login_sets_and_persists_the_current_user(mut harness: Harness) {
    register_john(&mut harness.identity);

    let user = harness
        .identity
        .login("john@example.com", "password123")
        .expect("login should succeed");

    assert_eq!(harness.identity.current_user(), Some(&user));
    assert_eq!(
        harness.store.get("currentUser").expect("read").as_deref(),
        Some("1")
    );
}

#[rstest]
#[case("john@example.com", "wrong")]
#[case("nobody@example.com", "password123")]
#[case("JOHN@example.com", "password123")]
fn login_rejects_mismatched_credentials(
    mut harness: Harness,
    #[case] email: &str,
    #[case] password: &str,
) {
    register_john(&mut harness.identity);

    let result = harness.identity.login(email, password);

    assert!(matches!(result, Err(IdentityError::InvalidCredentials)));
    assert!(harness.identity.current_user().is_none());
}

#[rstest]
fn logout_clears_session_and_storage(mut harness: Harness) {
    register_john(&mut harness.identity);
    harness
        .identity
        .login("john@example.com", "password123")
        .expect("login should succeed");

    harness.identity.logout();

    assert!(harness.identity.current_user().is_none());
    assert!(harness.store.get("currentUser").expect("read").is_none());
}

#[rstest]
fn session_is_restored_by_identifier(mut harness: Harness) {
    register_john(&mut harness.identity);
    let users = harness.identity.users().to_vec();
    let persistence = Persistence::new(
        Arc::new(harness.store.clone()),
        Arc::new(RecordingNotificationSink::new()),
    );
    let hasher = Argon2CredentialHasher::from_config(&CredentialConfig::lightweight())
        .expect("valid parameters");

    let restored = IdentityStore::new(
        persistence.clone(),
        Arc::new(hasher.clone()),
        users.clone(),
        Some(UserId::new(1)),
    );
    let dangling = IdentityStore::new(persistence, Arc::new(hasher), users, Some(UserId::new(9)));

    assert_eq!(
        restored.current_user().map(|user| user.name().to_owned()),
        Some("John Doe".to_owned())
    );
    assert!(dangling.current_user().is_none());
}

#[rstest]
fn failed_writes_mark_the_store_degraded_but_keep_state() {
    let store = InMemoryKeyValueStore::new().with_quota(10);
    let mut identity = identity_over(&store);

    register_john(&mut identity);

    assert!(identity.is_degraded());
    assert_eq!(identity.users().len(), 1);
}

#[rstest]
fn blank_names_are_rejected_before_hashing() {
    let mut hasher = MockHasher::new();
    hasher.expect_hash().never();
    let store = InMemoryKeyValueStore::new();
    let persistence = Persistence::new(
        Arc::new(store.clone()),
        Arc::new(RecordingNotificationSink::new()),
    );
    let mut identity = IdentityStore::new(persistence, Arc::new(hasher), Vec::new(), None);

    let result = identity.register(RegisterRequest::new("   ", "john@example.com", "pw"));

    assert!(matches!(
        result,
        Err(IdentityError::Validation(IdentityDomainError::EmptyName))
    ));
    assert!(store.snapshot().is_empty());
}
