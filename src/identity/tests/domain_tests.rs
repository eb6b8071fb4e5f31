//! Tests for account value validation.

use crate::identity::domain::{EmailAddress, IdentityDomainError, PasswordHash, User, UserId};
use rstest::rstest;

#[rstest]
#[case("john@example.com")]
#[case("  jane@example.com  ")]
#[case("a@b")]
fn valid_email_addresses_are_accepted(#[case] raw: &str) {
    let email = EmailAddress::new(raw).expect("valid email");
    assert_eq!(email.as_str(), raw.trim());
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("no-at-sign")]
#[case("@example.com")]
#[case("john@")]
#[case("john doe@example.com")]
fn invalid_email_addresses_are_rejected(#[case] raw: &str) {
    assert_eq!(
        EmailAddress::new(raw),
        Err(IdentityDomainError::InvalidEmail(raw.to_owned()))
    );
}

#[rstest]
fn email_addresses_keep_their_case() {
    let lower = EmailAddress::new("john@example.com").expect("valid");
    let mixed = EmailAddress::new("John@Example.com").expect("valid");
    assert_ne!(lower, mixed);
}

#[rstest]
fn user_name_is_trimmed_and_required() {
    let email = EmailAddress::new("john@example.com").expect("valid");
    let user = User::new(
        UserId::new(1),
        "  John Doe ",
        email.clone(),
        PasswordHash::new("$argon2id$stub"),
    )
    .expect("valid user");
    assert_eq!(user.name(), "John Doe");

    let blank = User::new(UserId::new(2), " ", email, PasswordHash::new("$argon2id$stub"));
    assert_eq!(blank, Err(IdentityDomainError::EmptyName));
}

#[rstest]
fn password_hash_debug_output_is_redacted() {
    let hash = PasswordHash::new("$argon2id$v=19$secret");
    assert!(!format!("{hash:?}").contains("secret"));
}

#[rstest]
fn user_id_next_increments() {
    assert_eq!(UserId::new(4).next(), UserId::new(5));
    assert_eq!(UserId::new(u64::MAX).next(), UserId::new(u64::MAX));
}
