//! Tests for storage key naming.

use crate::storage::{ParseStorageKeyError, StorageKey};
use rstest::rstest;

#[rstest]
#[case(StorageKey::Users, "users")]
#[case(StorageKey::Tasks, "tasks")]
#[case(StorageKey::TeamMembers, "teamMembers")]
#[case(StorageKey::CurrentUser, "currentUser")]
#[case(StorageKey::Theme, "theme")]
fn storage_key_strings_match_browser_layout(#[case] key: StorageKey, #[case] expected: &str) {
    assert_eq!(key.as_str(), expected);
    assert_eq!(StorageKey::try_from(expected), Ok(key));
}

#[rstest]
fn only_collections_seed_on_absence() {
    let seeding: Vec<StorageKey> = StorageKey::ALL
        .into_iter()
        .filter(|key| key.seeds_on_absence())
        .collect();
    assert_eq!(
        seeding,
        vec![StorageKey::Users, StorageKey::TeamMembers, StorageKey::Tasks]
    );
}

#[rstest]
fn storage_key_parsing_is_exact() {
    assert_eq!(
        StorageKey::try_from("TeamMembers"),
        Err(ParseStorageKeyError("TeamMembers".to_owned()))
    );
}
