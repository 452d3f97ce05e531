//! Map-backed user-detail source.

use std::collections::HashMap;

use crate::domain::UserRecord;
use crate::domain::ports::{UserDetailsSource, UserLookupError};

/// In-memory directory of user records keyed by id.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserDirectory {
    users: HashMap<String, UserRecord>,
}

impl InMemoryUserDirectory {
    /// Add `record`, replacing any existing record with the same id.
    #[must_use]
    pub fn with_user(mut self, record: UserRecord) -> Self {
        self.insert(record);
        self
    }

    /// Insert `record`, returning the record it replaced.
    pub fn insert(&mut self, record: UserRecord) -> Option<UserRecord> {
        self.users.insert(record.id().to_owned(), record)
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the directory holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl FromIterator<UserRecord> for InMemoryUserDirectory {
    fn from_iter<I: IntoIterator<Item = UserRecord>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::default(), |directory, record| directory.with_user(record))
    }
}

impl UserDetailsSource for InMemoryUserDirectory {
    fn fetch_user_details(&self, user_id: &str) -> Result<UserRecord, UserLookupError> {
        self.users
            .get(user_id)
            .cloned()
            .ok_or_else(|| UserLookupError::not_found(user_id))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    fn record(id: &str, email: &str) -> UserRecord {
        UserRecord::new(id, "Test User", email).expect("valid record")
    }

    #[rstest]
    fn returns_stored_record() {
        let directory = InMemoryUserDirectory::default().with_user(record("123", "a@example.com"));

        let found = directory.fetch_user_details("123").expect("user exists");

        assert_eq!(found.email(), "a@example.com");
    }

    #[rstest]
    #[case("")]
    #[case("124")]
    #[case(" 123")]
    fn unknown_ids_are_not_found(#[case] user_id: &str) {
        let directory = InMemoryUserDirectory::default().with_user(record("123", "a@example.com"));

        let err = directory.fetch_user_details(user_id).expect_err("unknown id");

        assert_eq!(err, UserLookupError::not_found(user_id));
    }

    #[rstest]
    fn later_records_replace_earlier_ones() {
        let mut directory: InMemoryUserDirectory = [
            record("1", "first@example.com"),
            record("2", "second@example.com"),
        ]
        .into_iter()
        .collect();

        let replaced = directory.insert(record("1", "updated@example.com"));

        assert_eq!(
            replaced.map(|r| r.email().to_owned()),
            Some("first@example.com".to_owned())
        );
        assert_eq!(directory.len(), 2);
        assert_eq!(
            directory
                .fetch_user_details("1")
                .expect("user exists")
                .email(),
            "updated@example.com"
        );
    }

    #[rstest]
    fn default_directory_is_empty() {
        assert!(InMemoryUserDirectory::default().is_empty());
    }
}
