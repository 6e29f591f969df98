//! In-memory per-user genre preferences.

use std::collections::HashMap;
use std::fmt;

use tokio::sync::RwLock;
use tracing::debug;

use crate::genre::Genre;

/// Platform-assigned user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a user is in the onboarding flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceState {
    /// Never greeted, or reset and not yet re-prompted.
    Absent,
    /// Prompted with the catalog, no valid reply yet.
    AwaitingSelection,
    /// Selection confirmed.
    Confirmed(Genre),
}

/// Result of [`PreferenceStore::begin_onboarding`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Onboarding {
    /// The user is now awaiting a selection.
    Started,
    /// The user already picked a genre; nothing changed.
    AlreadyConfirmed(Genre),
}

/// Process-lifetime store of user preferences.
///
/// Entries are never evicted. Methods that read and then write a user's
/// entry hold the write lock for the whole transition, so two events for the
/// same user cannot interleave inside one transition.
#[derive(Debug, Default)]
pub struct PreferenceStore {
    entries: RwLock<HashMap<UserId, PreferenceState>>,
}

impl PreferenceStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state for a user; unknown users are `Absent`.
    pub async fn get(&self, user: UserId) -> PreferenceState {
        self.entries
            .read()
            .await
            .get(&user)
            .copied()
            .unwrap_or(PreferenceState::Absent)
    }

    /// Mark the user as prompted and awaiting a selection.
    pub async fn set_awaiting(&self, user: UserId) {
        self.entries
            .write()
            .await
            .insert(user, PreferenceState::AwaitingSelection);
        debug!(user_id = %user, "Awaiting genre selection");
    }

    /// Record a confirmed genre.
    pub async fn set_genre(&self, user: UserId, genre: Genre) {
        self.entries
            .write()
            .await
            .insert(user, PreferenceState::Confirmed(genre));
        debug!(user_id = %user, genre = %genre, "Genre stored");
    }

    /// Forget the user entirely.
    pub async fn clear(&self, user: UserId) {
        self.entries.write().await.remove(&user);
        debug!(user_id = %user, "Preference cleared");
    }

    /// Move the user to `AwaitingSelection` unless a genre is already confirmed.
    pub async fn begin_onboarding(&self, user: UserId) -> Onboarding {
        let mut entries = self.entries.write().await;
        match entries.get(&user) {
            Some(PreferenceState::Confirmed(genre)) => Onboarding::AlreadyConfirmed(*genre),
            Some(PreferenceState::AwaitingSelection)
            | Some(PreferenceState::Absent)
            | None => {
                entries.insert(user, PreferenceState::AwaitingSelection);
                Onboarding::Started
            }
        }
    }

    /// Confirm a genre only if the user is still awaiting a selection.
    ///
    /// Returns `false` (and changes nothing) in any other state.
    pub async fn confirm(&self, user: UserId, genre: Genre) -> bool {
        let mut entries = self.entries.write().await;
        match entries.get(&user) {
            Some(PreferenceState::AwaitingSelection) => {
                entries.insert(user, PreferenceState::Confirmed(genre));
                true
            }
            Some(PreferenceState::Absent) | Some(PreferenceState::Confirmed(_)) | None => false,
        }
    }

    /// Clear the entry and immediately restart onboarding.
    pub async fn reset(&self, user: UserId) {
        let mut entries = self.entries.write().await;
        entries.remove(&user);
        entries.insert(user, PreferenceState::AwaitingSelection);
    }

    /// Number of users with an entry.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether no user has an entry.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE: UserId = UserId(1);
    const BOB: UserId = UserId(2);

    #[tokio::test]
    async fn test_unknown_user_is_absent() {
        let store = PreferenceStore::new();
        assert_eq!(store.get(ALICE).await, PreferenceState::Absent);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_basic_lifecycle() {
        let store = PreferenceStore::new();

        store.set_awaiting(ALICE).await;
        assert_eq!(store.get(ALICE).await, PreferenceState::AwaitingSelection);

        store.set_genre(ALICE, Genre::Science).await;
        assert_eq!(store.get(ALICE).await, PreferenceState::Confirmed(Genre::Science));

        store.clear(ALICE).await;
        assert_eq!(store.get(ALICE).await, PreferenceState::Absent);
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_users_are_independent() {
        let store = PreferenceStore::new();
        store.set_genre(ALICE, Genre::Sports).await;
        store.set_awaiting(BOB).await;

        assert_eq!(store.get(ALICE).await, PreferenceState::Confirmed(Genre::Sports));
        assert_eq!(store.get(BOB).await, PreferenceState::AwaitingSelection);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_begin_onboarding_keeps_confirmed_genre() {
        let store = PreferenceStore::new();
        assert_eq!(store.begin_onboarding(ALICE).await, Onboarding::Started);
        assert_eq!(store.begin_onboarding(ALICE).await, Onboarding::Started);

        store.set_genre(ALICE, Genre::Health).await;
        assert_eq!(
            store.begin_onboarding(ALICE).await,
            Onboarding::AlreadyConfirmed(Genre::Health)
        );
        assert_eq!(store.get(ALICE).await, PreferenceState::Confirmed(Genre::Health));
    }

    #[tokio::test]
    async fn test_confirm_requires_awaiting() {
        let store = PreferenceStore::new();
        assert!(!store.confirm(ALICE, Genre::Business).await);
        assert_eq!(store.get(ALICE).await, PreferenceState::Absent);

        store.set_awaiting(ALICE).await;
        assert!(store.confirm(ALICE, Genre::Business).await);
        assert!(!store.confirm(ALICE, Genre::General).await);
        assert_eq!(store.get(ALICE).await, PreferenceState::Confirmed(Genre::Business));
    }

    #[tokio::test]
    async fn test_reset_from_any_state_ends_awaiting() {
        let store = PreferenceStore::new();

        store.reset(ALICE).await;
        assert_eq!(store.get(ALICE).await, PreferenceState::AwaitingSelection);

        store.set_genre(ALICE, Genre::Technology).await;
        store.reset(ALICE).await;
        assert_eq!(store.get(ALICE).await, PreferenceState::AwaitingSelection);
    }

    #[tokio::test]
    async fn test_concurrent_confirms_pick_one_winner() {
        let store = std::sync::Arc::new(PreferenceStore::new());
        store.set_awaiting(ALICE).await;

        let a = {
            let store = store.clone();
            tokio::spawn(async move { store.confirm(ALICE, Genre::Sports).await })
        };
        let b = {
            let store = store.clone();
            tokio::spawn(async move { store.confirm(ALICE, Genre::Science).await })
        };

        let (a, b) = (a.await.unwrap(), b.await.unwrap());
        assert!(a ^ b, "exactly one confirm should win");
    }
}
