//! Profile store: per-user settings kept for process lifetime only.
//!
//! A mutex-guarded username → profile map. State is never persisted;
//! restarting the server resets every profile except the seed data.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::types::{Identity, Profile, ProfileUpdate, ScalarMap, ScalarValue};

/// Preferences applied when a profile is first created.
pub fn default_preferences() -> ScalarMap {
    ScalarMap::from([
        ("theme".to_string(), ScalarValue::from("light")),
        ("notifications".to_string(), ScalarValue::from(true)),
        ("study_reminder".to_string(), ScalarValue::from(false)),
    ])
}

fn default_profile(identity: &Identity) -> Profile {
    Profile {
        username: identity.username.clone(),
        email: identity.email.clone(),
        full_name: identity.full_name.clone(),
        bio: None,
        avatar_url: None,
        preferences: default_preferences(),
    }
}

/// In-memory profile store.
#[derive(Debug, Default)]
pub struct ProfileStore {
    profiles: Mutex<HashMap<String, Profile>>,
}

impl ProfileStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the stock demo profile.
    pub fn seeded() -> Self {
        let store = Self::new();
        store.lock().insert(
            "johndoe".to_string(),
            Profile {
                username: "johndoe".into(),
                email: Some("johndoe@example.com".into()),
                full_name: Some("John Doe".into()),
                bio: Some(
                    "I am a student interested in computer science and mathematics.".into(),
                ),
                avatar_url: Some("https://example.com/avatars/johndoe.jpg".into()),
                preferences: ScalarMap::from([
                    ("theme".to_string(), ScalarValue::from("dark")),
                    ("notifications".to_string(), ScalarValue::from(true)),
                    ("study_reminder".to_string(), ScalarValue::from(true)),
                ]),
            },
        );
        store
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Profile>> {
        self.profiles.lock().expect("profile store lock poisoned")
    }

    /// Fetch the caller's profile, creating the default record on first
    /// access. The created record persists for the rest of the process.
    pub fn get_profile(&self, identity: &Identity) -> Profile {
        self.lock()
            .entry(identity.username.clone())
            .or_insert_with(|| default_profile(identity))
            .clone()
    }

    /// Apply a partial update to the caller's profile and return the full
    /// updated record. Provided fields overwrite; `preferences` merges
    /// key-by-key (new keys added, existing overwritten, untouched kept).
    pub fn update_profile(&self, identity: &Identity, update: ProfileUpdate) -> Profile {
        let mut profiles = self.lock();
        let profile = profiles
            .entry(identity.username.clone())
            .or_insert_with(|| default_profile(identity));

        if let Some(email) = update.email {
            profile.email = Some(email);
        }
        if let Some(full_name) = update.full_name {
            profile.full_name = Some(full_name);
        }
        if let Some(bio) = update.bio {
            profile.bio = Some(bio);
        }
        if let Some(avatar_url) = update.avatar_url {
            profile.avatar_url = Some(avatar_url);
        }
        if let Some(preferences) = update.preferences {
            profile.preferences.extend(preferences);
        }

        profile.clone()
    }

    /// Read the caller's preferences, or the documented defaults when no
    /// record exists. Unlike [`ProfileStore::get_profile`], this never
    /// creates a record.
    pub fn preferences(&self, identity: &Identity) -> ScalarMap {
        match self.lock().get(&identity.username) {
            Some(profile) => profile.preferences.clone(),
            None => default_preferences(),
        }
    }

    /// Merge the given keys into the caller's preferences and return the
    /// merged mapping. A missing record is created with empty preferences
    /// first, so the result holds exactly the given keys in that case.
    pub fn merge_preferences(&self, identity: &Identity, preferences: ScalarMap) -> ScalarMap {
        let mut profiles = self.lock();
        let profile = profiles
            .entry(identity.username.clone())
            .or_insert_with(|| Profile {
                username: identity.username.clone(),
                email: identity.email.clone(),
                full_name: identity.full_name.clone(),
                bio: None,
                avatar_url: None,
                preferences: ScalarMap::new(),
            });
        profile.preferences.extend(preferences);
        profile.preferences.clone()
    }
}
