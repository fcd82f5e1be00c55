//! In-memory storage for users.

use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

use tokio::sync::RwLock;
use tracing::{debug, info};

use super::UserError;
use crate::model::{User, UserInput};

#[derive(Debug, Default)]
struct Store {
    next_id: u64,
    users: BTreeMap<u64, User>,
}

/// A thread-safe user repository backed by a `BTreeMap`.
#[derive(Debug, Default)]
pub struct UserRepository {
    store: RwLock<Store>,
}

impl UserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Users ordered by id. Soft-deleted users are included only when `with_trashed`.
    pub async fn all(&self, with_trashed: bool) -> Vec<User> {
        let store = self.store.read().await;
        store
            .users
            .values()
            .filter(|u| with_trashed || !u.trashed())
            .cloned()
            .collect()
    }

    /// Finds a live user by key. Keys that aren't numeric never match.
    pub async fn find(&self, key: &str) -> Option<User> {
        let id = key.parse::<u64>().ok()?;
        let store = self.store.read().await;
        let user = store.users.get(&id).filter(|u| !u.trashed()).cloned();
        debug!(id, found = user.is_some(), "Find");
        user
    }

    pub async fn create(&self, input: UserInput) -> Result<User, UserError> {
        let (Some(name), Some(email)) = (input.name, input.email) else {
            return Err(UserError::ValidationError("name and email are required".into()));
        };

        let mut store = self.store.write().await;
        if store.users.values().any(|u| !u.trashed() && u.email == email) {
            return Err(UserError::AlreadyExists(email));
        }

        store.next_id += 1;
        let user = User::new(store.next_id, name, email);
        store.users.insert(user.id, user.clone());
        info!(id = user.id, size = store.users.len(), "Created");
        Ok(user)
    }

    pub async fn update(&self, key: &str, input: UserInput) -> Result<User, UserError> {
        let mut store = self.store.write().await;
        let id = parse_key(key)?;
        let user = store
            .users
            .get_mut(&id)
            .filter(|u| !u.trashed())
            .ok_or_else(|| UserError::NotFound(key.to_string()))?;

        if let Some(name) = input.name {
            user.name = name;
        }
        if let Some(email) = input.email {
            user.email = email;
        }
        info!(id = user.id, "Updated");
        Ok(user.clone())
    }

    /// Removes the user for good.
    pub async fn delete(&self, key: &str) -> Result<(), UserError> {
        let mut store = self.store.write().await;
        let id = parse_key(key)?;
        match store.users.remove(&id) {
            Some(user) => {
                info!(id = user.id, size = store.users.len(), "Deleted");
                Ok(())
            }
            None => Err(UserError::NotFound(key.to_string())),
        }
    }

    /// Marks the user as deleted, keeping the record.
    pub async fn soft_delete(&self, key: &str) -> Result<(), UserError> {
        let mut store = self.store.write().await;
        let id = parse_key(key)?;
        let user = store
            .users
            .get_mut(&id)
            .filter(|u| !u.trashed())
            .ok_or_else(|| UserError::NotFound(key.to_string()))?;

        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        user.deleted_at = Some(now);
        info!(id = user.id, "Soft deleted");
        Ok(())
    }
}

fn parse_key(key: &str) -> Result<u64, UserError> {
    key.parse()
        .map_err(|_| UserError::NotFound(key.to_string()))
}
