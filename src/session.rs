//! Session store
//!
//! Holds the bearer token and the cached profile of the signed-in member.
//! The pair is persisted as one JSON value so a page reload restores both;
//! the visitor session is kept in memory only.

use clubsport_shared::{GUEST_TOKEN, LicenceType, Role, User};
use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::storage::KeyValueStore;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl Session {
    pub fn new(token: String, user: User) -> Self {
        Self {
            token: Some(token),
            user: Some(user),
        }
    }

    /// Visitor session: sentinel token and a synthetic, unlicensed member.
    pub fn guest() -> Self {
        let user = User {
            id: format!("guest-{}", uuid::Uuid::new_v4()),
            email: String::new(),
            nom: "Visiteur".to_string(),
            prenom: String::new(),
            role: Role::Member,
            type_licence: LicenceType::JeuLibre,
            est_licencie: false,
            points: 0,
            participations: 0,
            date_creation: None,
            achievements: Vec::new(),
        };
        Self {
            token: Some(GUEST_TOKEN.to_string()),
            user: Some(user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn is_guest(&self) -> bool {
        self.token.as_deref() == Some(GUEST_TOKEN)
    }

    /// Token to put in the `Authorization` header; the visitor token is never sent.
    pub fn bearer(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| *t != GUEST_TOKEN)
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.id.as_str())
    }

    pub fn licence_type(&self) -> Option<LicenceType> {
        self.user.as_ref().map(|u| u.type_licence)
    }

    pub fn is_licensed(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.est_licencie)
    }
}

/// Owner of the active [`Session`] and of its persisted copy.
///
/// Only `login`, `enter_as_guest`, `logout` and `set_user` write; each replaces
/// the whole value.
pub struct SessionStore<S: KeyValueStore> {
    storage: S,
    key: String,
    current: Session,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            current: Session::default(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.current
    }

    /// Restores the persisted session. Unreadable or visitor entries are dropped.
    pub fn hydrate(&mut self) -> &Session {
        let Some(raw) = self.storage.get(&self.key) else {
            self.current = Session::default();
            return &self.current;
        };

        match serde_json::from_str::<Session>(&raw) {
            Ok(session) if session.is_authenticated() && !session.is_guest() => {
                tracing::debug!("session restored from storage");
                self.current = session;
            }
            Ok(_) => {
                self.storage.remove(&self.key);
                self.current = Session::default();
            }
            Err(e) => {
                tracing::warn!("discarding unreadable stored session: {}", e);
                self.storage.remove(&self.key);
                self.current = Session::default();
            }
        }
        &self.current
    }

    /// Makes `(token, user)` the active session and persists it.
    ///
    /// The in-memory session is replaced even when persisting fails.
    pub fn login(&mut self, token: String, user: User) -> Result<(), StorageError> {
        tracing::info!(user_id = %user.id, "session opened");
        self.current = Session::new(token, user);
        self.persist()
    }

    /// Activates the visitor session. Nothing is written to storage.
    pub fn enter_as_guest(&mut self) -> &Session {
        self.storage.remove(&self.key);
        self.current = Session::guest();
        tracing::info!("visitor session opened");
        &self.current
    }

    /// Clears token and user in memory and in storage. No-op when already logged out.
    pub fn logout(&mut self) {
        if self.current.is_authenticated() {
            tracing::info!("session closed");
        }
        self.current = Session::default();
        self.storage.remove(&self.key);
    }

    /// Replaces the cached profile, keeping the token. Ignored without a token.
    pub fn set_user(&mut self, user: Option<User>) -> Result<(), StorageError> {
        if !self.current.is_authenticated() {
            return Ok(());
        }
        self.current.user = user;
        if self.current.is_guest() {
            return Ok(());
        }
        self.persist()
    }

    fn persist(&self) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&self.current)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.storage.set(&self.key, &raw)
    }
}
