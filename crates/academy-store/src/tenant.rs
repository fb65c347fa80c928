//! Tenant scoping and the current-user collaborator.
//!
//! Stores stamp `club_id` and default user references onto new records. The
//! signed-in user lives outside the store layer; it is injected through
//! [`CurrentUser`].

use std::sync::{Arc, PoisonError, RwLock};

/// Supplies the user id applied to `created_by_user_id`-style defaults.
pub trait CurrentUser: Send + Sync {
    fn user_id(&self) -> Option<String>;
}

/// Current user that can be swapped at runtime (sign-in / sign-out).
#[derive(Debug, Default)]
pub struct SessionUser {
    user_id: RwLock<Option<String>>,
}

impl SessionUser {
    #[must_use]
    pub fn new(user_id: Option<String>) -> Self {
        Self {
            user_id: RwLock::new(user_id),
        }
    }

    pub fn sign_in(&self, user_id: impl Into<String>) {
        *self.user_id.write().unwrap_or_else(PoisonError::into_inner) = Some(user_id.into());
    }

    pub fn sign_out(&self) {
        *self.user_id.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl CurrentUser for SessionUser {
    fn user_id(&self) -> Option<String> {
        self.user_id
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Values stamped onto a record when it is built from a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteContext {
    pub club_id: String,
    pub user_id: Option<String>,
}

impl WriteContext {
    #[must_use]
    pub fn new(club_id: impl Into<String>, user_id: Option<String>) -> Self {
        Self {
            club_id: club_id.into(),
            user_id,
        }
    }

    /// `explicit` if given, else the current user.
    #[must_use]
    pub fn user_or(&self, explicit: Option<String>) -> Option<String> {
        explicit.or_else(|| self.user_id.clone())
    }
}

/// Tenant shared by every store of one service.
pub struct Tenant {
    club_id: String,
    user: Arc<dyn CurrentUser>,
}

impl Tenant {
    #[must_use]
    pub fn new(club_id: impl Into<String>, user: Arc<dyn CurrentUser>) -> Self {
        Self {
            club_id: club_id.into(),
            user,
        }
    }

    #[must_use]
    pub fn club_id(&self) -> &str {
        &self.club_id
    }

    /// Snapshot of tenant and current user for one write.
    #[must_use]
    pub fn write_context(&self) -> WriteContext {
        WriteContext::new(self.club_id.clone(), self.user.user_id())
    }
}

impl std::fmt::Debug for Tenant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tenant")
            .field("club_id", &self.club_id)
            .field("user_id", &self.user.user_id())
            .finish()
    }
}
