//! Signed-in user session.
//!
//! The session is an explicit object shared through a [`SessionHandle`]
//! and handed to whatever needs it (the HTTP source attaches its bearer
//! token). Nothing reads it from global state.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Marketplace role of a signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Student,
    Instructor,
}

/// The user a session belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

/// In-memory session state.
#[derive(Clone, Default)]
pub struct Session {
    user: Option<SessionUser>,
    token: Option<String>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("user", &self.user)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Session {
    /// An anonymous session.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Replace the session with a signed-in user.
    pub fn sign_in(&mut self, user: SessionUser, token: impl Into<String>) {
        let token = token.into();
        self.token = Some(token.trim().to_string()).filter(|t| !t.is_empty());
        self.user = Some(user);
    }

    /// Drop the user and token.
    pub fn sign_out(&mut self) {
        self.user = None;
        self.token = None;
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// `Authorization` header value, when a token is held.
    pub fn bearer(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }
}

/// Shared, mutable handle to a [`Session`].
pub type SessionHandle = Arc<RwLock<Session>>;

/// Create a handle holding an anonymous session.
pub fn new_session_handle() -> SessionHandle {
    Arc::new(RwLock::new(Session::anonymous()))
}
