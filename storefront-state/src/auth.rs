use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::storage::LocalStorage;
use crate::store::{Action, Store};

pub const AUTH_KEY: &str = "auth";

/// Mirrors the `user` object returned by the login endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub role: i16,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.role == 1
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthState {
    pub user: Option<AuthUser>,
    #[serde(default)]
    pub token: String,
}

impl AuthState {
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some() && !self.token.is_empty()
    }

    /// Value for the `Authorization` header, if signed in.
    pub fn bearer(&self) -> Option<String> {
        self.is_signed_in().then(|| format!("Bearer {}", self.token))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthAction {
    Login { user: AuthUser, token: String },
    Logout,
    /// Replaces the profile after an update; the token is kept.
    UpdateUser(AuthUser),
}

impl Action<AuthState> for AuthAction {
    fn reduce(self, state: &AuthState) -> AuthState {
        match self {
            AuthAction::Login { user, token } => AuthState {
                user: Some(user),
                token,
            },
            AuthAction::Logout => AuthState::default(),
            AuthAction::UpdateUser(user) => AuthState {
                user: Some(user),
                token: state.token.clone(),
            },
        }
    }

    fn clears_storage(&self) -> bool {
        matches!(self, AuthAction::Logout)
    }
}

pub type AuthStore = Store<AuthState, AuthAction>;

impl AuthStore {
    pub fn open(storage: Arc<dyn LocalStorage>) -> Self {
        Store::persisted(AUTH_KEY, storage)
    }
}
