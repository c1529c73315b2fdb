use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<UserId> for Uuid {
    fn from(id: UserId) -> Self {
        id.0
    }
}

/// Stored as a small integer: 0 for customers, 1 for admins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn code(self) -> i16 {
        match self {
            Role::User => 0,
            Role::Admin => 1,
        }
    }

    /// Unknown codes are treated as the least privileged role.
    pub fn from_code(code: i16) -> Self {
        match code {
            1 => Role::Admin,
            _ => Role::User,
        }
    }

    pub fn is_admin(self) -> bool {
        self == Role::Admin
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: String,
    pub address: String,
    pub answer: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// What clients get to see of a user. Never carries the hash or the security answer.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct UserView {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: Uuid,
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[schema(example = "+62 812 0000 0000")]
    pub phone: String,
    #[schema(example = "Jl. Sudirman 1, Jakarta")]
    pub address: String,
    /// 0 = customer, 1 = admin
    #[schema(example = 0)]
    pub role: i16,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            address: user.address.clone(),
            role: user.role.code(),
        }
    }
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

/// Partial profile change. Blank fields keep whatever is stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl ProfileUpdate {
    /// Applies the update on top of `current`.
    ///
    /// `new_password_hash` replaces the stored hash only when present.
    pub fn merge_into(&self, current: &User, new_password_hash: Option<String>) -> User {
        User {
            name: pick(&self.name, &current.name),
            email: pick(&self.email, &current.email),
            phone: pick(&self.phone, &current.phone),
            address: pick(&self.address, &current.address),
            password_hash: new_password_hash.unwrap_or_else(|| current.password_hash.clone()),
            ..current.clone()
        }
    }
}

fn pick(incoming: &Option<String>, stored: &str) -> String {
    match incoming.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => stored.to_string(),
    }
}
