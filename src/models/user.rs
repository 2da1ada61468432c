//! Session user records

use serde::{Deserialize, Serialize};

use super::wire;

/// Access level of a signed-in user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    #[serde(other)]
    User,
}

/// The signed-in user as reported by the profile endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UserWire")]
pub struct SessionUser {
    pub id: String,

    /// Display name
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    pub role: Role,
}

#[derive(Deserialize)]
struct UserWire {
    #[serde(rename = "_id", default)]
    object_id: Option<String>,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default, deserialize_with = "wire::null_as_default")]
    role: Role,
}

impl TryFrom<UserWire> for SessionUser {
    type Error = String;

    fn try_from(wire: UserWire) -> Result<Self, Self::Error> {
        Ok(Self {
            id: wire::record_id(wire.object_id, wire.id)?,
            name: wire.name.or(wire.username).unwrap_or_default(),
            email: wire.email,
            role: wire.role,
        })
    }
}

impl SessionUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Name to greet the user with
    pub fn display_name(&self) -> &str {
        if !self.name.is_empty() {
            &self.name
        } else {
            self.email.as_deref().unwrap_or("Guest")
        }
    }

    /// Merge locally edited display fields
    pub fn apply(&mut self, patch: &UserPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(email) = &patch.email {
            self.email = Some(email.clone());
        }
    }
}

/// Partial update to the signed-in user's display fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
