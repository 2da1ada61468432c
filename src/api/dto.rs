//! Data Transfer Objects
//!
//! Request and response bodies exchanged with the agency backend.
//! The backend wraps some responses in an envelope and not others, so the
//! response types accept both shapes.

use serde::{Deserialize, Serialize};

use crate::models::{HelperProfile, ProfileId, SessionUser};

// ============================================
// AUTH DTOs
// ============================================

/// `POST login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST signup`
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Response of login, signup, profile and simple-callback
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum UserEnvelope {
    Wrapped { user: SessionUser },
    Bare(SessionUser),
}

impl UserEnvelope {
    pub fn into_user(self) -> SessionUser {
        match self {
            UserEnvelope::Wrapped { user } => user,
            UserEnvelope::Bare(user) => user,
        }
    }
}

// ============================================
// CATALOGUE DTOs
// ============================================

/// Response of `GET maids`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ProfileListEnvelope {
    Wrapped {
        #[serde(alias = "data")]
        maids: Vec<HelperProfile>,
    },
    Bare(Vec<HelperProfile>),
}

impl ProfileListEnvelope {
    pub fn into_profiles(self) -> Vec<HelperProfile> {
        match self {
            ProfileListEnvelope::Wrapped { maids } => maids,
            ProfileListEnvelope::Bare(maids) => maids,
        }
    }
}

/// Response of `GET maids/:id`, create and update
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ProfileEnvelope {
    Wrapped {
        #[serde(alias = "data")]
        maid: HelperProfile,
    },
    Bare(HelperProfile),
}

impl ProfileEnvelope {
    pub fn into_profile(self) -> HelperProfile {
        match self {
            ProfileEnvelope::Wrapped { maid } => maid,
            ProfileEnvelope::Bare(maid) => maid,
        }
    }
}

// ============================================
// FAVORITES DTOs
// ============================================

/// One entry of the favorites list: an id, an embedded profile, or a
/// join record pointing at the profile through `maidId` or `maid`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum FavoriteItem {
    Id(ProfileId),
    Record(FavoriteRecord),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRecord {
    #[serde(default)]
    maid_id: Option<ProfileRef>,
    #[serde(default)]
    maid: Option<ProfileRef>,
    #[serde(rename = "_id", default)]
    object_id: Option<ProfileId>,
    #[serde(default)]
    id: Option<ProfileId>,
}

/// A profile referenced by id or populated in place
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ProfileRef {
    Id(ProfileId),
    Populated(HelperProfile),
}

impl ProfileRef {
    fn into_id(self) -> ProfileId {
        match self {
            ProfileRef::Id(id) => id,
            ProfileRef::Populated(profile) => profile.id,
        }
    }
}

impl FavoriteItem {
    /// The favorited profile's id; the record's own id only counts when it
    /// does not reference a profile
    pub fn into_id(self) -> Option<ProfileId> {
        match self {
            FavoriteItem::Id(id) => Some(id),
            FavoriteItem::Record(record) => match record.maid_id.or(record.maid) {
                Some(profile) => Some(profile.into_id()),
                None => crate::models::wire::record_id(record.object_id, record.id).ok(),
            },
        }
    }
}

/// Response of `GET favorites`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum FavoritesEnvelope {
    Wrapped { favorites: Vec<FavoriteItem> },
    Bare(Vec<FavoriteItem>),
}

impl FavoritesEnvelope {
    pub fn into_ids(self) -> Vec<ProfileId> {
        let items = match self {
            FavoritesEnvelope::Wrapped { favorites } => favorites,
            FavoritesEnvelope::Bare(favorites) => favorites,
        };
        items.into_iter().filter_map(FavoriteItem::into_id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_envelope_shapes() {
        let wrapped: UserEnvelope =
            serde_json::from_str(r#"{"user": {"id": "u1", "name": "Kim"}}"#).unwrap();
        assert_eq!(wrapped.into_user().name, "Kim");

        let bare: UserEnvelope = serde_json::from_str(r#"{"id": "u2", "name": "Lee"}"#).unwrap();
        assert_eq!(bare.into_user().id, "u2");
    }

    #[test]
    fn test_profile_list_shapes() {
        let bare: ProfileListEnvelope =
            serde_json::from_str(r#"[{"id": "m1", "name": "Anna"}]"#).unwrap();
        assert_eq!(bare.into_profiles().len(), 1);

        let wrapped: ProfileListEnvelope =
            serde_json::from_str(r#"{"data": [{"_id": "m1"}, {"_id": "m2"}]}"#).unwrap();
        assert_eq!(wrapped.into_profiles().len(), 2);
    }

    #[test]
    fn test_favorites_shapes() {
        let ids: FavoritesEnvelope = serde_json::from_str(r#"["m1", "m2"]"#).unwrap();
        assert_eq!(ids.into_ids(), vec!["m1", "m2"]);

        let embedded: FavoritesEnvelope = serde_json::from_str(
            r#"{"favorites": [{"_id": "m3", "name": "Siti"}, "m4"]}"#,
        )
        .unwrap();
        assert_eq!(embedded.into_ids(), vec!["m3", "m4"]);
    }

    #[test]
    fn test_favorites_join_records() {
        let joined: FavoritesEnvelope = serde_json::from_str(
            r#"{"favorites": [
                {"_id": "fav1", "userId": "u1", "maidId": "m1"},
                {"_id": "fav2", "userId": "u1", "maid": {"_id": "m2", "id": "m2", "name": "Siti"}},
                {"_id": "fav3", "userId": "u1", "maidId": {"_id": "m3", "skills": null}},
                {"userId": "u1"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(joined.into_ids(), vec!["m1", "m2", "m3"]);
    }

    #[test]
    fn test_profile_list_tolerates_duplicate_ids_and_nulls() {
        let list: ProfileListEnvelope = serde_json::from_str(
            r#"{"maids": [{"_id": "m1", "id": "m1", "name": "Anna", "skills": null}]}"#,
        )
        .unwrap();
        let profiles = list.into_profiles();
        assert_eq!(profiles[0].id, "m1");
        assert!(profiles[0].skills.is_empty());
    }
}
