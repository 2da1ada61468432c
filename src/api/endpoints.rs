//! Endpoint paths of the agency REST API
//!
//! Paths are relative to the API base URL. `{id}` is replaced with the
//! URL-encoded profile id.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Endpoints {
    #[serde(default = "default_login")]
    pub login: String,
    #[serde(default = "default_signup")]
    pub signup: String,
    #[serde(default = "default_logout")]
    pub logout: String,
    #[serde(default = "default_profile")]
    pub profile: String,
    #[serde(default = "default_simple_callback")]
    pub simple_callback: String,
    #[serde(default = "default_maids")]
    pub maids: String,
    #[serde(default = "default_maid")]
    pub maid: String,
    #[serde(default = "default_user_favorite")]
    pub user_favorite: String,
    #[serde(default = "default_favorites")]
    pub favorites: String,
    #[serde(default = "default_contact")]
    pub contact: String,
}

fn default_login() -> String {
    "auth/login".to_string()
}

fn default_signup() -> String {
    "auth/signup".to_string()
}

fn default_logout() -> String {
    "auth/logout".to_string()
}

fn default_profile() -> String {
    "auth/profile".to_string()
}

fn default_simple_callback() -> String {
    "auth/simple-callback".to_string()
}

fn default_maids() -> String {
    "maids".to_string()
}

fn default_maid() -> String {
    "maids/{id}".to_string()
}

fn default_user_favorite() -> String {
    "user-favorites/{id}".to_string()
}

fn default_favorites() -> String {
    "user/favorites".to_string()
}

fn default_contact() -> String {
    "contact".to_string()
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            login: default_login(),
            signup: default_signup(),
            logout: default_logout(),
            profile: default_profile(),
            simple_callback: default_simple_callback(),
            maids: default_maids(),
            maid: default_maid(),
            user_favorite: default_user_favorite(),
            favorites: default_favorites(),
            contact: default_contact(),
        }
    }
}

impl Endpoints {
    /// `maids/{id}` for a profile
    pub fn maid_path(&self, id: &str) -> String {
        fill_id(&self.maid, id)
    }

    /// `user-favorites/{id}` for a profile
    pub fn user_favorite_path(&self, id: &str) -> String {
        fill_id(&self.user_favorite, id)
    }
}

/// Join a base URL and a relative path with exactly one `/`
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn fill_id(template: &str, id: &str) -> String {
    template.replace("{id}", &urlencoding::encode(id))
}
