//! Local persisted state
//!
//! A small key/value store kept next to the user's data. The keys mirror
//! what the web front-end keeps in browser localStorage, and the key names
//! are shared with it.

#[cfg(feature = "client")]
mod error;
#[cfg(feature = "client")]
mod local;
#[cfg(feature = "client")]
mod preferences;

#[cfg(feature = "client")]
pub use error::{StoreError, StoreResult};
#[cfg(feature = "client")]
pub use local::LocalStore;
#[cfg(feature = "client")]
pub use preferences::Preferences;

/// Set once the first-visit welcome modal has been dismissed
pub const WELCOME_SEEN_KEY: &str = "hasSeenWelcomeModal";

/// Display fields of the last signed-in user
pub const CACHED_USER_KEY: &str = "cachedUser";

/// Last successful reviews fetch
pub const REVIEWS_CACHE_KEY: &str = "reviewsCache";

/// File name of the store inside the data directory
pub const STORE_FILE: &str = "helperhub.db";
