//! Domain records
//!
//! - **profile**: helper profiles and their employment history
//! - **user**: the signed-in user
//! - **dates**: lenient calendar-date decoding
//! - **wire**: null-tolerant fields and `_id`/`id` keys

pub mod dates;
pub mod profile;
pub mod user;
pub mod wire;

pub use profile::{Availability, EmploymentRecord, HelperProfile, ProfileId};
pub use user::{Role, SessionUser, UserPatch};
