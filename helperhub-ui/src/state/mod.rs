//! State Management
//!
//! Global UI state and the authentication context.

pub mod auth;
pub mod global;

pub use auth::{provide_auth, AuthState};
pub use global::{provide_global_state, GlobalState, Notice, NoticeKind};
