//! API Layer
//!
//! HTTP access to the agency backend.

pub mod client;

pub use client::*;
