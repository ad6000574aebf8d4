//! Shared types for the Atelier admin console core
//!
//! Common types used across the engine and client crates: domain models,
//! the unified error module, the API response envelope, and utility helpers.

pub mod error;
pub mod models;
pub mod response;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use response::ApiEnvelope;
pub use serde::{Deserialize, Serialize};
