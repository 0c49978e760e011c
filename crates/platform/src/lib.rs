//! Platform detection and host abstractions for the hparse build tooling
//!
//! This crate provides the pieces of the build that depend on the host:
//! - Target platform resolution (environment override or container runtime query)
//! - User identity for container user mapping

mod error;
mod platform;
mod user;

pub use error::PlatformError;
pub use platform::{PLATFORM_ENV, Platform};
pub use user::current_user_ids;
