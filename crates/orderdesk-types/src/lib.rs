//! # orderdesk-types
//!
//! Shared types, errors, and configuration for the **orderdesk** delegation
//! order registry.
//!
//! This crate is the leaf dependency of the workspace. It defines:
//!
//! - **Identifiers**: [`OrderId`]
//! - **Order model**: [`Order`]
//! - **Notification colors**: [`Color`]
//! - **Configuration**: [`RegistryConfig`]
//! - **Errors**: [`OrderdeskError`] with `OD_ERR_` prefix codes
//! - **Formatting**: [`format_duration`]
//! - **Constants**: defaults and id sizing

pub mod color;
pub mod config;
pub mod constants;
pub mod duration;
pub mod error;
pub mod ids;
pub mod order;

// Re-export all primary types at crate root for ergonomic imports:
//   use orderdesk_types::{Order, OrderId, Color, ...};

pub use color::*;
pub use config::*;
pub use duration::*;
pub use error::*;
pub use ids::*;
pub use order::*;

// Constants are accessed via `orderdesk_types::constants::FOO`
// (not re-exported to avoid name collisions).
