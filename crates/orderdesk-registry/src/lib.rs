//! # orderdesk-registry
//!
//! Bookkeeping for outstanding **delegation orders**: a requester asks a
//! number of admins to delegate authority over a set of labels, and the
//! registry tracks the request until the caller judges it fulfilled.
//!
//! ## Components
//!
//! 1. **Registry**: owns the live orders behind a single mutex
//! 2. **Matcher**: label-subset rule with a deterministic tie-break
//! 3. **Message**: byte-exact rendering of lifecycle notifications
//! 4. **Notifier**: best-effort delivery capability (no-op, tracing, in-memory)
//!
//! ## Order Flow
//!
//! ```text
//! OrderId::generate() → Order::new() → Registry::register()   [red + green]
//!     → Registry::record_delegation()                          [yellow]
//!     → Registry::remove()                                     [purple]
//! ```

pub mod matcher;
pub mod message;
pub mod notifier;
pub mod registry;

pub use message::Notification;
pub use notifier::{NoopNotifier, Notifier, RecordingNotifier, TracingNotifier};
pub use registry::Registry;
