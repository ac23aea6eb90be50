//! System-wide constants for orderdesk.

/// Random bytes drawn per generated order id (hex-encoded to twice as many chars).
pub const ORDER_ID_BYTES: usize = 24;

/// Default key under which admins store their chat display name.
pub const DEFAULT_DISPLAY_NAME_KEY: &str = "HipchatName";

/// Default host (and path) that delegation links point at.
pub const DEFAULT_LINK_HOST: &str = "localhost:8080/delegate";

/// Separator for label lists that end up inside a URL query.
pub const LINK_LABEL_SEPARATOR: &str = ",";

/// Separator for label lists shown only as prose.
pub const PROSE_LABEL_SEPARATOR: &str = ", ";

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
