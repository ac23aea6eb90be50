//! Order identifiers.
//!
//! An [`OrderId`] is an opaque token. It keys the registry map and travels
//! out in notification links, so callers must not assume anything about it
//! beyond "unique and URL-safe".

use std::fmt;

use rand::{RngCore, rngs::OsRng};
use serde::{Deserialize, Serialize};

use crate::{OrderdeskError, Result, constants};

// ---------------------------------------------------------------------------
// OrderId
// ---------------------------------------------------------------------------

/// Opaque order identifier.
///
/// Freshly generated ids are lowercase hex over
/// [`constants::ORDER_ID_BYTES`] bytes from the OS RNG. Ids produced
/// elsewhere can be wrapped with `From`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Draw a new unpredictable id from the operating system's entropy source.
    ///
    /// # Errors
    /// Returns [`OrderdeskError::EntropyUnavailable`] if the OS RNG fails.
    /// No fallback source is ever used.
    pub fn generate() -> Result<Self> {
        let mut bytes = [0u8; constants::ORDER_ID_BYTES];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| OrderdeskError::EntropyUnavailable(e.to_string()))?;
        Ok(Self(hex::encode(bytes)))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for OrderId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for OrderId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl AsRef<str> for OrderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn generated_id_is_lowercase_hex() {
        let id = OrderId::generate().unwrap();
        assert_eq!(id.as_str().len(), constants::ORDER_ID_BYTES * 2);
        assert!(
            id.as_str()
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)),
            "unexpected id: {id}"
        );
    }

    #[test]
    fn generated_ids_do_not_collide() {
        let ids: HashSet<OrderId> = (0..1000).map(|_| OrderId::generate().unwrap()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn wrapped_id_is_kept_verbatim() {
        let id = OrderId::from("ord-42");
        assert_eq!(id.to_string(), "ord-42");
        assert_eq!(id.clone().into_inner(), "ord-42");
        assert_eq!(OrderId::from("ord-42".to_string()), id);
    }

    #[test]
    fn serde_is_transparent() {
        let id = OrderId::from("abc123");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abc123\"");
        let back: OrderId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
