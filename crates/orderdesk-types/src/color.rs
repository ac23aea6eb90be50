//! Severity colors attached to outbound notifications.

use serde::{Deserialize, Serialize};

/// Background color a chat room renders a notification with.
///
/// Each lifecycle event has a fixed color: new orders are [`Color::Red`],
/// delegation links [`Color::Green`], received delegations
/// [`Color::Yellow`] and fulfilled orders [`Color::Purple`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Yellow,
    Red,
    Green,
    Purple,
    Gray,
    Random,
}

impl Color {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yellow => "yellow",
            Self::Red => "red",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Gray => "gray",
            Self::Random => "random",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
