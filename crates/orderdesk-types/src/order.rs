//! The delegation order model.
//!
//! An [`Order`] records that a requester wants `delegations_needed` admins to
//! delegate authority over `labels` for `duration_requested`. Its fields are
//! fixed at creation; only its membership in a registry changes over time.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{OrderId, OrderdeskError, Result};

/// One outstanding delegation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    requester_name: String,
    order_id: OrderId,
    time_requested: DateTime<Utc>,
    duration_requested: Duration,
    delegations_needed: u32,
    /// Admins the requester nominated to delegate.
    delegated_admins: Vec<String>,
    /// Admins to notify. May overlap with `delegated_admins`.
    contact_admins: Vec<String>,
    /// Kept in caller order so rendered label lists are stable; matched as a set.
    labels: Vec<String>,
}

impl Order {
    /// Build an order from already-validated parts. Never fails.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        requester_name: impl Into<String>,
        order_id: OrderId,
        time_requested: DateTime<Utc>,
        duration_requested: Duration,
        delegated_admins: Vec<String>,
        contact_admins: Vec<String>,
        labels: Vec<String>,
        delegations_needed: u32,
    ) -> Self {
        Self {
            requester_name: requester_name.into(),
            order_id,
            time_requested,
            duration_requested,
            delegations_needed,
            delegated_admins,
            contact_admins,
            labels,
        }
    }

    #[must_use]
    pub fn requester_name(&self) -> &str {
        &self.requester_name
    }

    #[must_use]
    pub fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    #[must_use]
    pub fn time_requested(&self) -> DateTime<Utc> {
        self.time_requested
    }

    #[must_use]
    pub fn duration_requested(&self) -> Duration {
        self.duration_requested
    }

    #[must_use]
    pub fn delegations_needed(&self) -> u32 {
        self.delegations_needed
    }

    #[must_use]
    pub fn delegated_admins(&self) -> &[String] {
        &self.delegated_admins
    }

    #[must_use]
    pub fn contact_admins(&self) -> &[String] {
        &self.contact_admins
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Whether every label of this order appears in `candidates`.
    ///
    /// Extra candidate labels are ignored. An order with no labels is
    /// covered by anything.
    pub fn covers<S: AsRef<str>>(&self, candidates: &[S]) -> bool {
        self.labels
            .iter()
            .all(|label| candidates.iter().any(|c| c.as_ref() == label))
    }

    /// When delegations granted for this order would lapse.
    ///
    /// Informational only; nothing in this crate expires orders. `None` if
    /// the duration does not fit in a calendar timestamp.
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        chrono::Duration::from_std(self.duration_requested)
            .ok()
            .and_then(|d| self.time_requested.checked_add_signed(d))
    }

    /// Caller-side sanity check. The registry itself never calls this.
    ///
    /// # Errors
    /// `InvalidOrder` if the requester is empty, there are no labels, or a
    /// label is empty.
    pub fn validate(&self) -> Result<()> {
        if self.requester_name.is_empty() {
            return Err(OrderdeskError::InvalidOrder {
                reason: "requester name is empty".to_string(),
            });
        }
        if self.labels.is_empty() {
            return Err(OrderdeskError::InvalidOrder {
                reason: format!("order {} has no labels", self.order_id),
            });
        }
        if self.labels.iter().any(String::is_empty) {
            return Err(OrderdeskError::InvalidOrder {
                reason: format!("order {} has an empty label", self.order_id),
            });
        }
        Ok(())
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Order {
    /// An order for `requester` over `labels`, requested at `time_requested`,
    /// asking two delegations for an hour from `alice`/`bob`.
    pub fn dummy(
        requester: &str,
        order_id: &str,
        labels: &[&str],
        time_requested: DateTime<Utc>,
    ) -> Self {
        Self::new(
            requester,
            OrderId::from(order_id),
            time_requested,
            Duration::from_secs(3600),
            vec!["alice".to_string(), "bob".to_string()],
            vec!["alice".to_string(), "bob".to_string()],
            labels.iter().map(ToString::to_string).collect(),
            2,
        )
    }
}
