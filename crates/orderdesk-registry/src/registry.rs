//! The registry of outstanding delegation orders.
//!
//! One [`Registry`] is constructed per running server and passed around
//! explicitly (typically in an `Arc`). A single mutex guards the order map.
//! Notifications are rendered and dispatched after the lock is released, so
//! a slow or failing notifier never holds up bookkeeping.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use orderdesk_types::{Order, OrderId, OrderdeskError, RegistryConfig, Result};

use crate::matcher;
use crate::message::{self, DelegationLink, Notification};
use crate::notifier::{NoopNotifier, Notifier};

/// Outstanding orders keyed by id, plus the notifier lifecycle events go to.
pub struct Registry {
    orders: Mutex<HashMap<OrderId, Order>>,
    notifier: Arc<dyn Notifier>,
    config: RegistryConfig,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("orders", &self.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Registry {
    /// An empty registry with the default [`RegistryConfig`].
    #[must_use]
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self::with_config(notifier, RegistryConfig::default())
    }

    #[must_use]
    pub fn with_config(notifier: Arc<dyn Notifier>, config: RegistryConfig) -> Self {
        Self {
            orders: Mutex::new(HashMap::new()),
            notifier,
            config,
        }
    }

    /// An empty registry that sends no notifications.
    #[must_use]
    pub fn silent() -> Self {
        Self::new(Arc::new(NoopNotifier))
    }

    #[must_use]
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Key under which callers look up an admin's display name when building
    /// the `owners` map for [`Registry::register`].
    #[must_use]
    pub fn display_name_key(&self) -> &str {
        &self.config.display_name_key
    }

    // =================================================================
    // Lifecycle
    // =================================================================

    /// Record `order` as outstanding and announce it.
    ///
    /// An order already stored under the same id is replaced and returned;
    /// ids are expected to be unique, so this is logged but not refused.
    ///
    /// Sends one broadcast, then one delegation link per contact admin in
    /// `contact_admins` order. `owners` maps admin identity to display name;
    /// admins missing from it are addressed by identity.
    pub fn register(&self, order: Order, owners: &HashMap<String, String>) -> Option<Order> {
        let mut outgoing = Vec::with_capacity(order.contact_admins().len() + 1);
        outgoing.push(message::new_order(
            order.requester_name(),
            order.labels(),
            order.delegations_needed(),
            order.duration_requested(),
        ));
        for admin in order.contact_admins() {
            let display_name = owners.get(admin).map_or(admin.as_str(), String::as_str);
            outgoing.push(message::delegation_link(
                &self.config.link_host,
                &DelegationLink {
                    delegator: admin,
                    display_name,
                    labels: order.labels(),
                    duration: order.duration_requested(),
                    delegations_needed: order.delegations_needed(),
                    order_id: order.order_id(),
                    delegatee: order.requester_name(),
                },
            ));
        }

        tracing::debug!(
            order_id = %order.order_id(),
            requester = order.requester_name(),
            labels = ?order.labels(),
            delegations_needed = order.delegations_needed(),
            "order registered"
        );

        let replaced = self.lock().insert(order.order_id().clone(), order);
        if let Some(old) = &replaced {
            tracing::warn!(
                order_id = %old.order_id(),
                previous_requester = old.requester_name(),
                "order id reused, previous order replaced"
            );
        }

        self.dispatch(&outgoing);
        replaced
    }

    /// Drop a fulfilled order and announce it.
    ///
    /// Unknown ids are a no-op returning `None`, so a second fulfillment of
    /// the same order is harmless and sends nothing.
    pub fn remove(&self, order_id: &OrderId) -> Option<Order> {
        let removed = self.lock().remove(order_id);
        match &removed {
            Some(order) => {
                tracing::info!(
                    %order_id,
                    requester = order.requester_name(),
                    "order fulfilled"
                );
                self.dispatch(&[message::order_fulfilled(order.requester_name(), order_id)]);
            }
            None => tracing::debug!(%order_id, "remove of unknown order ignored"),
        }
        removed
    }

    // =================================================================
    // Matching
    // =================================================================

    /// The outstanding order a delegation of `labels` for `requester`
    /// satisfies. See [`crate::matcher`] for the rule and tie-break.
    pub fn find_order<S: AsRef<str>>(&self, requester: &str, labels: &[S]) -> Option<OrderId> {
        let orders = self.lock();
        let found = matcher::find_match(orders.values(), requester, labels)
            .map(|order| order.order_id().clone());
        tracing::debug!(
            requester,
            found = ?found.as_ref().map(OrderId::as_str),
            "find_order"
        );
        found
    }

    /// Match a delegation by `delegator` and, on a match, announce it.
    ///
    /// `labels` and `duration` are what the delegator actually granted; the
    /// requester is named as delegatee. Returns the matched order id.
    pub fn record_delegation<S: AsRef<str>>(
        &self,
        delegator: &str,
        requester: &str,
        labels: &[S],
        duration: Duration,
    ) -> Option<OrderId> {
        let order_id = self.find_order(requester, labels)?;
        self.dispatch(&[message::delegation_received(
            delegator, requester, &order_id, duration, labels,
        )]);
        Some(order_id)
    }

    // =================================================================
    // Queries
    // =================================================================

    #[must_use]
    pub fn get(&self, order_id: &OrderId) -> Option<Order> {
        self.lock().get(order_id).cloned()
    }

    /// Like [`Registry::get`], for callers that treat absence as a failure.
    ///
    /// # Errors
    /// `OrderNotFound` if `order_id` is not outstanding.
    pub fn require(&self, order_id: &OrderId) -> Result<Order> {
        self.get(order_id)
            .ok_or_else(|| OrderdeskError::OrderNotFound(order_id.clone()))
    }

    #[must_use]
    pub fn contains(&self, order_id: &OrderId) -> bool {
        self.lock().contains_key(order_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Copies of all outstanding orders, earliest request first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Order> {
        let mut orders: Vec<Order> = self.lock().values().cloned().collect();
        orders.sort_by(matcher::precedence);
        orders
    }

    // =================================================================
    // Internals
    // =================================================================

    fn lock(&self) -> MutexGuard<'_, HashMap<OrderId, Order>> {
        // Every mutation is a single insert/remove, so a poisoned map is intact.
        self.orders.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn dispatch(&self, notifications: &[Notification]) {
        for n in notifications {
            if let Err(err) = self.notifier.notify(&n.message, n.color) {
                tracing::warn!(color = %n.color, error = %err, "notification dropped");
            }
        }
    }
}
