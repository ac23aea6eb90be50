//! Rendering of lifecycle notifications.
//!
//! Every renderer is pure: it returns a [`Notification`] and never touches a
//! notifier, so the exact bytes can be checked in isolation.

use std::time::Duration;

use orderdesk_types::{Color, OrderId, constants, format_duration};
use url::form_urlencoded;

/// A rendered message plus the color it is posted with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub color: Color,
}

impl Notification {
    fn new(message: String, color: Color) -> Self {
        Self { message, color }
    }
}

/// Join labels for a delegation link. No spaces: the list is also embedded
/// in the link query, where a space would turn into `+`.
#[must_use]
pub fn link_label_list<S: AsRef<str>>(labels: &[S]) -> String {
    join(labels, constants::LINK_LABEL_SEPARATOR)
}

/// Join labels for prose.
#[must_use]
pub fn prose_label_list<S: AsRef<str>>(labels: &[S]) -> String {
    join(labels, constants::PROSE_LABEL_SEPARATOR)
}

fn join<S: AsRef<str>>(labels: &[S], sep: &str) -> String {
    labels
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(sep)
}

/// Broadcast announcing a new order.
///
/// `{requester} has created an order for the label {a,b}. requesting {n} delegations for {duration}`
#[must_use]
pub fn new_order<S: AsRef<str>>(
    requester: &str,
    labels: &[S],
    delegations_needed: u32,
    duration: Duration,
) -> Notification {
    Notification::new(
        format!(
            "{requester} has created an order for the label {}. requesting {delegations_needed} delegations for {}",
            link_label_list(labels),
            format_duration(duration),
        ),
        Color::Red,
    )
}

/// Fields carried in a delegation link's query string.
#[derive(Debug)]
pub struct DelegationLink<'a, S> {
    /// Admin being asked to delegate.
    pub delegator: &'a str,
    /// Name the link is addressed to (display name of `delegator`).
    pub display_name: &'a str,
    pub labels: &'a [S],
    pub duration: Duration,
    pub delegations_needed: u32,
    pub order_id: &'a OrderId,
    /// The requester, who receives the delegation.
    pub delegatee: &'a str,
}

/// Direct message to one contact admin with a pre-filled delegation link.
///
/// `@{display_name} - https://{link_host}?{query}`, query keys sorted.
#[must_use]
pub fn delegation_link<S: AsRef<str>>(link_host: &str, link: &DelegationLink<'_, S>) -> Notification {
    let labels = link_label_list(link.labels);
    let duration = format_duration(link.duration);
    let uses = link.delegations_needed.to_string();

    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("delegatee", link.delegatee)
        .append_pair("delegator", link.delegator)
        .append_pair("duration", &duration)
        .append_pair("label", &labels)
        .append_pair("ordernum", link.order_id.as_str())
        .append_pair("uses", &uses)
        .finish();

    Notification::new(
        format!("@{} - https://{link_host}?{query}", link.display_name),
        Color::Green,
    )
}

/// A delegation arrived that satisfies an outstanding order.
///
/// `{delegator} has delegated the label {a, b} to {delegatee} (per order {id}) for {duration}`
#[must_use]
pub fn delegation_received<S: AsRef<str>>(
    delegator: &str,
    delegatee: &str,
    order_id: &OrderId,
    duration: Duration,
    labels: &[S],
) -> Notification {
    Notification::new(
        format!(
            "{delegator} has delegated the label {} to {delegatee} (per order {order_id}) for {}",
            prose_label_list(labels),
            format_duration(duration),
        ),
        Color::Yellow,
    )
}

/// `{requester} has had order {id} fulfilled.`
#[must_use]
pub fn order_fulfilled(requester: &str, order_id: &OrderId) -> Notification {
    Notification::new(
        format!("{requester} has had order {order_id} fulfilled."),
        Color::Purple,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_order_uses_bare_commas() {
        let n = new_order("alice", &["prod-db", "us-east"], 2, Duration::from_secs(3600));
        assert_eq!(
            n.message,
            "alice has created an order for the label prod-db,us-east. requesting 2 delegations for 1h0m0s"
        );
        assert_eq!(n.color, Color::Red);
    }

    #[test]
    fn delegation_received_uses_comma_space() {
        let n = delegation_received(
            "bob",
            "alice",
            &OrderId::from("77aa"),
            Duration::from_secs(1800),
            &["prod-db", "us-east"],
        );
        assert_eq!(
            n.message,
            "bob has delegated the label prod-db, us-east to alice (per order 77aa) for 30m0s"
        );
        assert_eq!(n.color, Color::Yellow);
    }

    #[test]
    fn order_fulfilled_template() {
        let n = order_fulfilled("alice", &OrderId::from("77aa"));
        assert_eq!(n.message, "alice has had order 77aa fulfilled.");
        assert_eq!(n.color, Color::Purple);
    }

    #[test]
    fn delegation_link_query_is_sorted_and_encoded() {
        let id = OrderId::from("77aa");
        let n = delegation_link(
            "ro.example.com/delegate",
            &DelegationLink {
                delegator: "bob",
                display_name: "Bob B",
                labels: &["prod-db", "us east"][..],
                duration: Duration::from_secs(3600),
                delegations_needed: 2,
                order_id: &id,
                delegatee: "alice",
            },
        );
        assert_eq!(
            n.message,
            "@Bob B - https://ro.example.com/delegate?delegatee=alice&delegator=bob&duration=1h0m0s&label=prod-db%2Cus+east&ordernum=77aa&uses=2"
        );
        assert_eq!(n.color, Color::Green);
    }

    #[test]
    fn single_label_has_no_separator() {
        assert_eq!(link_label_list(&["a"]), "a");
        assert_eq!(prose_label_list(&["a"]), "a");
        assert_eq!(link_label_list::<&str>(&[]), "");
    }
}
