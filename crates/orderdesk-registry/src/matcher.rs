//! Label-subset matching of delegations against outstanding orders.
//!
//! A delegation by some admin for `(requester, labels)` satisfies an order
//! when the order was placed by `requester` and *every* label on the order
//! is among `labels`. Extra delegated labels are ignored.
//!
//! Several orders can qualify at once (e.g. `{a}` and `{a, b}` against a
//! delegation of `{a, b}`). The winner is the one requested first, with the
//! smaller order id breaking equal timestamps, so the result never depends
//! on map iteration order.

use std::cmp::Ordering;

use orderdesk_types::Order;

/// The qualifying order with the highest precedence, if any.
pub fn find_match<'a, I, S>(orders: I, requester: &str, candidates: &[S]) -> Option<&'a Order>
where
    I: IntoIterator<Item = &'a Order>,
    S: AsRef<str>,
{
    orders
        .into_iter()
        .filter(|order| satisfies(order, requester, candidates))
        .min_by(|a, b| precedence(a, b))
}

/// Whether a delegation of `candidates` for `requester` satisfies `order`.
pub fn satisfies<S: AsRef<str>>(order: &Order, requester: &str, candidates: &[S]) -> bool {
    order.requester_name() == requester && order.covers(candidates)
}

/// Earlier request first, then smaller id.
pub fn precedence(a: &Order, b: &Order) -> Ordering {
    a.time_requested()
        .cmp(&b.time_requested())
        .then_with(|| a.order_id().cmp(b.order_id()))
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, TimeZone, Utc};

    use super::*;

    fn at(minutes: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap() + Duration::minutes(minutes)
    }

    #[test]
    fn empty_input_matches_nothing() {
        let orders: Vec<Order> = Vec::new();
        assert!(find_match(&orders, "alice", &["a"]).is_none());
    }

    #[test]
    fn missing_label_does_not_stop_the_scan() {
        let orders = vec![
            Order::dummy("alice", "o1", &["a", "z"], at(0)),
            Order::dummy("alice", "o2", &["a"], at(1)),
        ];
        let found = find_match(&orders, "alice", &["a"]).unwrap();
        assert_eq!(found.order_id().as_str(), "o2");
    }

    #[test]
    fn requester_must_match() {
        let orders = vec![Order::dummy("alice", "o1", &["a"], at(0))];
        assert!(find_match(&orders, "bob", &["a"]).is_none());
    }

    #[test]
    fn earliest_request_wins() {
        let orders = vec![
            Order::dummy("alice", "late", &["a", "b"], at(5)),
            Order::dummy("alice", "early", &["a"], at(0)),
        ];
        let found = find_match(&orders, "alice", &["a", "b"]).unwrap();
        assert_eq!(found.order_id().as_str(), "early");
    }

    #[test]
    fn equal_times_fall_back_to_id() {
        let orders = vec![
            Order::dummy("alice", "bbb", &["a"], at(0)),
            Order::dummy("alice", "aaa", &["a"], at(0)),
        ];
        let found = find_match(&orders, "alice", &["a"]).unwrap();
        assert_eq!(found.order_id().as_str(), "aaa");
    }

    #[test]
    fn satisfies_checks_both_parts() {
        let order = Order::dummy("alice", "o1", &["prod-db", "us-east"], at(0));
        assert!(satisfies(&order, "alice", &["prod-db", "us-east", "extra"]));
        assert!(!satisfies(&order, "alice", &["prod-db"]));
        assert!(!satisfies(&order, "bob", &["prod-db", "us-east"]));
    }
}
