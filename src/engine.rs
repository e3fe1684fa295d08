//! Grouping/sorting engine.
//!
//! `compute` is the pure core of the board: it turns the flat ticket snapshot
//! into an ordered list of labeled columns. It is deterministic, has no side
//! effects, and is re-run in full on every input change (board inputs are
//! small; there is nothing to memoize).

use std::collections::HashMap;

use unicase::UniCase;

use crate::types::{GroupingMode, SortingMode, Ticket, User};

/// Placeholder label for tickets whose `userId` resolves to no known user.
pub const UNKNOWN_USER: &str = "Unknown User";

/// Fixed column order for priority grouping. Every label is emitted even when
/// its column is empty.
pub const PRIORITY_GROUP_ORDER: &[&str] =
    &["No Priority", "Urgent", "High", "Medium", "Low"];

/// Canonical status column order. Unanticipated statuses observed in the feed
/// are appended after these in first-observed order.
pub const STATUS_GROUP_ORDER: &[&str] =
    &["Todo", "In progress", "Backlog", "Done", "Cancelled"];

/// Maximum number of user columns on the board.
pub const USER_COLUMN_LIMIT: usize = 5;

/// A labeled board column: a named bucket of tickets sharing a computed key.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub label: String,
    pub tickets: Vec<Ticket>,
}

/// Map a raw feed priority to its display label.
pub fn priority_label(priority: u8) -> &'static str {
    match priority {
        0 => "No Priority",
        4 => "Urgent",
        3 => "High",
        2 => "Medium",
        1 => "Low",
        _ => "Unknown Priority",
    }
}

/// Resolve a ticket's user reference to a display name.
///
/// The reference is weak: an absent or unmatched id yields [`UNKNOWN_USER`]
/// rather than an error.
pub fn resolve_user_name(users: &[User], user_id: Option<&str>) -> String {
    user_id
        .and_then(|id| users.iter().find(|u| u.id == id))
        .map(|u| u.name.clone())
        .unwrap_or_else(|| UNKNOWN_USER.to_string())
}

/// Group and sort tickets into ordered board columns.
///
/// Tickets are sorted globally first (stable, so ties keep feed order), then
/// partitioned by the grouping key, then emitted in the column order fixed by
/// the grouping mode. Under user grouping, tickets resolving outside the
/// first-[`USER_COLUMN_LIMIT`] user slice get no column and are dropped.
pub fn compute(
    tickets: &[Ticket],
    users: &[User],
    grouping: GroupingMode,
    sorting: SortingMode,
) -> Vec<Group> {
    let sorted = sort_tickets(tickets, sorting);

    // Stable partition of the already-sorted sequence. First-observed key
    // order is tracked for the defensive status tail.
    let mut buckets: HashMap<String, Vec<Ticket>> = HashMap::new();
    let mut observed: Vec<String> = Vec::new();
    for ticket in sorted {
        let key = group_key(&ticket, users, grouping);
        if !buckets.contains_key(&key) {
            observed.push(key.clone());
        }
        buckets.entry(key).or_default().push(ticket);
    }

    group_order(users, grouping, &observed)
        .into_iter()
        .map(|label| {
            let tickets = buckets.remove(&label).unwrap_or_default();
            Group { label, tickets }
        })
        .collect()
}

fn sort_tickets(tickets: &[Ticket], sorting: SortingMode) -> Vec<Ticket> {
    let mut sorted = tickets.to_vec();
    match sorting {
        // Urgent (4) first.
        SortingMode::Priority => sorted.sort_by(|a, b| b.priority.cmp(&a.priority)),
        SortingMode::Title => sorted.sort_by(|a, b| {
            UniCase::new(a.title.as_str()).cmp(&UniCase::new(b.title.as_str()))
        }),
    }
    sorted
}

fn group_key(ticket: &Ticket, users: &[User], grouping: GroupingMode) -> String {
    match grouping {
        GroupingMode::Status => ticket.status.name().to_string(),
        GroupingMode::User => resolve_user_name(users, ticket.user_id.as_deref()),
        GroupingMode::Priority => priority_label(ticket.priority).to_string(),
    }
}

fn group_order(users: &[User], grouping: GroupingMode, observed: &[String]) -> Vec<String> {
    match grouping {
        GroupingMode::Priority => {
            PRIORITY_GROUP_ORDER.iter().map(|s| s.to_string()).collect()
        }
        GroupingMode::Status => {
            let mut order: Vec<String> =
                STATUS_GROUP_ORDER.iter().map(|s| s.to_string()).collect();
            for key in observed {
                if !order.contains(key) {
                    order.push(key.clone());
                }
            }
            order
        }
        GroupingMode::User => {
            // First five users by feed position, even when a column is empty.
            // Deduplicated by display name so the board stays a disjoint
            // partition.
            let mut order: Vec<String> = Vec::new();
            for user in users.iter().take(USER_COLUMN_LIMIT) {
                if !order.contains(&user.name) {
                    order.push(user.name.clone());
                }
            }
            order
        }
    }
}
