//! Shared fixtures for integration tests.

use plank::types::{Ticket, TicketStatus, User};

pub fn ticket(id: &str, title: &str, user_id: Option<&str>, status: &str, priority: u8) -> Ticket {
    Ticket {
        id: id.to_string(),
        title: title.to_string(),
        body: String::new(),
        user_id: user_id.map(|s| s.to_string()),
        status: TicketStatus::from(status.to_string()),
        priority,
    }
}

pub fn user(id: &str, name: &str) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
    }
}

/// A small mixed population resembling the real feed.
pub fn sample_board() -> (Vec<Ticket>, Vec<User>) {
    let users = vec![
        user("usr-1", "Anoop Sharma"),
        user("usr-2", "Yogesh"),
        user("usr-3", "Shankar Kumar"),
        user("usr-4", "Ramesh"),
        user("usr-5", "Suresh"),
    ];
    let tickets = vec![
        ticket("CAM-1", "Update user profile page UI", Some("usr-1"), "Todo", 4),
        ticket("CAM-2", "Add multi-language support", Some("usr-2"), "In progress", 3),
        ticket("CAM-3", "Optimize database queries", Some("usr-3"), "Backlog", 1),
        ticket("CAM-4", "Implement email notifications", Some("usr-1"), "Done", 0),
        ticket("CAM-5", "Conduct security audit", Some("usr-4"), "Cancelled", 2),
        ticket("CAM-6", "Enhance search functionality", None, "Todo", 4),
    ];
    (tickets, users)
}
