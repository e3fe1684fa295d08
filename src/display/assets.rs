//! Icon asset contract for the rendering layer.
//!
//! Every canonical status and priority maps to a fixed asset path; an
//! unmapped value degrades to no icon rather than failing.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static PRIORITY_ICONS: Lazy<HashMap<u8, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (0, "/images/No-priority.png"),
        (1, "/images/Low.png"),
        (2, "/images/Medium.png"),
        (3, "/images/high.png"),
        (4, "/images/UrgentOrange.png"),
    ])
});

static STATUS_ICONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Todo", "/images/To-do.png"),
        ("In progress", "/images/inProgress.png"),
        ("Backlog", "/images/Backlog.png"),
        ("Done", "/images/done.png"),
        ("Cancelled", "/images/cancelled.png"),
    ])
});

pub fn priority_icon(priority: u8) -> Option<&'static str> {
    PRIORITY_ICONS.get(&priority).copied()
}

pub fn status_icon(status: &str) -> Option<&'static str> {
    STATUS_ICONS.get(status).copied()
}
