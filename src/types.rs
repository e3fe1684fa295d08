use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PlankError;

/// Ticket status as delivered by the remote feed.
///
/// The five canonical values use the feed's exact spelling ("In progress", not
/// "In Progress"). Anything else is captured in `Other` so an unanticipated
/// status value never fails decoding; it surfaces as its own board column
/// after the canonical ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum TicketStatus {
    #[default]
    Todo,
    InProgress,
    Backlog,
    Done,
    Cancelled,
    Other(String),
}

impl TicketStatus {
    /// The feed spelling of this status.
    pub fn name(&self) -> &str {
        match self {
            TicketStatus::Todo => "Todo",
            TicketStatus::InProgress => "In progress",
            TicketStatus::Backlog => "Backlog",
            TicketStatus::Done => "Done",
            TicketStatus::Cancelled => "Cancelled",
            TicketStatus::Other(s) => s,
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<String> for TicketStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Todo" => TicketStatus::Todo,
            "In progress" => TicketStatus::InProgress,
            "Backlog" => TicketStatus::Backlog,
            "Done" => TicketStatus::Done,
            "Cancelled" => TicketStatus::Cancelled,
            _ => TicketStatus::Other(s),
        }
    }
}

impl From<TicketStatus> for String {
    fn from(status: TicketStatus) -> Self {
        status.name().to_string()
    }
}

/// How board columns are keyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GroupingMode {
    #[default]
    Status,
    User,
    Priority,
}

impl fmt::Display for GroupingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupingMode::Status => write!(f, "status"),
            GroupingMode::User => write!(f, "user"),
            GroupingMode::Priority => write!(f, "priority"),
        }
    }
}

impl FromStr for GroupingMode {
    type Err = PlankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "status" => Ok(GroupingMode::Status),
            "user" => Ok(GroupingMode::User),
            "priority" => Ok(GroupingMode::Priority),
            _ => Err(PlankError::InvalidGrouping(s.to_string())),
        }
    }
}

pub const VALID_GROUPINGS: &[&str] = &["status", "user", "priority"];

/// How tickets are ordered within each column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortingMode {
    #[default]
    Priority,
    Title,
}

impl fmt::Display for SortingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortingMode::Priority => write!(f, "priority"),
            SortingMode::Title => write!(f, "title"),
        }
    }
}

impl FromStr for SortingMode {
    type Err = PlankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "priority" => Ok(SortingMode::Priority),
            "title" => Ok(SortingMode::Title),
            _ => Err(PlankError::InvalidSorting(s.to_string())),
        }
    }
}

pub const VALID_SORTINGS: &[&str] = &["priority", "title"];

/// One ticket from the feed. Immutable snapshot for the session; never
/// mutated or written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub body: String,

    /// Weak reference into the user list; resolution degrades to a
    /// placeholder label when the id matches nothing.
    #[serde(rename = "userId", default)]
    pub user_id: Option<String>,

    #[serde(default)]
    pub status: TicketStatus,

    /// Raw feed integer. 0 = no priority, 4 = urgent; out-of-range values are
    /// tolerated and label as "Unknown Priority" downstream.
    #[serde(default)]
    pub priority: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_feed_spellings_round_trip() {
        for name in ["Todo", "In progress", "Backlog", "Done", "Cancelled"] {
            let status = TicketStatus::from(name.to_string());
            assert!(!matches!(status, TicketStatus::Other(_)));
            assert_eq!(status.to_string(), name);
        }
    }

    #[test]
    fn test_status_unknown_value_is_preserved() {
        let status = TicketStatus::from("Blocked".to_string());
        assert_eq!(status, TicketStatus::Other("Blocked".to_string()));
        assert_eq!(status.name(), "Blocked");
    }

    #[test]
    fn test_status_wrong_case_is_not_canonical() {
        // The feed spelling is exact; "In Progress" is a different value.
        let status = TicketStatus::from("In Progress".to_string());
        assert!(matches!(status, TicketStatus::Other(_)));
    }

    #[test]
    fn test_grouping_mode_parse() {
        assert_eq!("status".parse::<GroupingMode>().unwrap(), GroupingMode::Status);
        assert_eq!("User".parse::<GroupingMode>().unwrap(), GroupingMode::User);
        assert_eq!(
            "priority".parse::<GroupingMode>().unwrap(),
            GroupingMode::Priority
        );
        assert!("severity".parse::<GroupingMode>().is_err());
    }

    #[test]
    fn test_sorting_mode_parse() {
        assert_eq!("priority".parse::<SortingMode>().unwrap(), SortingMode::Priority);
        assert_eq!("title".parse::<SortingMode>().unwrap(), SortingMode::Title);
        assert!("created".parse::<SortingMode>().is_err());
    }

    #[test]
    fn test_mode_defaults() {
        assert_eq!(GroupingMode::default(), GroupingMode::Status);
        assert_eq!(SortingMode::default(), SortingMode::Priority);
    }

    #[test]
    fn test_ticket_deserializes_feed_shape() {
        let json = r#"{
            "id": "CAM-1",
            "title": "Update dashboard",
            "body": "",
            "userId": "usr-1",
            "status": "In progress",
            "priority": 4
        }"#;
        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.id, "CAM-1");
        assert_eq!(ticket.user_id.as_deref(), Some("usr-1"));
        assert_eq!(ticket.status, TicketStatus::InProgress);
        assert_eq!(ticket.priority, 4);
    }

    #[test]
    fn test_ticket_tolerates_missing_optional_fields() {
        let json = r#"{"id": "CAM-2", "title": "Fix login"}"#;
        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.body, "");
        assert_eq!(ticket.user_id, None);
        assert_eq!(ticket.status, TicketStatus::Todo);
        assert_eq!(ticket.priority, 0);
    }
}
