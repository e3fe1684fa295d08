//! Terminal rendering for the board.

pub mod assets;

use owo_colors::OwoColorize;
use tabled::{Table, Tabled};

use crate::engine::Group;
use crate::types::{GroupingMode, SortingMode, VALID_GROUPINGS, VALID_SORTINGS};

pub use assets::{priority_icon, status_icon};

/// Colorize a status column label using the feed spelling.
pub fn format_status_colored(label: &str) -> String {
    match label {
        "Todo" => label.yellow().to_string(),
        "In progress" => label.cyan().to_string(),
        "Backlog" => label.magenta().to_string(),
        "Done" => label.green().to_string(),
        "Cancelled" => label.dimmed().to_string(),
        _ => label.to_string(),
    }
}

/// Colorize a priority column label.
pub fn format_priority_colored(label: &str) -> String {
    match label {
        "Urgent" => label.red().to_string(),
        "High" => label.yellow().to_string(),
        "Medium" => label.cyan().to_string(),
        "Low" => label.green().to_string(),
        "No Priority" => label.dimmed().to_string(),
        _ => label.to_string(),
    }
}

fn format_group_header(label: &str, count: usize, grouping: GroupingMode) -> String {
    let colored = match grouping {
        GroupingMode::Status => format_status_colored(label),
        GroupingMode::Priority => format_priority_colored(label),
        GroupingMode::User => label.cyan().to_string(),
    };
    format!("{} {}", colored.bold(), format!("({count})").dimmed())
}

/// Render the full board as labeled columns of ticket lines.
pub fn render_board(groups: &[Group], grouping: GroupingMode) -> String {
    let mut out = String::new();
    for group in groups {
        out.push_str(&format_group_header(&group.label, group.tickets.len(), grouping));
        out.push('\n');

        if group.tickets.is_empty() {
            out.push_str(&format!("  {}\n", "No tickets in this category".dimmed()));
        }
        for ticket in &group.tickets {
            out.push_str(&format!(
                "  {}  [{}] {}\n",
                ticket.id.dimmed(),
                crate::engine::priority_label(ticket.priority),
                ticket.title,
            ));
        }
        out.push('\n');
    }
    out
}

#[derive(Tabled)]
struct GroupRow {
    #[tabled(rename = "Group")]
    label: String,
    #[tabled(rename = "Tickets")]
    count: usize,
}

/// Render per-group ticket counts as a table.
pub fn render_summary(groups: &[Group]) -> String {
    let rows: Vec<GroupRow> = groups
        .iter()
        .map(|g| GroupRow {
            label: g.label.clone(),
            count: g.tickets.len(),
        })
        .collect();
    Table::new(rows).to_string()
}

/// Render the display-options panel shown above the board when toggled on.
pub fn render_options_panel(grouping: GroupingMode, sorting: SortingMode) -> String {
    format!(
        "{}\n  Grouping: {}  [{}]\n  Ordering: {}  [{}]\n",
        "Display".cyan().bold(),
        grouping.to_string().bold(),
        VALID_GROUPINGS.join(" | "),
        sorting.to_string().bold(),
        VALID_SORTINGS.join(" | "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Ticket, TicketStatus};

    fn group(label: &str, ids: &[&str]) -> Group {
        Group {
            label: label.to_string(),
            tickets: ids
                .iter()
                .map(|id| Ticket {
                    id: id.to_string(),
                    title: format!("Ticket {id}"),
                    body: String::new(),
                    user_id: None,
                    status: TicketStatus::Todo,
                    priority: 2,
                })
                .collect(),
        }
    }

    #[test]
    fn test_render_board_lists_tickets_under_headers() {
        let groups = vec![group("Todo", &["t1", "t2"]), group("Done", &[])];
        let out = render_board(&groups, GroupingMode::Status);
        assert!(out.contains("t1"));
        assert!(out.contains("Ticket t2"));
        assert!(out.contains("No tickets in this category"));
    }

    #[test]
    fn test_render_board_shows_counts() {
        let groups = vec![group("Urgent", &["t1", "t2", "t3"])];
        let out = render_board(&groups, GroupingMode::Priority);
        assert!(out.contains("(3)"));
    }

    #[test]
    fn test_render_summary_has_one_row_per_group() {
        let groups = vec![group("Todo", &["t1"]), group("Done", &[])];
        let out = render_summary(&groups);
        assert!(out.contains("Todo"));
        assert!(out.contains("Done"));
        assert!(out.contains("Tickets"));
    }

    #[test]
    fn test_render_options_panel_names_both_selections() {
        let out = render_options_panel(GroupingMode::User, SortingMode::Title);
        assert!(out.contains("user"));
        assert!(out.contains("title"));
        assert!(out.contains("status | user | priority"));
    }
}
