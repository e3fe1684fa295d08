//! The `plank board` command: fetch the feed once, group, sort, render.

use serde_json::json;
use tracing::warn;

use crate::display;
use crate::engine::{self, Group};
use crate::error::Result;
use crate::prefs::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
use crate::remote::{BoardSnapshot, HttpTicketSource, TicketSource};
use crate::state::ViewState;
use crate::types::{GroupingMode, SortingMode, Ticket};

pub struct BoardOptions {
    pub group_by: Option<GroupingMode>,
    pub order_by: Option<SortingMode>,
    pub endpoint: Option<String>,
    pub show_options: bool,
    pub summary: bool,
    pub json: bool,
}

pub async fn cmd_board(opts: BoardOptions) -> Result<()> {
    let mut state = ViewState::init(open_preference_store());

    // CLI overrides go through the view-state store so they persist.
    if let Some(mode) = opts.group_by {
        state.set_grouping(mode);
    }
    if let Some(mode) = opts.order_by {
        state.set_sorting(mode);
    }
    if opts.show_options {
        state.toggle_options();
    }

    let source = match opts.endpoint.as_deref() {
        Some(endpoint) => HttpTicketSource::with_endpoint(endpoint)?,
        None => HttpTicketSource::new()?,
    };

    // A failed load degrades to an empty board; never surfaced, never retried.
    let snapshot = match source.load().await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            warn!("failed to load board snapshot: {e}");
            BoardSnapshot::default()
        }
    };

    let groups = engine::compute(
        &snapshot.tickets,
        &snapshot.users,
        state.grouping(),
        state.sorting(),
    );

    if opts.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&board_to_json(&groups, &state))?
        );
        return Ok(());
    }

    if state.options_visible() {
        println!(
            "{}",
            display::render_options_panel(state.grouping(), state.sorting())
        );
    }

    if opts.summary {
        println!("{}", display::render_summary(&groups));
        return Ok(());
    }

    print!("{}", display::render_board(&groups, state.grouping()));
    Ok(())
}

/// Open the durable preference store, degrading to an in-memory one when no
/// config directory is resolvable.
pub(crate) fn open_preference_store() -> Box<dyn PreferenceStore> {
    match FilePreferenceStore::default_location() {
        Some(store) => Box::new(store),
        None => {
            warn!("no config directory available; preferences will not persist");
            Box::new(MemoryPreferenceStore::default())
        }
    }
}

fn board_to_json(groups: &[Group], state: &ViewState) -> serde_json::Value {
    json!({
        "grouping": state.grouping().to_string(),
        "sorting": state.sorting().to_string(),
        "groups": groups
            .iter()
            .map(|g| {
                json!({
                    "label": g.label,
                    "count": g.tickets.len(),
                    "tickets": g.tickets.iter().map(ticket_to_json).collect::<Vec<_>>(),
                })
            })
            .collect::<Vec<_>>(),
    })
}

fn ticket_to_json(ticket: &Ticket) -> serde_json::Value {
    json!({
        "id": ticket.id,
        "title": ticket.title,
        "status": ticket.status.name(),
        "priority": ticket.priority,
        "priority_label": engine::priority_label(ticket.priority),
        "status_icon": display::status_icon(ticket.status.name()),
        "priority_icon": display::priority_icon(ticket.priority),
    })
}
