pub mod commands;
pub mod display;
pub mod engine;
pub mod error;
pub mod prefs;
pub mod remote;
pub mod state;
pub mod types;

pub use engine::{Group, compute, priority_label, resolve_user_name};
pub use error::{PlankError, Result};
pub use prefs::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use remote::{BoardSnapshot, DEFAULT_ENDPOINT, HttpTicketSource, TicketSource};
pub use state::ViewState;
pub use types::{GroupingMode, SortingMode, Ticket, TicketStatus, User};
