//! Remote ticket feed.
//!
//! The board is fed by a single JSON GET against a fixed endpoint. The
//! snapshot is fetched exactly once per session and never written back;
//! ticket and user data are immutable for the lifetime of the process.

pub mod http;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::Result;
use crate::types::{Ticket, User};

pub use http::HttpTicketSource;

/// Default ticket feed endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.quicksell.co/v1/internal/frontend-assignment";

/// One decoded feed response: the full ticket and user population for the
/// session.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BoardSnapshot {
    #[serde(default)]
    pub tickets: Vec<Ticket>,

    #[serde(default)]
    pub users: Vec<User>,
}

/// Source of board snapshots.
///
/// A single `load` per session today; the trait seam leaves room for a retry
/// policy later without touching callers.
#[async_trait]
pub trait TicketSource {
    async fn load(&self) -> Result<BoardSnapshot>;
}
