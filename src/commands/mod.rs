//! Command implementations for the plank CLI.

pub mod board;
pub mod config;

pub use board::{BoardOptions, cmd_board};
pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
