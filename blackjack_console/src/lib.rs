//! Terminal front end for `blackjack_lib`: argument and config file handling,
//! a stdin/stdout `TableIo`, and text rendering of table events.

pub mod config;
pub mod console;
pub mod write;

pub mod prelude {
    pub use super::config::{resolve, Args, FileConfig};
    pub use super::console::{Console, OutputFormat};
    pub use super::write::{render_event, write_summary};
}
