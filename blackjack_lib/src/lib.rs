//! Core engine for a single player blackjack table: cards, a self-reshuffling deck,
//! hand scoring, and the round state machine that takes an ante, deals, runs the
//! player's and dealer's turns, and settles the pot.
//!
//! All terminal interaction happens behind the [`TableIo`] trait, so the engine can be
//! driven by a console, a script or a test.

pub mod card;
pub mod config;
pub mod deck;
pub mod error;
pub mod event;
pub mod hand;
pub mod participant;
pub mod round;
pub mod script;
pub mod session;
pub mod settlement;
pub mod table;

pub mod prelude {
    pub use super::card::{Card, Rank, Suit, RANKS, SUITS};
    pub use super::config::{TableConfig, TableConfigBuilder};
    pub use super::deck::{Deck, DECK_SIZE};
    pub use super::error::BlackjackGameError;
    pub use super::event::{is_affirmative, GameEvent, TableIo};
    pub use super::hand::{Hand, BLACKJACK};
    pub use super::participant::{Participant, Role, TurnPolicy, DEALER_NAME, DEALER_STANDS_ON};
    pub use super::round::{Action, Round, RoundReport, RoundState};
    pub use super::script::ScriptedIo;
    pub use super::session::{BlackjackSession, SessionSummary};
    pub use super::settlement::{settle, Outcome, Settlement};
    pub use super::table::Table;
}

pub use prelude::*;
