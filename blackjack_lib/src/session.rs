//! The session loop: rounds are played one after another until the player declines to continue.

use crate::config::TableConfig;
use crate::error::BlackjackGameError;
use crate::event::{GameEvent, TableIo};
use crate::participant::Role;
use crate::round::RoundReport;
use crate::table::Table;
use serde::Serialize;
use std::fmt::Display;
use tracing::info;

/// Name used when the player answers the name prompt with nothing.
pub const DEFAULT_PLAYER_NAME: &str = "Player";

/// Simple struct for recording the results accumulated over a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub player_name: String,
    pub rounds_played: u32,
    pub player_wins: u32,
    pub dealer_wins: u32,
    pub pushes: u32,
    pub starting_bank: i64,
    pub player_bank: i64,
    pub dealer_bank: i64,
}

impl SessionSummary {
    /// Net change of the player's bank since the session started.
    pub fn player_net(&self) -> i64 {
        self.player_bank - self.starting_bank
    }
}

impl Display for SessionSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const WIDTH: usize = 60;
        const TEXT_WIDTH: usize = "player net winnings".len() + 12;
        const NUM_WIDTH: usize = WIDTH - TEXT_WIDTH;
        write!(
            f,
            "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}\n\
            {:<TEXT_WIDTH$}{:>NUM_WIDTH$}\n\
            {:<TEXT_WIDTH$}{:>NUM_WIDTH$}\n\
            {:<TEXT_WIDTH$}{:>NUM_WIDTH$}\n\
            {:<TEXT_WIDTH$}{:>NUM_WIDTH$}\n\
            {:<TEXT_WIDTH$}{:>NUM_WIDTH$}\n\
            {:<TEXT_WIDTH$}{:>NUM_WIDTH$}\n\
            {:<TEXT_WIDTH$}{:>NUM_WIDTH$}\n",
            "player",
            self.player_name,
            "rounds played",
            self.rounds_played,
            "rounds won",
            self.player_wins,
            "rounds lost",
            self.dealer_wins,
            "rounds pushed",
            self.pushes,
            "player final bank",
            self.player_bank,
            "dealer final bank",
            self.dealer_bank,
            "player net winnings",
            self.player_net(),
        )
    }
}

/// Struct that owns the table for the whole session and keeps score across rounds.
pub struct BlackjackSession {
    table: Table,
    starting_bank: i64,
    player_wins: u32,
    dealer_wins: u32,
    pushes: u32,
}

impl BlackjackSession {
    /// Associated function to open a session for a player whose name is already known.
    pub fn new<S: Into<String>>(
        config: &TableConfig,
        player_name: S,
    ) -> Result<BlackjackSession, BlackjackGameError> {
        let table = Table::new(config, player_name)?;
        Ok(BlackjackSession::with_table(table, config.starting_bank))
    }

    /// Wraps an already opened table.
    pub fn with_table(table: Table, starting_bank: i64) -> BlackjackSession {
        BlackjackSession {
            table,
            starting_bank,
            player_wins: 0,
            dealer_wins: 0,
            pushes: 0,
        }
    }

    /// Welcomes the player, asks for a name unless the config has one, and greets them.
    pub fn start<I: TableIo + ?Sized>(
        config: &TableConfig,
        io: &mut I,
    ) -> Result<BlackjackSession, BlackjackGameError> {
        config.validate()?;
        io.display(&GameEvent::Welcome)?;
        let name = match &config.player_name {
            Some(name) => name.trim().to_string(),
            None => {
                let answer = io.request_player_name()?;
                let answer = answer.trim();
                if answer.is_empty() {
                    DEFAULT_PLAYER_NAME.to_string()
                } else {
                    answer.to_string()
                }
            }
        };

        let session = BlackjackSession::new(config, name)?;
        info!(player = session.table.player().name(), "session started");
        io.display(&GameEvent::Greeting {
            name: session.table.player().name().to_string(),
            starting_bank: config.starting_bank,
        })?;
        Ok(session)
    }

    /// Plays rounds until the player declines another, then thanks them.
    pub fn run<I: TableIo + ?Sized>(&mut self, io: &mut I) -> Result<(), BlackjackGameError> {
        loop {
            self.play_round(io)?;
            if !io.request_play_again()? {
                break;
            }
        }
        info!(rounds = self.table.rounds_played(), "session finished");
        io.display(&GameEvent::Thanks)?;
        Ok(())
    }

    /// Plays a single round and records its outcome.
    pub fn play_round<I: TableIo + ?Sized>(
        &mut self,
        io: &mut I,
    ) -> Result<RoundReport, BlackjackGameError> {
        let report = self.table.play_round(io)?;
        match report.settlement.outcome.winner() {
            Some(Role::Human) => self.player_wins += 1,
            Some(Role::Dealer) => self.dealer_wins += 1,
            None => self.pushes += 1,
        }
        Ok(report)
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            player_name: self.table.player().name().to_string(),
            rounds_played: self.table.rounds_played(),
            player_wins: self.player_wins,
            dealer_wins: self.dealer_wins,
            pushes: self.pushes,
            starting_bank: self.starting_bank,
            player_bank: self.table.player().bank(),
            dealer_bank: self.table.dealer().bank(),
        }
    }
}
