use crate::config::TableConfig;
use crate::deck::Deck;
use crate::error::BlackjackGameError;
use crate::event::TableIo;
use crate::participant::Participant;
use crate::round::{Round, RoundReport};

/// Struct holding everything that outlives a single round: the deck, both participants and the ante.
pub struct Table {
    pub(crate) deck: Deck,
    pub(crate) player: Participant,
    pub(crate) dealer: Participant,
    ante: i64,
    pub(crate) rounds_played: u32,
}

impl Table {
    /// Associated function to open a table for `player_name` with the given configuration.
    pub fn new<S: Into<String>>(
        config: &TableConfig,
        player_name: S,
    ) -> Result<Table, BlackjackGameError> {
        config.validate()?;
        let player_name = player_name.into();
        if player_name.trim().is_empty() {
            return Err(BlackjackGameError::config("player name cannot be empty"));
        }
        let deck = match config.seed {
            Some(seed) => Deck::with_seed(seed),
            None => Deck::new(),
        };
        Ok(Table::with_deck(
            deck,
            Participant::new(player_name, config.starting_bank),
            Participant::dealer(config.starting_bank),
            config.ante,
        ))
    }

    /// Opens a table around an existing deck, used to replay known card sequences.
    pub fn with_deck(deck: Deck, player: Participant, dealer: Participant, ante: i64) -> Table {
        Table {
            deck,
            player,
            dealer,
            ante,
            rounds_played: 0,
        }
    }

    pub fn player(&self) -> &Participant {
        &self.player
    }

    pub fn dealer(&self) -> &Participant {
        &self.dealer
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn ante(&self) -> i64 {
        self.ante
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Starts a round without running it, so each state can be stepped through.
    pub fn begin_round(&mut self) -> Round<'_> {
        Round::new(self)
    }

    /// Plays one complete round from the ante to cleared hands.
    pub fn play_round<I: TableIo + ?Sized>(
        &mut self,
        io: &mut I,
    ) -> Result<RoundReport, BlackjackGameError> {
        self.begin_round().play(io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::DECK_SIZE;

    #[test]
    fn new_table_seats_both_with_same_bank() {
        let config = TableConfig::new().starting_bank(150).seed(1).build();
        let table = Table::new(&config, "Ada").unwrap();
        assert_eq!(table.player().name(), "Ada");
        assert_eq!(table.player().bank(), 150);
        assert_eq!(table.dealer().bank(), 150);
        assert_eq!(table.deck().len(), DECK_SIZE);
        assert_eq!(table.rounds_played(), 0);
    }

    #[test]
    fn rejects_blank_player_name() {
        let result = Table::new(&TableConfig::default(), "   ");
        assert!(matches!(result, Err(BlackjackGameError::Config { .. })));
    }

    #[test]
    fn rejects_invalid_config() {
        let config = TableConfig::new().ante(-5).build();
        assert!(Table::new(&config, "Ada").is_err());
    }
}
