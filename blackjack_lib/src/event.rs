//! Display events sent to the I/O collaborator, and the trait the collaborator implements.

use crate::card::Card;
use crate::error::BlackjackGameError;
use crate::hand::Hand;
use crate::settlement::Outcome;
use serde::Serialize;

/// Everything the table announces, in the order it happens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    Welcome,
    Greeting {
        name: String,
        starting_bank: i64,
    },
    RoundStarted {
        round: u32,
    },
    AntePlaced {
        ante: i64,
        pot: i64,
    },
    /// The player's full hand and the dealer's up card; `hidden_cards` dealer cards stay face down.
    InitialHands {
        player_hand: Hand,
        player_score: u32,
        dealer_up_card: Option<Card>,
        hidden_cards: usize,
    },
    /// The player already had 21 or more after the deal, so no action was offered.
    PlayerTurnSkipped {
        score: u32,
    },
    PlayerPassed,
    PlayerOpened,
    PlayerHit {
        card: Card,
        hand: Hand,
        score: u32,
    },
    /// A hit was asked for with a hand that no longer holds exactly two cards.
    HitRejected {
        cards_in_hand: usize,
    },
    /// Unrecognized action input, treated as a pass.
    InvalidAction {
        input: String,
    },
    DealerDrew {
        cards_in_hand: usize,
    },
    FinalHands {
        player_hand: Hand,
        player_score: u32,
        dealer_hand: Hand,
        dealer_score: u32,
    },
    RoundOutcome {
        outcome: Outcome,
    },
    Banks {
        player_name: String,
        player_before: i64,
        player_after: i64,
        dealer_before: i64,
        dealer_after: i64,
    },
    Thanks,
}

/// Trait for whatever sits between the table and a human. Requests block until answered,
/// display calls are one way.
pub trait TableIo {
    fn request_player_name(&mut self) -> Result<String, BlackjackGameError>;

    /// Returns the raw action choice. `"1"`, `"2"` and `"3"` select pass, hit and open,
    /// anything else is treated as a pass.
    fn request_player_action(&mut self) -> Result<String, BlackjackGameError>;

    fn request_play_again(&mut self) -> Result<bool, BlackjackGameError>;

    fn display(&mut self, event: &GameEvent) -> Result<(), BlackjackGameError>;
}

/// Case-insensitive match on `"yes"`, the only answer that continues a session.
/// Only a trailing line ending is ignored; surrounding spaces make it a different answer.
pub fn is_affirmative(answer: &str) -> bool {
    answer
        .trim_end_matches(&['\r', '\n'][..])
        .eq_ignore_ascii_case("yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_yes_continues() {
        assert!(is_affirmative("yes"));
        assert!(is_affirmative("YeS\r\n"));
        assert!(!is_affirmative(" yes"));
        assert!(!is_affirmative("yes "));
        assert!(!is_affirmative("y"));
        assert!(!is_affirmative("no"));
        assert!(!is_affirmative(""));
    }

    #[test]
    fn events_serialize_with_tag() {
        let json = serde_json::to_string(&GameEvent::RoundStarted { round: 3 }).unwrap();
        assert_eq!(json, r#"{"event":"round_started","round":3}"#);
        let json = serde_json::to_string(&GameEvent::Thanks).unwrap();
        assert_eq!(json, r#"{"event":"thanks"}"#);
    }
}
