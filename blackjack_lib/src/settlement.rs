//! Pure pot resolution from final scores.

use crate::hand::BLACKJACK;
use crate::participant::Role;
use serde::Serialize;

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    BothBust,
    PlayerBust,
    DealerBust,
    PlayerWins,
    DealerWins,
    Push,
}

impl Outcome {
    /// Compares final scores. Busts are checked before scores are compared.
    pub fn resolve(player_score: u32, dealer_score: u32) -> Outcome {
        let (player_bust, dealer_bust) = (player_score > BLACKJACK, dealer_score > BLACKJACK);
        match (player_bust, dealer_bust) {
            (true, true) => Outcome::BothBust,
            (true, false) => Outcome::PlayerBust,
            (false, true) => Outcome::DealerBust,
            (false, false) if player_score > dealer_score => Outcome::PlayerWins,
            (false, false) if dealer_score > player_score => Outcome::DealerWins,
            (false, false) => Outcome::Push,
        }
    }

    /// Who takes the pot, `None` when it is split.
    pub fn winner(&self) -> Option<Role> {
        match self {
            Outcome::DealerBust | Outcome::PlayerWins => Some(Role::Human),
            Outcome::PlayerBust | Outcome::DealerWins => Some(Role::Dealer),
            Outcome::BothBust | Outcome::Push => None,
        }
    }

    pub fn is_push(&self) -> bool {
        self.winner().is_none()
    }
}

/// Amounts credited back to each bank when a round is settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Settlement {
    pub outcome: Outcome,
    pub pot: i64,
    pub player_award: i64,
    pub dealer_award: i64,
}

/// Resolves `pot` between player and dealer. The winner takes all of it, a push
/// gives the player half and the dealer the rest.
pub fn settle(player_score: u32, dealer_score: u32, pot: i64) -> Settlement {
    let outcome = Outcome::resolve(player_score, dealer_score);
    let (player_award, dealer_award) = match outcome.winner() {
        Some(Role::Human) => (pot, 0),
        Some(Role::Dealer) => (0, pot),
        None => {
            let half = pot / 2;
            (half, pot - half)
        }
    };
    Settlement {
        outcome,
        pot,
        player_award,
        dealer_award,
    }
}
