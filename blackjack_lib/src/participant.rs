use crate::card::Card;
use crate::hand::Hand;
use serde::Serialize;

/// Fixed name of the dealer.
pub const DEALER_NAME: &str = "Dealer";

/// The dealer draws while its score is below this.
pub const DEALER_STANDS_ON: u32 = 17;

/// Which side of the table a participant sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Role {
    Human,
    Dealer,
}

/// How a participant's turn is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPolicy {
    /// Decisions come from the I/O collaborator.
    Prompted,
    /// Draw automatically while the score is below the threshold.
    DrawBelow(u32),
}

impl Role {
    pub fn policy(&self) -> TurnPolicy {
        match self {
            Role::Human => TurnPolicy::Prompted,
            Role::Dealer => TurnPolicy::DrawBelow(DEALER_STANDS_ON),
        }
    }
}

/// Struct for anyone seated at the table. The dealer differs from the player only by its name and role.
#[derive(Debug, Clone)]
pub struct Participant {
    name: String,
    bank: i64,
    hand: Hand,
    role: Role,
}

impl Participant {
    /// Associated function to create the human player.
    pub fn new<S: Into<String>>(name: S, starting_bank: i64) -> Participant {
        Participant {
            name: name.into(),
            bank: starting_bank,
            hand: Hand::new(),
            role: Role::Human,
        }
    }

    /// Associated function to create the dealer.
    pub fn dealer(starting_bank: i64) -> Participant {
        Participant {
            name: DEALER_NAME.to_string(),
            bank: starting_bank,
            hand: Hand::new(),
            role: Role::Dealer,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bank(&self) -> i64 {
        self.bank
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    pub fn score(&self) -> u32 {
        self.hand.score()
    }

    pub fn is_bust(&self) -> bool {
        self.hand.is_bust()
    }

    pub fn clear_hand(&mut self) {
        self.hand.clear();
    }

    /// Takes `amount` out of the bank. The balance is allowed to go negative.
    pub fn debit(&mut self, amount: i64) {
        self.bank -= amount;
    }

    pub fn credit(&mut self, amount: i64) {
        self.bank += amount;
    }

    /// True when the participant's automatic policy wants another card.
    /// Prompted participants never draw on their own.
    pub fn auto_draws(&self) -> bool {
        match self.role.policy() {
            TurnPolicy::DrawBelow(threshold) => self.score() < threshold,
            TurnPolicy::Prompted => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    #[test]
    fn dealer_has_fixed_name_and_role() {
        let dealer = Participant::dealer(100);
        assert_eq!(dealer.name(), DEALER_NAME);
        assert_eq!(dealer.role(), Role::Dealer);
        assert_eq!(dealer.role().policy(), TurnPolicy::DrawBelow(17));
    }

    #[test]
    fn bank_can_go_negative() {
        let mut player = Participant::new("Ada", 5);
        player.debit(10);
        assert_eq!(player.bank(), -5);
        player.credit(20);
        assert_eq!(player.bank(), 15);
    }

    #[test]
    fn dealer_draws_below_seventeen_only() {
        let mut dealer = Participant::dealer(100);
        dealer.add_card(Card::new(Suit::Spades, Rank::Ten));
        dealer.add_card(Card::new(Suit::Hearts, Rank::Six));
        assert!(dealer.auto_draws());
        dealer.add_card(Card::new(Suit::Clubs, Rank::Ace));
        assert_eq!(dealer.score(), 17);
        assert!(!dealer.auto_draws());
    }

    #[test]
    fn human_never_auto_draws() {
        let mut player = Participant::new("Ada", 100);
        player.add_card(Card::new(Suit::Spades, Rank::Two));
        assert!(!player.auto_draws());
    }

    #[test]
    fn clear_hand_keeps_bank() {
        let mut player = Participant::new("Ada", 100);
        player.add_card(Card::new(Suit::Spades, Rank::Nine));
        player.debit(10);
        player.clear_hand();
        assert!(player.hand().is_empty());
        assert_eq!(player.bank(), 90);
    }
}
