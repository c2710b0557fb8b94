//! Turns display events and session summaries into text for the terminal.

use blackjack_lib::{GameEvent, Outcome, SessionSummary};
use std::io::Write;

/// Renders one event as the lines shown to the player.
pub fn render_event(event: &GameEvent) -> String {
    match event {
        GameEvent::Welcome => "Welcome to the Blackjack game!".to_string(),
        GameEvent::Greeting {
            name,
            starting_bank,
        } => format!(
            "Hello, {}! Both you and the dealer start with ${} in the bank.",
            name, starting_bank
        ),
        GameEvent::RoundStarted { round } => format!("Starting a new round... (round {})", round),
        GameEvent::AntePlaced { ante, pot } => format!(
            "You and the dealer each put ${} in the pot. Pot: ${}",
            ante, pot
        ),
        GameEvent::InitialHands {
            player_hand,
            player_score,
            dealer_up_card,
            hidden_cards,
        } => {
            let up_card = dealer_up_card
                .map(|card| card.to_string())
                .unwrap_or_else(|| "*".to_string());
            let hidden = vec!["*"; *hidden_cards].join(", ");
            format!(
                "Your initial hand: {} (Score: {})\nDealer's initial hand: {} and {}",
                player_hand, player_score, up_card, hidden
            )
        }
        GameEvent::PlayerTurnSkipped { score } => {
            format!("You have {}, no action needed.", score)
        }
        GameEvent::PlayerPassed => "You chose to pass.".to_string(),
        GameEvent::PlayerOpened => "You chose to open cards.".to_string(),
        GameEvent::PlayerHit { card, hand, score } => format!(
            "You drew {}. Your hand: {} (Score: {})",
            card, hand, score
        ),
        GameEvent::HitRejected { .. } => "You cannot add more cards.".to_string(),
        GameEvent::InvalidAction { .. } => "Invalid choice. Passing turn.".to_string(),
        GameEvent::DealerDrew { .. } => "Dealer drew a card.".to_string(),
        GameEvent::FinalHands {
            player_hand,
            player_score,
            dealer_hand,
            dealer_score,
        } => format!(
            "Your final hand: {} (Score: {})\nDealer's final hand: {} (Score: {})",
            player_hand, player_score, dealer_hand, dealer_score
        ),
        GameEvent::RoundOutcome { outcome } => render_outcome(*outcome).to_string(),
        GameEvent::Banks {
            player_before,
            player_after,
            dealer_before,
            dealer_after,
            ..
        } => format!(
            "Your bank: ${} (was ${})\nDealer's bank: ${} (was ${})",
            player_after, player_before, dealer_after, dealer_before
        ),
        GameEvent::Thanks => "Thanks for playing!".to_string(),
    }
}

fn render_outcome(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::BothBust => "Both you and the dealer busted! It's a tie.",
        Outcome::PlayerBust => "You busted! Dealer wins.",
        Outcome::DealerBust => "Dealer busted! You win.",
        Outcome::PlayerWins => "You win!",
        Outcome::DealerWins => "Dealer wins.",
        Outcome::Push => "It's a tie!",
    }
}

/// Writes `summary` framed by a header and a rule, the way session stats are shown at the end.
pub fn write_summary(summary: &SessionSummary, mut writer: impl Write) -> std::io::Result<()> {
    const WIDTH: usize = 60;
    let header = format!("{:-^WIDTH$}\n", " session summary ");
    writer.write_all(header.as_bytes())?;
    writer.write_all(summary.to_string().as_bytes())?;
    writeln!(writer, "{}", "-".repeat(WIDTH))?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use blackjack_lib::{Card, Hand, Rank, Suit};

    #[test]
    fn initial_hands_mask_dealer() {
        let player_hand: Hand = [
            Card::new(Suit::Spades, Rank::Ten),
            Card::new(Suit::Hearts, Rank::Ace),
        ]
        .into_iter()
        .collect();
        let text = render_event(&GameEvent::InitialHands {
            player_hand,
            player_score: 21,
            dealer_up_card: Some(Card::new(Suit::Clubs, Rank::Nine)),
            hidden_cards: 1,
        });
        assert_eq!(
            text,
            "Your initial hand: 10♠, A♥ (Score: 21)\nDealer's initial hand: 9♣ and *"
        );
    }

    #[test]
    fn outcomes_name_the_reason() {
        let text = render_event(&GameEvent::RoundOutcome {
            outcome: Outcome::PlayerBust,
        });
        assert_eq!(text, "You busted! Dealer wins.");
    }

    #[test]
    fn banks_show_before_and_after() {
        let text = render_event(&GameEvent::Banks {
            player_name: "Ada".to_string(),
            player_before: 100,
            player_after: 110,
            dealer_before: 100,
            dealer_after: 90,
        });
        assert_eq!(
            text,
            "Your bank: $110 (was $100)\nDealer's bank: $90 (was $100)"
        );
    }

    #[test]
    fn summary_is_framed() {
        let summary = SessionSummary {
            player_name: "Ada".to_string(),
            rounds_played: 1,
            player_wins: 1,
            dealer_wins: 0,
            pushes: 0,
            starting_bank: 100,
            player_bank: 110,
            dealer_bank: 90,
        };
        let mut out = Vec::new();
        write_summary(&summary, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("-"));
        assert!(text.contains(" session summary "));
        assert!(text.trim_end().ends_with(&"-".repeat(60)));
    }
}
