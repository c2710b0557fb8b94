//! The round engine: one pass through ante, deal, decisions and settlement, as an explicit state machine.

use crate::error::BlackjackGameError;
use crate::event::{GameEvent, TableIo};
use crate::hand::{Hand, BLACKJACK};
use crate::participant::Participant;
use crate::settlement::{settle, Settlement};
use crate::table::Table;
use serde::Serialize;
use tracing::{debug, info, trace, warn};

/// Cards each participant receives in the initial deal.
const INITIAL_CARDS: usize = 2;

/// States of a single round, in the order they are visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundState {
    Ante,
    InitialDeal,
    PlayerDecision,
    DealerDecision,
    Settlement,
    Done,
}

/// The choices offered to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Action {
    Pass,
    Hit,
    Open,
}

impl Action {
    /// Maps a menu selection to an action: 1 pass, 2 hit, 3 open.
    pub fn from_selection(selection: i64) -> Option<Action> {
        match selection {
            1 => Some(Action::Pass),
            2 => Some(Action::Hit),
            3 => Some(Action::Open),
            _ => None,
        }
    }

    /// Parses raw input, `None` if it is not one of the menu numbers.
    pub fn parse(input: &str) -> Option<Action> {
        input
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(Action::from_selection)
    }
}

/// Everything worth keeping about a finished round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundReport {
    pub round: u32,
    pub player_hand: Hand,
    pub player_score: u32,
    pub dealer_hand: Hand,
    pub dealer_score: u32,
    pub settlement: Settlement,
    pub player_bank: i64,
    pub dealer_bank: i64,
}

/// A round in flight. Holds the table exclusively until it reaches `RoundState::Done`.
///
/// A round dropped before `Done`, including one whose step returned an error, is rolled back:
/// the antes go back to their owners, both hands are cleared and the round is not counted.
pub struct Round<'t> {
    table: &'t mut Table,
    state: RoundState,
    number: u32,
    pot: i64,
    banks_before: (i64, i64),
    report: Option<RoundReport>,
}

impl<'t> Round<'t> {
    pub(crate) fn new(table: &'t mut Table) -> Round<'t> {
        let number = table.rounds_played + 1;
        let banks_before = (table.player.bank(), table.dealer.bank());
        Round {
            table,
            state: RoundState::Ante,
            number,
            pot: 0,
            banks_before,
            report: None,
        }
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    /// 1-based round number within the session.
    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn pot(&self) -> i64 {
        self.pot
    }

    pub fn player(&self) -> &Participant {
        &self.table.player
    }

    pub fn dealer(&self) -> &Participant {
        &self.table.dealer
    }

    /// The finished round, available once the round is done.
    pub fn report(&self) -> Option<&RoundReport> {
        self.report.as_ref()
    }

    /// Runs the current state and moves to the next one. Stepping a finished round does nothing.
    pub fn step<I: TableIo + ?Sized>(
        &mut self,
        io: &mut I,
    ) -> Result<RoundState, BlackjackGameError> {
        let next = match self.state {
            RoundState::Ante => self.ante(io)?,
            RoundState::InitialDeal => self.initial_deal(io)?,
            RoundState::PlayerDecision => self.player_decision(io)?,
            RoundState::DealerDecision => self.dealer_decision(io)?,
            RoundState::Settlement => self.settlement(io)?,
            RoundState::Done => RoundState::Done,
        };
        trace!(from = ?self.state, to = ?next, "round transition");
        self.state = next;
        Ok(next)
    }

    /// Steps until the round is done and returns its report. On error the round is rolled back.
    pub fn play<I: TableIo + ?Sized>(
        mut self,
        io: &mut I,
    ) -> Result<RoundReport, BlackjackGameError> {
        loop {
            self.step(io)?;
            // The report is produced by the same step that enters `Done`.
            if let Some(report) = self.report.take() {
                return Ok(report);
            }
        }
    }

    fn ante<I: TableIo + ?Sized>(&mut self, io: &mut I) -> Result<RoundState, BlackjackGameError> {
        info!(round = self.number, "starting a new round");
        io.display(&GameEvent::RoundStarted { round: self.number })?;

        let ante = self.table.ante();
        self.table.player.debit(ante);
        self.table.dealer.debit(ante);
        self.pot = ante * 2;
        debug!(ante, pot = self.pot, "ante placed");
        io.display(&GameEvent::AntePlaced {
            ante,
            pot: self.pot,
        })?;

        Ok(RoundState::InitialDeal)
    }

    fn initial_deal<I: TableIo + ?Sized>(
        &mut self,
        io: &mut I,
    ) -> Result<RoundState, BlackjackGameError> {
        for _ in 0..INITIAL_CARDS {
            let card = self.table.deck.draw();
            self.table.player.add_card(card);
            let card = self.table.deck.draw();
            self.table.dealer.add_card(card);
        }

        let dealer_hand = self.table.dealer.hand();
        io.display(&GameEvent::InitialHands {
            player_hand: self.table.player.hand().clone(),
            player_score: self.table.player.score(),
            dealer_up_card: dealer_hand.first().copied(),
            hidden_cards: dealer_hand.len().saturating_sub(1),
        })?;

        Ok(RoundState::PlayerDecision)
    }

    fn player_decision<I: TableIo + ?Sized>(
        &mut self,
        io: &mut I,
    ) -> Result<RoundState, BlackjackGameError> {
        let score = self.table.player.score();
        if score >= BLACKJACK {
            io.display(&GameEvent::PlayerTurnSkipped { score })?;
            return Ok(self.after_player_turn());
        }

        loop {
            let input = io.request_player_action()?;
            match Action::parse(&input) {
                Some(Action::Pass) => {
                    io.display(&GameEvent::PlayerPassed)?;
                    break;
                }
                Some(Action::Open) => {
                    io.display(&GameEvent::PlayerOpened)?;
                    break;
                }
                Some(Action::Hit) if self.table.player.hand().len() == INITIAL_CARDS => {
                    let card = self.table.deck.draw();
                    self.table.player.add_card(card);
                    io.display(&GameEvent::PlayerHit {
                        card,
                        hand: self.table.player.hand().clone(),
                        score: self.table.player.score(),
                    })?;
                    break;
                }
                Some(Action::Hit) => {
                    io.display(&GameEvent::HitRejected {
                        cards_in_hand: self.table.player.hand().len(),
                    })?;
                }
                None => {
                    io.display(&GameEvent::InvalidAction {
                        input: input.trim().to_string(),
                    })?;
                    break;
                }
            }
        }

        Ok(self.after_player_turn())
    }

    /// A busted player goes straight to settlement, the dealer does not play.
    fn after_player_turn(&self) -> RoundState {
        if self.table.player.is_bust() {
            RoundState::Settlement
        } else {
            RoundState::DealerDecision
        }
    }

    fn dealer_decision<I: TableIo + ?Sized>(
        &mut self,
        io: &mut I,
    ) -> Result<RoundState, BlackjackGameError> {
        while self.table.dealer.auto_draws() {
            let card = self.table.deck.draw();
            self.table.dealer.add_card(card);
            trace!(score = self.table.dealer.score(), "dealer drew");
            io.display(&GameEvent::DealerDrew {
                cards_in_hand: self.table.dealer.hand().len(),
            })?;
        }

        Ok(RoundState::Settlement)
    }

    fn settlement<I: TableIo + ?Sized>(
        &mut self,
        io: &mut I,
    ) -> Result<RoundState, BlackjackGameError> {
        let player_hand = self.table.player.hand().clone();
        let dealer_hand = self.table.dealer.hand().clone();
        let (player_score, dealer_score) = (player_hand.score(), dealer_hand.score());
        io.display(&GameEvent::FinalHands {
            player_hand: player_hand.clone(),
            player_score,
            dealer_hand: dealer_hand.clone(),
            dealer_score,
        })?;

        let settlement = settle(player_score, dealer_score, self.pot);
        let player_after = self.table.player.bank() + settlement.player_award;
        let dealer_after = self.table.dealer.bank() + settlement.dealer_award;
        io.display(&GameEvent::RoundOutcome {
            outcome: settlement.outcome,
        })?;
        let (player_before, dealer_before) = self.banks_before;
        io.display(&GameEvent::Banks {
            player_name: self.table.player.name().to_string(),
            player_before,
            player_after,
            dealer_before,
            dealer_after,
        })?;

        // Nothing below can fail, so the table only changes once every event is out.
        self.table.player.credit(settlement.player_award);
        self.table.dealer.credit(settlement.dealer_award);
        self.pot = 0;
        self.table.player.clear_hand();
        self.table.dealer.clear_hand();
        self.table.rounds_played = self.number;
        info!(
            round = self.number,
            player_score,
            dealer_score,
            outcome = ?settlement.outcome,
            "round settled"
        );

        self.report = Some(RoundReport {
            round: self.number,
            player_hand,
            player_score,
            dealer_hand,
            dealer_score,
            settlement,
            player_bank: player_after,
            dealer_bank: dealer_after,
        });
        Ok(RoundState::Done)
    }

    /// Returns the antes from the pot and clears both hands.
    fn roll_back(&mut self) {
        let player_share = self.pot / 2;
        self.table.player.credit(player_share);
        self.table.dealer.credit(self.pot - player_share);
        self.pot = 0;
        self.table.player.clear_hand();
        self.table.dealer.clear_hand();
        warn!(round = self.number, state = ?self.state, "round abandoned, antes returned");
    }
}

impl Drop for Round<'_> {
    fn drop(&mut self) {
        if self.state != RoundState::Done {
            self.roll_back();
        }
    }
}
