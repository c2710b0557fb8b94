//! A `TableIo` that answers from prepared responses and records every display event.
//! Useful for replaying a seeded session without a terminal.

use crate::error::BlackjackGameError;
use crate::event::{GameEvent, TableIo};
use std::collections::VecDeque;

#[derive(Debug, Default)]
pub struct ScriptedIo {
    names: VecDeque<String>,
    actions: VecDeque<String>,
    play_again: VecDeque<bool>,
    events: Vec<GameEvent>,
}

impl ScriptedIo {
    pub fn new() -> ScriptedIo {
        ScriptedIo::default()
    }

    pub fn name<S: Into<String>>(mut self, name: S) -> Self {
        self.names.push_back(name.into());
        self
    }

    /// Queues raw action inputs, answered in order.
    pub fn actions<I, S>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.actions.extend(actions.into_iter().map(Into::into));
        self
    }

    /// Queues play-again answers. Once they run out every answer is no.
    pub fn play_again<I: IntoIterator<Item = bool>>(mut self, answers: I) -> Self {
        self.play_again.extend(answers);
        self
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Action inputs that were never asked for.
    pub fn unused_actions(&self) -> usize {
        self.actions.len()
    }
}

impl TableIo for ScriptedIo {
    fn request_player_name(&mut self) -> Result<String, BlackjackGameError> {
        self.names.pop_front().ok_or(BlackjackGameError::InputClosed)
    }

    fn request_player_action(&mut self) -> Result<String, BlackjackGameError> {
        self.actions.pop_front().ok_or(BlackjackGameError::InputClosed)
    }

    fn request_play_again(&mut self) -> Result<bool, BlackjackGameError> {
        Ok(self.play_again.pop_front().unwrap_or(false))
    }

    fn display(&mut self, event: &GameEvent) -> Result<(), BlackjackGameError> {
        self.events.push(event.clone());
        Ok(())
    }
}
