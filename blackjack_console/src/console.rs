//! The terminal side of the table: prompts on the writer, answers from the reader.

use crate::write::render_event;
use blackjack_lib::{is_affirmative, BlackjackGameError, GameEvent, TableIo};
use serde::Serialize;
use std::io::{self, BufRead, Write};

const NAME_PROMPT: &str = "Enter your name: ";
const ACTION_PROMPT: &str = "Choose an action: 1) Pass 2) Add card 3) Open cards";
const PLAY_AGAIN_PROMPT: &str = "Do you want to play again? (yes/no) ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    /// One JSON object per line for every event and prompt.
    Json,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
enum Prompt {
    PlayerName,
    PlayerAction,
    PlayAgain,
}

#[derive(Serialize)]
struct PromptLine {
    prompt: Prompt,
}

/// `TableIo` over any reader and writer, normally stdin and stdout.
pub struct Console<R, W> {
    input: R,
    output: W,
    format: OutputFormat,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, format: OutputFormat) -> Console<R, W> {
        Console {
            input,
            output,
            format,
        }
    }

    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, prompt: Prompt) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => match prompt {
                Prompt::PlayerName => write!(self.output, "{}", NAME_PROMPT)?,
                Prompt::PlayerAction => writeln!(self.output, "{}", ACTION_PROMPT)?,
                Prompt::PlayAgain => write!(self.output, "{}", PLAY_AGAIN_PROMPT)?,
            },
            OutputFormat::Json => self.write_json(&PromptLine { prompt })?,
        }
        self.output.flush()
    }

    fn write_json<T: Serialize>(&mut self, value: &T) -> io::Result<()> {
        serde_json::to_writer(&mut self.output, value)?;
        writeln!(self.output)
    }

    /// Reads one line without its line ending, `None` once the input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}

impl<R: BufRead, W: Write> TableIo for Console<R, W> {
    fn request_player_name(&mut self) -> Result<String, BlackjackGameError> {
        self.prompt(Prompt::PlayerName)?;
        self.read_line()?.ok_or(BlackjackGameError::InputClosed)
    }

    fn request_player_action(&mut self) -> Result<String, BlackjackGameError> {
        self.prompt(Prompt::PlayerAction)?;
        self.read_line()?.ok_or(BlackjackGameError::InputClosed)
    }

    fn request_play_again(&mut self) -> Result<bool, BlackjackGameError> {
        self.prompt(Prompt::PlayAgain)?;
        Ok(self
            .read_line()?
            .map(|answer| is_affirmative(&answer))
            .unwrap_or(false))
    }

    fn display(&mut self, event: &GameEvent) -> Result<(), BlackjackGameError> {
        match self.format {
            OutputFormat::Text => writeln!(self.output, "{}", render_event(event))?,
            OutputFormat::Json => self.write_json(event)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blackjack_lib::{
        BlackjackSession, Card, Deck, Participant, Rank, Suit, Table, TableConfig,
    };
    use std::io::Cursor;

    fn play(input: &str, format: OutputFormat) -> (String, BlackjackSession) {
        let config = TableConfig::new().seed(31).build();
        let mut console = Console::new(Cursor::new(input.to_string()), Vec::new(), format);
        let mut session = BlackjackSession::start(&config, &mut console).unwrap();
        session.run(&mut console).unwrap();
        let output = String::from_utf8(console.into_output()).unwrap();
        (output, session)
    }

    #[test]
    fn text_session_from_welcome_to_thanks() {
        let (output, session) = play("Ada\n1\nno\n", OutputFormat::Text);
        assert!(output.starts_with("Welcome to the Blackjack game!\nEnter your name: "));
        assert!(output.contains("Hello, Ada! Both you and the dealer start with $100 in the bank."));
        assert!(output.contains("Your final hand: "));
        assert!(output.trim_end().ends_with("Thanks for playing!"));
        assert_eq!(session.summary().rounds_played, 1);
    }

    /// Two rounds where the player stands on the deal: 18 against 17, then 19 against 18.
    fn two_round_session() -> BlackjackSession {
        let cards = [
            Rank::Ten,
            Rank::Ten,
            Rank::Eight,
            Rank::Seven,
            Rank::Ten,
            Rank::Ten,
            Rank::Nine,
            Rank::Eight,
        ]
        .into_iter()
        .map(|rank| Card::new(Suit::Clubs, rank));
        let table = Table::with_deck(
            Deck::stacked(cards, 5),
            Participant::new("Ada", 100),
            Participant::dealer(100),
            10,
        );
        BlackjackSession::with_table(table, 100)
    }

    #[test]
    fn uppercase_yes_plays_another_round() {
        let mut session = two_round_session();
        let mut console = Console::new(
            Cursor::new("1\nYES\n1\nno\n".to_string()),
            Vec::new(),
            OutputFormat::Text,
        );
        session.run(&mut console).unwrap();
        let output = String::from_utf8(console.into_output()).unwrap();

        assert_eq!(session.summary().rounds_played, 2);
        assert_eq!(session.summary().player_wins, 2);
        assert_eq!(output.matches(PLAY_AGAIN_PROMPT).count(), 2);
        assert!(output.contains("Starting a new round... (round 2)"));
    }

    #[test]
    fn padded_yes_ends_the_session() {
        let mut session = two_round_session();
        let mut console = Console::new(
            Cursor::new("1\n yes\n".to_string()),
            Vec::new(),
            OutputFormat::Text,
        );
        session.run(&mut console).unwrap();
        assert_eq!(session.summary().rounds_played, 1);
    }

    #[test]
    fn end_of_input_stops_after_the_round() {
        let config = TableConfig::new().seed(31).player_name("Ada").build();
        let mut console = Console::new(Cursor::new(String::new()), Vec::new(), OutputFormat::Text);
        let mut session = BlackjackSession::start(&config, &mut console).unwrap();
        let result = session.play_round(&mut console);
        // Either the action prompt hit end of input, or the player had 21 and was never asked.
        match result {
            Err(BlackjackGameError::InputClosed) => {}
            Ok(report) => assert!(report.player_score >= 21),
            Err(other) => panic!("unexpected error: {other}"),
        }
        assert!(!console.request_play_again().unwrap());
    }

    #[test]
    fn json_mode_writes_one_object_per_line() {
        let (output, _) = play("Ada\n1\nno\n", OutputFormat::Json);
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines.len() > 5);
        for line in &lines {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(value.get("event").is_some() || value.get("prompt").is_some());
        }
        assert_eq!(lines[0], r#"{"event":"welcome"}"#);
        assert_eq!(lines[1], r#"{"prompt":"player_name"}"#);
        assert_eq!(lines.last().copied(), Some(r#"{"event":"thanks"}"#));
    }
}
