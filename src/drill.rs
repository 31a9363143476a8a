// File: src/drill.rs
//! The interactive read-answer-print loop.

use crate::core::engine::{Question, QuizEngine, SessionTally};
use crate::persistence::VocabularyStore;
use crate::theme::{Palette, Tone};
use rand::Rng;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use tracing::warn;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";
const QUIT_COMMANDS: [&str; 3] = ["quit", "exit", "q"];

pub fn is_quit_command(input: &str) -> bool {
    let input = input.trim();
    QUIT_COMMANDS.iter().any(|cmd| cmd.eq_ignore_ascii_case(input))
}

fn wants_to_continue(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "" | "y" | "yes")
}

enum Step {
    Next,
    Stop,
}

/// Terminal front end over a [`QuizEngine`].
pub struct Drill<'a, R, W> {
    input: R,
    output: W,
    palette: &'a Palette,
}

impl<'a, R: BufRead, W: Write> Drill<'a, R, W> {
    pub fn new(input: R, output: W, palette: &'a Palette) -> Self {
        Self { input, output, palette }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs rounds until the user quits, input ends, or there is nothing to ask.
    pub fn run<S, G>(
        &mut self,
        engine: &mut QuizEngine<S>,
        offline: bool,
        rng: &mut G,
    ) -> io::Result<SessionTally>
    where
        S: VocabularyStore,
        G: Rng,
    {
        self.print_header(engine, offline)?;

        if engine.words().is_empty() {
            let msg = "No cached words available. \
                       Please run in online mode first to download words.";
            self.say(Tone::Failure, msg)?;
            return Ok(engine.tally());
        }

        loop {
            let Some(question) = engine.next_question(rng) else {
                self.say(Tone::Failure, "No more words available.")?;
                break;
            };
            if let Step::Stop = self.ask(engine, &question)? {
                break;
            }

            writeln!(self.output)?;
            match self.prompt(Tone::Hint, "Continue? (y/n):")? {
                Some(answer) if wants_to_continue(&answer) => writeln!(self.output)?,
                Some(_) => break,
                None => {
                    self.print_ended()?;
                    break;
                }
            }
        }

        let tally = engine.tally();
        self.print_summary(&tally)?;
        Ok(tally)
    }

    /// Writes one painted line.
    fn say<D: Display>(&mut self, tone: Tone, text: D) -> io::Result<()> {
        writeln!(self.output, "{}", self.palette.paint(tone, text))
    }

    fn print_header<S: VocabularyStore>(
        &mut self,
        engine: &QuizEngine<S>,
        offline: bool,
    ) -> io::Result<()> {
        let title = format!("🎯 JLPT Quiz Mode - {}", engine.level());
        writeln!(self.output, "\n{}", self.palette.paint(Tone::Title, title))?;
        if offline {
            self.say(Tone::Hint, "(Offline mode - using cached words only)")?;
        }
        let help = "Type the romaji reading for each kanji. Type 'quit' to exit.";
        writeln!(self.output, "{}\n", self.palette.paint(Tone::Hint, help))
    }

    fn ask<S: VocabularyStore>(
        &mut self,
        engine: &mut QuizEngine<S>,
        question: &Question,
    ) -> io::Result<Step> {
        let item = &question.item;
        let meanings = item.meaning_line();
        self.say(Tone::Rule, RULE)?;
        self.say(Tone::Headword, &item.headword)?;

        writeln!(self.output)?;
        let Some(answer) = self.prompt(Tone::Title, "Romaji >")? else {
            self.print_ended()?;
            return Ok(Step::Stop);
        };
        if is_quit_command(&answer) {
            return Ok(Step::Stop);
        }

        if question.accepts(&answer) {
            self.say(Tone::Success, "✓ Correct!")?;
            self.say(Tone::Meaning, &meanings)?;
            self.print_pos_line(engine, question)?;
            self.record(engine, question, true);
            return Ok(Step::Next);
        }

        self.say(Tone::Failure, "✗ Incorrect.")?;
        self.say(Tone::Hint, format!("Hint - Meaning: {meanings}"))?;

        writeln!(self.output)?;
        let Some(answer) = self.prompt(Tone::Title, "Try again >")? else {
            self.print_ended()?;
            return Ok(Step::Stop);
        };
        if is_quit_command(&answer) {
            return Ok(Step::Stop);
        }

        if question.accepts(&answer) {
            self.say(Tone::Success, "✓ Correct on second try!")?;
            self.record(engine, question, true);
        } else {
            self.say(Tone::Failure, "✗ Incorrect.")?;
            let reveal = format!("Correct answer: {} ({})", item.reading, question.expected_romaji);
            self.say(Tone::Success, reveal)?;
            self.say(Tone::Meaning, &meanings)?;
            self.record(engine, question, false);
        }
        self.print_pos_line(engine, question)?;
        Ok(Step::Next)
    }

    fn record<S: VocabularyStore>(
        &mut self,
        engine: &mut QuizEngine<S>,
        question: &Question,
        correct: bool,
    ) {
        // A failed save should not end the session; the next save retries with full stats.
        if let Err(e) = engine.record(&question.item.id, correct) {
            warn!(id = %question.item.id, error = %e, "could not save quiz stats");
        }
    }

    fn print_pos_line<S: VocabularyStore>(
        &mut self,
        engine: &QuizEngine<S>,
        question: &Question,
    ) -> io::Result<()> {
        match &question.item.part_of_speech {
            Some(pos) => self.say(Tone::Hint, format!("{pos} • {}", engine.level())),
            None => Ok(()),
        }
    }

    /// Shows `label` and reads one line; `None` at end of input.
    fn prompt(&mut self, tone: Tone, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{} ", self.palette.paint(tone, label))?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn print_ended(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n{}", self.palette.paint(Tone::Hint, "Quiz ended."))
    }

    fn print_summary(&mut self, tally: &SessionTally) -> io::Result<()> {
        writeln!(self.output, "\n{}", self.palette.paint(Tone::Rule, RULE))?;
        self.say(Tone::Title, "Session Summary")?;
        self.say(Tone::Success, format!("Correct: {}", tally.correct))?;
        self.say(Tone::Failure, format!("Incorrect: {}", tally.incorrect))?;
        if let Some(accuracy) = tally.accuracy() {
            self.say(Tone::Meaning, format!("Accuracy: {accuracy:.1}%"))?;
        }
        writeln!(self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_commands_ignore_case_and_padding() {
        assert!(is_quit_command("quit"));
        assert!(is_quit_command(" EXIT "));
        assert!(is_quit_command("Q"));
        assert!(!is_quit_command("qq"));
        assert!(!is_quit_command(""));
    }

    #[test]
    fn continue_accepts_yes_or_enter() {
        assert!(wants_to_continue(""));
        assert!(wants_to_continue("Y"));
        assert!(wants_to_continue("yes"));
        assert!(!wants_to_continue("n"));
        assert!(!wants_to_continue("nope"));
    }
}
