// File: src/theme.rs
use crossterm::style::{style, Color, Stylize};
use std::fmt::Display;

/// The role a piece of quiz output plays; each maps to one terminal style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Title,
    Headword,
    Success,
    Meaning,
    Rule,
    Hint,
    Failure,
}

/// Terminal styling for the drill loop. Disabled palettes emit plain text.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn paint<D: Display>(&self, tone: Tone, text: D) -> String {
        if !self.enabled {
            return text.to_string();
        }
        let content = style(text);
        let styled = match tone {
            Tone::Title => content.with(Color::Yellow).bold(),
            Tone::Headword => content.with(Color::Magenta).bold(),
            Tone::Success => content.with(Color::Green).bold(),
            Tone::Meaning => content.with(Color::Blue).bold(),
            Tone::Rule => content.with(Color::Cyan).bold(),
            Tone::Hint => content.dim(),
            Tone::Failure => content.with(Color::DarkRed),
        };
        styled.to_string()
    }
}
