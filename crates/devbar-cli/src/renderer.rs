//! Markdown output for lesson screens.
//!
//! Renders the markdown produced by the core with termimad, with plain text
//! as a fallback. Fenced code blocks are passed through untouched so the
//! snippet gutter keeps its alignment; lines carrying the highlight marker
//! are emphasized.

use std::fmt::Write as _;

use anyhow::Result;
use devbar_core::display::models::HIGHLIGHT_MARKER;
use termimad::{crossterm::style::Color, MadSkin};

const HEADER_STYLE: &str = "\x1b[34m";
const HIGHLIGHT_STYLE: &str = "\x1b[1;33m";
const CODE_STYLE: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// Prints lesson markdown, styled unless `--no-color` was given.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        // Bold marks snippet file names and module titles, inline code marks
        // identifiers in explanations and tasks
        skin.bold.set_fg(Color::Green);
        skin.inline_code.set_fg(Color::Cyan);
        skin.inline_code.set_bg(Color::AnsiValue(236));

        Self { rich_enabled, skin }
    }

    /// Print one screen.
    pub fn render(&self, markdown: &str) -> Result<()> {
        print!("{}", self.format(markdown)?);
        Ok(())
    }

    /// Styled form of `markdown`, or the input unchanged in plain mode.
    pub fn format(&self, markdown: &str) -> Result<String> {
        if !self.rich_enabled {
            return Ok(markdown.to_string());
        }

        let mut out = String::with_capacity(markdown.len());
        let mut in_code = false;
        for line in markdown.lines() {
            if line.starts_with("```") {
                in_code = !in_code;
                continue;
            }

            if in_code {
                let style = if line.starts_with(HIGHLIGHT_MARKER) {
                    HIGHLIGHT_STYLE
                } else {
                    CODE_STYLE
                };
                writeln!(out, "{style}{line}{RESET}")?;
            } else if line.starts_with('#') {
                writeln!(out, "{HEADER_STYLE}{line}{RESET}")?;
            } else {
                writeln!(out, "{}", self.skin.inline(line))?;
            }
        }
        Ok(out)
    }
}
