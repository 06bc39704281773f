//! Annotated code snippets shown alongside a step.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A literal block of source text with optional emphasized lines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CodeExample {
    /// Virtual file path label, e.g. `src/pages/HomePage.jsx`
    pub title: String,

    /// Source text shown verbatim
    pub body: String,

    /// 1-based line numbers within `body` to draw attention to
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub highlighted_lines: BTreeSet<u32>,
}

/// One line of a snippet together with its position and emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnotatedLine<'a> {
    pub number: u32,
    pub text: &'a str,
    pub highlighted: bool,
}

impl CodeExample {
    /// Number of lines in the body. An empty body has no lines.
    pub fn line_count(&self) -> usize {
        self.body.lines().count()
    }

    /// Whether the given 1-based line is emphasized.
    pub fn is_highlighted(&self, line: u32) -> bool {
        self.highlighted_lines.contains(&line)
    }

    /// Highlighted lines that do not exist in the body.
    pub fn out_of_range_lines(&self) -> impl Iterator<Item = u32> + '_ {
        let count = self.line_count();
        self.highlighted_lines
            .iter()
            .copied()
            .filter(move |&line| line == 0 || line as usize > count)
    }

    /// Iterate over the body lines with their numbers and emphasis.
    pub fn annotated_lines(&self) -> impl Iterator<Item = AnnotatedLine<'_>> {
        self.body.lines().zip(1u32..).map(|(text, number)| AnnotatedLine {
            number,
            text,
            highlighted: self.is_highlighted(number),
        })
    }
}
