//! Line Stream: the segmenter's only input.

use std::ops::Deref;

use crate::segmenter::tokens;

/// Trimmed, non-empty, noise-free lines. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineStream {
    lines: Vec<String>,
}

impl LineStream {
    /// Split text on line breaks, trim, and drop blank and noise lines.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let lines = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !tokens::is_noise_line(line))
            .map(str::to_string)
            .collect();
        Self { lines }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.lines
    }
}

impl Deref for LineStream {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.lines
    }
}

impl<S: AsRef<str>> FromIterator<S> for LineStream {
    /// Build from ready-made lines, applying the same filtering as
    /// [`LineStream::from_text`].
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let lines = iter
            .into_iter()
            .map(|line| line.as_ref().trim().to_string())
            .filter(|line| !line.is_empty() && !tokens::is_noise_line(line))
            .collect();
        Self { lines }
    }
}
