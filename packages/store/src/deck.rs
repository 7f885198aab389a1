//! # Slide deck — the editor's state container
//!
//! [`Deck`] holds an ordered list of [`Slide`]s and a cursor. The editor view
//! keeps one of these in a signal and mutates it through the methods here;
//! cursor movement is always clamped to `[0, len - 1]`.
//!
//! A deck is populated one of two ways:
//!
//! - [`Deck::placeholder`] — the fixed five-slide set the local generation
//!   path fabricates after its artificial delay.
//! - It is bypassed entirely once a remote export produces a download URL, at
//!   which point the preview switches to an embedded document viewer.

use serde::{Deserialize, Serialize};

/// A single slide: title, body text, optional image reference.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub title: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Slide {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            image: None,
        }
    }
}

/// Ordered slides plus a cursor, never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct Deck {
    slides: Vec<Slide>,
    current: usize,
}

impl Default for Deck {
    fn default() -> Self {
        Self::welcome()
    }
}

impl Deck {
    /// The single slide a fresh editor starts with.
    pub fn welcome() -> Self {
        Self {
            slides: vec![Slide::new(
                "Welcome to Your Presentation",
                "Created with SlideAI",
            )],
            current: 0,
        }
    }

    /// The fixed placeholder set produced by local generation, with the
    /// topic spliced into the opening slide.
    pub fn placeholder(topic: &str) -> Self {
        Self {
            slides: vec![
                Slide::new(
                    format!("Introduction to {topic}"),
                    "An overview of key concepts and ideas",
                ),
                Slide::new(
                    "Key Benefits",
                    "\u{2022} Improved efficiency\n\u{2022} Enhanced productivity\n\u{2022} Better outcomes",
                ),
                Slide::new(
                    "Implementation Strategy",
                    "How to successfully implement these ideas in practice",
                ),
                Slide::new("Results & Impact", "Measurable outcomes and long-term benefits"),
                Slide::new("Next Steps", "Action items and recommendations"),
            ],
            current: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Zero-based cursor position.
    pub fn position(&self) -> usize {
        self.current
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn current(&self) -> &Slide {
        &self.slides[self.current]
    }

    /// Advance the cursor, stopping at the last slide.
    pub fn next(&mut self) {
        if self.current + 1 < self.slides.len() {
            self.current += 1;
        }
    }

    /// Retreat the cursor, stopping at the first slide.
    pub fn prev(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    /// Jump to a slide; out-of-range indices are clamped.
    pub fn select(&mut self, index: usize) {
        self.current = index.min(self.slides.len() - 1);
    }

    pub fn at_start(&self) -> bool {
        self.current == 0
    }

    pub fn at_end(&self) -> bool {
        self.current + 1 == self.slides.len()
    }

    /// Replace the current slide's title.
    pub fn set_title(&mut self, title: &str) {
        self.slides[self.current].title = title.to_string();
    }

    /// Replace the current slide's body text.
    pub fn set_body(&mut self, body: &str) {
        self.slides[self.current].body = body.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_clamped_at_bounds() {
        let mut deck = Deck::placeholder("Rust");
        assert_eq!(deck.len(), 5);
        assert_eq!(deck.position(), 0);

        deck.prev();
        assert_eq!(deck.position(), 0);

        for _ in 0..10 {
            deck.next();
        }
        assert_eq!(deck.position(), 4);
        assert!(deck.at_end());

        deck.prev();
        assert_eq!(deck.position(), 3);
    }

    #[test]
    fn test_select_clamped() {
        let mut deck = Deck::welcome();
        deck.select(42);
        assert_eq!(deck.position(), 0);

        let mut deck = Deck::placeholder("x");
        deck.select(3);
        assert_eq!(deck.position(), 3);
    }

    #[test]
    fn test_placeholder_splices_topic() {
        let deck = Deck::placeholder("Quarterly Review");
        assert_eq!(deck.current().title, "Introduction to Quarterly Review");
        assert_eq!(deck.slides()[4].title, "Next Steps");
    }

    #[test]
    fn test_edit_current_slide_only() {
        let mut deck = Deck::placeholder("x");
        deck.next();
        deck.set_title("Edited");
        deck.set_body("New body");

        assert_eq!(deck.slides()[1].title, "Edited");
        assert_eq!(deck.slides()[1].body, "New body");
        assert_eq!(deck.slides()[0].title, "Introduction to x");
    }

    #[test]
    fn test_welcome_is_single_slide() {
        let deck = Deck::welcome();
        assert_eq!(deck.len(), 1);
        assert!(deck.at_start() && deck.at_end());
    }
}
