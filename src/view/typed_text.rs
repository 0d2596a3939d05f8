//! Hero typed-text animator.
//!
//! Cycles through an ordered list of phrases: reveal one character per tick,
//! hold on the complete phrase, delete one character per tick, then move on
//! to the next phrase (wrapping after the last). Each [`TypedText::tick`]
//! applies exactly one transition and returns the delay until the next one;
//! the owner (normally [`crate::view::Page`]) reschedules it on its timer
//! queue and cancels it on teardown.
//!
//! Progress is tracked in characters, so a prefix never splits a multi-byte
//! character.

use crate::config::TypingConfig;
use crate::view::ViewError;

#[derive(Debug, Clone)]
pub struct TypedText {
    phrases: Vec<String>,
    timing: TypingConfig,
    phrase_index: usize,
    /// Number of characters of the active phrase currently shown.
    shown: usize,
    deleting: bool,
    delay_ms: u64,
}

impl TypedText {
    /// Create an animator positioned at the empty prefix of the first phrase.
    pub fn new(phrases: Vec<String>, timing: TypingConfig) -> Result<Self, ViewError> {
        if phrases.is_empty() {
            return Err(ViewError::NoPhrases);
        }
        Ok(Self {
            phrases,
            timing,
            phrase_index: 0,
            shown: 0,
            deleting: false,
            delay_ms: timing.type_ms,
        })
    }

    /// The text currently displayed: a prefix of the active phrase.
    pub fn text(&self) -> &str {
        let phrase = self.phrase();
        match phrase.char_indices().nth(self.shown) {
            Some((byte, _)) => &phrase[..byte],
            None => phrase,
        }
    }

    /// The active phrase in full.
    pub fn phrase(&self) -> &str {
        &self.phrases[self.phrase_index]
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Delay in milliseconds before the next tick should run.
    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    fn phrase_len(&self) -> usize {
        self.phrase().chars().count()
    }

    /// Apply one transition and return the delay until the next tick.
    pub fn tick(&mut self) -> u64 {
        let full = self.phrase_len();
        self.delay_ms = match (self.deleting, self.shown) {
            (false, shown) if shown < full => {
                self.shown += 1;
                self.timing.type_ms
            }
            (false, _) => {
                self.deleting = true;
                self.timing.hold_ms
            }
            (true, shown) if shown > 0 => {
                self.shown -= 1;
                self.timing.delete_ms
            }
            (true, _) => {
                self.deleting = false;
                self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                self.timing.next_phrase_ms
            }
        };
        self.delay_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animator(phrases: &[&str]) -> TypedText {
        TypedText::new(
            phrases.iter().map(|p| p.to_string()).collect(),
            TypingConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn empty_phrase_list_is_rejected() {
        let result = TypedText::new(vec![], TypingConfig::default());
        assert!(matches!(result, Err(ViewError::NoPhrases)));
    }

    #[test]
    fn starts_empty_on_first_phrase() {
        let typed = animator(&["hello"]);
        assert_eq!(typed.text(), "");
        assert_eq!(typed.phrase_index(), 0);
        assert!(!typed.is_deleting());
        assert_eq!(typed.delay_ms(), 70);
    }

    #[test]
    fn types_one_character_per_tick() {
        let mut typed = animator(&["abc"]);
        assert_eq!(typed.tick(), 70);
        assert_eq!(typed.text(), "a");
        assert_eq!(typed.tick(), 70);
        assert_eq!(typed.text(), "ab");
        assert_eq!(typed.tick(), 70);
        assert_eq!(typed.text(), "abc");
    }

    #[test]
    fn holds_on_full_phrase_then_deletes_faster() {
        let mut typed = animator(&["ab"]);
        typed.tick();
        typed.tick();
        assert_eq!(typed.tick(), 1500);
        assert!(typed.is_deleting());
        assert_eq!(typed.text(), "ab");
        assert_eq!(typed.tick(), 40);
        assert_eq!(typed.text(), "a");
        assert_eq!(typed.tick(), 40);
        assert_eq!(typed.text(), "");
    }

    #[test]
    fn advances_after_empty_with_longer_pause() {
        let mut typed = animator(&["a", "b"]);
        typed.tick(); // "a"
        typed.tick(); // hold
        typed.tick(); // ""
        assert_eq!(typed.tick(), 500);
        assert!(!typed.is_deleting());
        assert_eq!(typed.phrase_index(), 1);
        assert_eq!(typed.text(), "");
        typed.tick();
        assert_eq!(typed.text(), "b");
    }

    #[test]
    fn every_phrase_reaches_full_before_deleting_and_empty_before_advancing() {
        let phrases = ["a full-stack developer.", "a problem-solver.", "x"];
        let mut typed = animator(&phrases);
        let mut completed = Vec::new();

        for _ in 0..phrases.len() {
            let index = typed.phrase_index();
            let mut reached_full = false;
            while typed.phrase_index() == index {
                let was_deleting = typed.is_deleting();
                typed.tick();
                if !was_deleting && typed.is_deleting() {
                    // Deletion may only begin from the complete phrase.
                    assert_eq!(typed.text(), phrases[index]);
                    reached_full = true;
                }
                if typed.phrase_index() != index {
                    assert!(reached_full);
                }
            }
            completed.push(index);
        }

        assert_eq!(completed, vec![0, 1, 2]);
    }

    #[test]
    fn phrase_index_wraps_to_zero() {
        let mut typed = animator(&["a", "b"]);
        let mut indices = vec![typed.phrase_index()];
        for _ in 0..20 {
            typed.tick();
            if indices.last() != Some(&typed.phrase_index()) {
                indices.push(typed.phrase_index());
            }
        }
        assert_eq!(&indices[..4], &[0, 1, 0, 1]);
    }

    #[test]
    fn multibyte_characters_are_never_split() {
        let mut typed = animator(&["héllo→"]);
        let mut seen = Vec::new();
        for _ in 0..6 {
            typed.tick();
            seen.push(typed.text().to_string());
        }
        assert_eq!(seen, vec!["h", "hé", "hél", "héll", "héllo", "héllo→"]);
    }

    #[test]
    fn empty_phrase_holds_then_advances() {
        let mut typed = animator(&["", "b"]);
        assert_eq!(typed.tick(), 1500);
        assert!(typed.is_deleting());
        assert_eq!(typed.tick(), 500);
        assert_eq!(typed.phrase_index(), 1);
    }
}
