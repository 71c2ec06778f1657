//! Typed-text animation engine
//!
//! A small state machine that types a phrase one character at a time,
//! pauses, erases it again and moves on to the next phrase. The engine never
//! touches a timer or the DOM: `advance()` returns the text to display and
//! the delay before the next step, and the driver in `typing::driver` does
//! the writing and scheduling.

use serde::{Deserialize, Serialize};

use crate::errors::{SiteError, SiteResult};

/// Per-step delays for the typing effect, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingTiming {
    /// Delay after each typed character
    pub type_ms: u32,
    /// Delay after each erased character
    pub erase_ms: u32,
    /// Delay once a phrase is fully typed, before erasing starts
    pub pause_ms: u32,
}

impl TypingTiming {
    pub fn new(type_ms: u32, erase_ms: u32, pause_ms: u32) -> Self {
        Self { type_ms, erase_ms, pause_ms }
    }
}

impl Default for TypingTiming {
    fn default() -> Self {
        Self {
            type_ms: 90,
            erase_ms: 45,
            pause_ms: 1600,
        }
    }
}

/// Ordered, non-empty list of phrases cycled by the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseSet {
    phrases: Vec<String>,
}

impl PhraseSet {
    /// Build a phrase set, dropping empty strings.
    ///
    /// Returns `SiteError::EmptyPhraseSet` when nothing is left.
    pub fn new<I, S>(phrases: I) -> SiteResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Vec<String> = phrases
            .into_iter()
            .map(Into::into)
            .filter(|p| !p.is_empty())
            .collect();

        if phrases.is_empty() {
            return Err(SiteError::EmptyPhraseSet);
        }
        Ok(Self { phrases })
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn get(&self, index: usize) -> &str {
        &self.phrases[index % self.phrases.len()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(String::as_str)
    }
}

/// Current animation position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TypingCursor {
    /// Index into the phrase set
    pub phrase: usize,
    /// Number of characters of the current phrase on screen
    pub chars: usize,
    pub erasing: bool,
}

/// Outcome of one engine step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Full replacement text for the surface
    pub text: String,
    /// Milliseconds until the next step should run
    pub delay_ms: u32,
}

/// The typing state machine
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: PhraseSet,
    timing: TypingTiming,
    cursor: TypingCursor,
    /// Character counts, cached per phrase
    lengths: Vec<usize>,
}

impl Typewriter {
    pub fn new(phrases: PhraseSet, timing: TypingTiming) -> Self {
        let lengths = phrases.iter().map(|p| p.chars().count()).collect();
        Self {
            phrases,
            timing,
            cursor: TypingCursor::default(),
            lengths,
        }
    }

    /// Convenience constructor from raw strings
    pub fn from_phrases<I, S>(phrases: I, timing: TypingTiming) -> SiteResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self::new(PhraseSet::new(phrases)?, timing))
    }

    pub fn cursor(&self) -> TypingCursor {
        self.cursor
    }

    pub fn timing(&self) -> TypingTiming {
        self.timing
    }

    pub fn phrases(&self) -> &PhraseSet {
        &self.phrases
    }

    /// Delay before the very first step
    pub fn initial_delay(&self) -> u32 {
        self.timing.type_ms
    }

    /// Run one step of the animation.
    pub fn advance(&mut self) -> Step {
        let phrase_len = self.lengths[self.cursor.phrase];
        let text_phrase = self.cursor.phrase;

        let delay_ms = if !self.cursor.erasing {
            self.cursor.chars += 1;
            if self.cursor.chars >= phrase_len {
                self.cursor.chars = phrase_len;
                self.cursor.erasing = true;
                self.timing.pause_ms
            } else {
                self.timing.type_ms
            }
        } else {
            self.cursor.chars = self.cursor.chars.saturating_sub(1);
            if self.cursor.chars == 0 {
                self.cursor.erasing = false;
                self.cursor.phrase = (self.cursor.phrase + 1) % self.phrases.len();
                self.timing.type_ms
            } else {
                self.timing.erase_ms
            }
        };

        let text = prefix(self.phrases.get(text_phrase), self.cursor.chars).to_string();
        log::trace!(
            "typewriter step: phrase={} chars={} erasing={} next={}ms",
            self.cursor.phrase,
            self.cursor.chars,
            self.cursor.erasing,
            delay_ms
        );

        Step { text, delay_ms }
    }
}

/// First `chars` characters of `s` (char-boundary safe)
pub fn prefix(s: &str, chars: usize) -> &str {
    match s.char_indices().nth(chars) {
        Some((byte_idx, _)) => &s[..byte_idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timing() -> TypingTiming {
        TypingTiming::new(10, 5, 100)
    }

    #[test]
    fn test_empty_phrase_set_rejected() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(PhraseSet::new(empty), Err(SiteError::EmptyPhraseSet));
        assert_eq!(PhraseSet::new(["", ""]), Err(SiteError::EmptyPhraseSet));
    }

    #[test]
    fn test_empty_strings_dropped() {
        let set = PhraseSet::new(["", "a", "", "b"]).unwrap();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_single_phrase_sequence() {
        let mut tw = Typewriter::from_phrases(["ab"], timing()).unwrap();

        let steps: Vec<(String, u32)> = (0..6)
            .map(|_| {
                let s = tw.advance();
                (s.text, s.delay_ms)
            })
            .collect();

        assert_eq!(
            steps,
            vec![
                ("a".to_string(), 10),
                ("ab".to_string(), 100),
                ("a".to_string(), 5),
                ("".to_string(), 10),
                ("a".to_string(), 10),
                ("ab".to_string(), 100),
            ]
        );
    }

    #[test]
    fn test_two_phrase_cycle_wraps() {
        let mut tw = Typewriter::from_phrases(["x", "yz"], timing()).unwrap();
        let texts: Vec<String> = (0..7).map(|_| tw.advance().text).collect();
        assert_eq!(texts, vec!["x", "", "y", "yz", "y", "", "x"]);
        assert_eq!(tw.cursor().phrase, 0);
    }

    #[test]
    fn test_cursor_after_cycle() {
        let mut tw = Typewriter::from_phrases(["x", "yz"], timing()).unwrap();
        for _ in 0..6 {
            tw.advance();
        }
        assert_eq!(
            tw.cursor(),
            TypingCursor { phrase: 0, chars: 0, erasing: false }
        );
    }

    #[test]
    fn test_multibyte_prefix() {
        let mut tw = Typewriter::from_phrases(["héé"], timing()).unwrap();
        assert_eq!(tw.advance().text, "h");
        assert_eq!(tw.advance().text, "hé");
        assert_eq!(tw.advance().text, "héé");
        assert!(tw.cursor().erasing);
    }

    #[test]
    fn test_prefix_bounds() {
        assert_eq!(prefix("abc", 0), "");
        assert_eq!(prefix("abc", 2), "ab");
        assert_eq!(prefix("abc", 9), "abc");
    }
}
