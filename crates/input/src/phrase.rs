//! Typed-phrase detection.

use arrayvec::ArrayVec;

use crate::types::SECRET_PHRASE;

/// Longest phrase a matcher can watch for, in chars.
pub const MAX_PHRASE_CHARS: usize = 32;

/// Watches a stream of typed characters for a phrase.
///
/// Only the most recent characters are kept, so the phrase matches no matter
/// what was typed before it. The buffer clears on a match.
#[derive(Debug, Clone)]
pub struct PhraseMatcher {
    phrase: ArrayVec<char, MAX_PHRASE_CHARS>,
    recent: ArrayVec<char, MAX_PHRASE_CHARS>,
}

impl PhraseMatcher {
    /// `None` for an empty phrase or one longer than [`MAX_PHRASE_CHARS`].
    pub fn new(phrase: &str) -> Option<Self> {
        let mut chars = ArrayVec::new();
        for c in phrase.chars() {
            chars.try_push(c).ok()?;
        }
        if chars.is_empty() {
            return None;
        }
        Some(Self {
            phrase: chars,
            recent: ArrayVec::new(),
        })
    }

    /// Feed one character. Returns true when it completes the phrase.
    pub fn push(&mut self, c: char) -> bool {
        if self.recent.len() == self.phrase.len() {
            self.recent.remove(0);
        }
        self.recent.push(c);
        if self.recent == self.phrase {
            self.recent.clear();
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.recent.clear();
    }

    /// Characters currently matching a prefix of the phrase.
    pub fn progress(&self) -> usize {
        (1..=self.recent.len())
            .rev()
            .find(|&n| self.recent[self.recent.len() - n..] == self.phrase[..n])
            .unwrap_or(0)
    }
}

impl Default for PhraseMatcher {
    fn default() -> Self {
        Self {
            phrase: SECRET_PHRASE.chars().collect(),
            recent: ArrayVec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(m: &mut PhraseMatcher, s: &str) -> usize {
        s.chars().filter(|&c| m.push(c)).count()
    }

    #[test]
    fn matches_after_noise() {
        let mut m = PhraseMatcher::default();
        assert_eq!(feed(&mut m, "xxmyt"), 0);
        assert_eq!(m.progress(), 3);
        assert_eq!(feed(&mut m, "likelbyforever"), 1);
        assert_eq!(m.progress(), 0);
    }

    #[test]
    fn each_full_phrase_matches_once() {
        let mut m = PhraseMatcher::default();
        let twice = format!("{SECRET_PHRASE}{SECRET_PHRASE}");
        assert_eq!(feed(&mut m, &twice), 2);
    }

    #[test]
    fn interrupted_phrase_does_not_match() {
        let mut m = PhraseMatcher::default();
        assert_eq!(feed(&mut m, "mytlikel_byforever"), 0);
    }

    #[test]
    fn rejects_unusable_phrases() {
        assert!(PhraseMatcher::new("").is_none());
        assert!(PhraseMatcher::new(&"x".repeat(MAX_PHRASE_CHARS + 1)).is_none());
        let mut m = PhraseMatcher::new("ab").unwrap();
        assert!(!m.push('a'));
        assert!(m.push('b'));
    }
}
