//! Typing effect
//!
//! Reveals text one character (Unicode scalar) per step. The shell drives
//! the steps from timers: one start delay, one interval per character, and
//! a trailing delay before the cursor is removed.

/// Result of advancing the typewriter
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypingStep {
    /// Show this prefix and schedule the next step after the interval
    Reveal(String),
    /// Everything is visible; remove the cursor after the linger delay
    Complete,
    /// Nothing left to do
    Done,
}

/// One-shot typewriter over a fixed string
#[derive(Clone, Debug)]
pub struct Typewriter {
    chars: Vec<char>,
    revealed: usize,
    started: bool,
    completed: bool,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            revealed: 0,
            started: false,
            completed: false,
        }
    }

    /// Claim the single run of this typewriter
    ///
    /// Returns false on every call after the first.
    pub fn start(&mut self) -> bool {
        if self.started {
            false
        } else {
            self.started = true;
            true
        }
    }

    /// Advance one step
    pub fn next_step(&mut self) -> TypingStep {
        if !self.started || self.completed {
            return TypingStep::Done;
        }
        if self.revealed < self.chars.len() {
            self.revealed += 1;
            TypingStep::Reveal(self.chars[..self.revealed].iter().collect())
        } else {
            self.completed = true;
            TypingStep::Complete
        }
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveals_one_char_at_a_time() {
        let mut tw = Typewriter::new("Hi!");
        assert!(tw.start());
        assert_eq!(tw.next_step(), TypingStep::Reveal("H".into()));
        assert_eq!(tw.next_step(), TypingStep::Reveal("Hi".into()));
        assert_eq!(tw.next_step(), TypingStep::Reveal("Hi!".into()));
        assert_eq!(tw.next_step(), TypingStep::Complete);
        assert_eq!(tw.next_step(), TypingStep::Done);
    }

    #[test]
    fn test_not_restartable() {
        let mut tw = Typewriter::new("ab");
        assert!(tw.start());
        assert!(!tw.start());
    }

    #[test]
    fn test_nothing_before_start() {
        let mut tw = Typewriter::new("ab");
        assert_eq!(tw.next_step(), TypingStep::Done);
    }

    #[test]
    fn test_multibyte_chars() {
        let mut tw = Typewriter::new("né✓");
        tw.start();
        tw.next_step();
        assert_eq!(tw.next_step(), TypingStep::Reveal("né".into()));
        assert_eq!(tw.next_step(), TypingStep::Reveal("né✓".into()));
    }

    #[test]
    fn test_empty_text_completes() {
        let mut tw = Typewriter::new("");
        assert!(tw.is_empty());
        tw.start();
        assert_eq!(tw.next_step(), TypingStep::Complete);
    }
}
