//! Typewriter - cyclic type/pause/delete animation over a phrase list
//!
//! A single repeating scheduled callback drives the machine: each `step`
//! performs one character-level mutation and returns the delay before the
//! next step, so the component never nests ad-hoc timers.

/// Animation direction of the typewriter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Pausing,
    Deleting,
}

/// State machine producing the rotating role text, one character at a time
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: &'static [&'static str],
    index: usize,
    shown: usize,
    phase: Phase,
    typing_ms: u32,
    deleting_ms: u32,
    pause_ms: u32,
}

impl Typewriter {
    pub fn new(
        phrases: &'static [&'static str],
        typing_ms: u32,
        deleting_ms: u32,
        pause_ms: u32,
    ) -> Self {
        assert!(!phrases.is_empty(), "typewriter needs at least one phrase");
        Self {
            phrases,
            index: 0,
            shown: 0,
            phase: Phase::Typing,
            typing_ms,
            deleting_ms,
            pause_ms,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn phrase_index(&self) -> usize {
        self.index
    }

    /// Currently displayed prefix of the active phrase
    pub fn text(&self) -> String {
        self.phrases[self.index].chars().take(self.shown).collect()
    }

    fn active_len(&self) -> usize {
        self.phrases[self.index].chars().count()
    }

    /// Advance one tick; returns the delay in ms before the next tick.
    ///
    /// `shown` stays within `[0, active phrase length]` throughout.
    pub fn step(&mut self) -> u32 {
        match self.phase {
            Phase::Typing => {
                let len = self.active_len();
                if self.shown < len {
                    self.shown += 1;
                }
                if self.shown == len {
                    // Phrase complete: hold it for the pause duration
                    self.phase = Phase::Pausing;
                    self.pause_ms
                } else {
                    self.typing_ms
                }
            }
            Phase::Pausing => {
                self.phase = Phase::Deleting;
                self.deleting_ms
            }
            Phase::Deleting => {
                if self.shown > 0 {
                    self.shown -= 1;
                }
                if self.shown == 0 {
                    self.index = (self.index + 1) % self.phrases.len();
                    self.phase = Phase::Typing;
                    self.typing_ms
                } else {
                    self.deleting_ms
                }
            }
        }
    }
}
