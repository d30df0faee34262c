//! Hero "typewriter" sequence.
//!
//! [`TypedText`] is an endless iterator of frames. The browser drives it with
//! a timer, waiting `delay_ms` after showing each frame; tests just pull
//! frames.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypedAction {
    /// One more character is shown.
    Type,
    /// The full word stays on screen.
    Pause,
    /// The text is emptied before the next word.
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedFrame {
    pub action: TypedAction,
    pub text: String,
    pub delay_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Paused,
}

pub struct TypedText {
    words: Vec<Vec<char>>,
    word: usize,
    shown: usize,
    phase: Phase,
    type_ms: u32,
    pause_ms: u32,
}

impl TypedText {
    pub fn new<S: AsRef<str>>(words: &[S], type_ms: u32, pause_ms: u32) -> Self {
        Self {
            words: words
                .iter()
                .map(|w| w.as_ref().chars().collect::<Vec<_>>())
                .filter(|w| !w.is_empty())
                .collect(),
            word: 0,
            shown: 0,
            phase: Phase::Typing,
            type_ms,
            pause_ms,
        }
    }

    fn current(&self) -> String {
        self.words[self.word][..self.shown].iter().collect()
    }
}

impl Iterator for TypedText {
    type Item = TypedFrame;

    fn next(&mut self) -> Option<TypedFrame> {
        if self.words.is_empty() {
            return None;
        }
        let len = self.words[self.word].len();
        let frame = match self.phase {
            Phase::Typing if self.shown < len => {
                self.shown += 1;
                TypedFrame {
                    action: TypedAction::Type,
                    text: self.current(),
                    delay_ms: self.type_ms,
                }
            }
            Phase::Typing => {
                self.phase = Phase::Paused;
                TypedFrame {
                    action: TypedAction::Pause,
                    text: self.current(),
                    delay_ms: self.pause_ms,
                }
            }
            Phase::Paused => {
                self.phase = Phase::Typing;
                self.shown = 0;
                self.word = (self.word + 1) % self.words.len();
                TypedFrame {
                    action: TypedAction::Clear,
                    text: String::new(),
                    delay_ms: 0,
                }
            }
        };
        Some(frame)
    }
}
