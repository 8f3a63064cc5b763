#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Punctuation,
}

/// One recognized item in a transcription result. Times are seconds relative
/// to the transcribed clip's own start; sequence order is chronological.
#[derive(Clone, Debug, PartialEq)]
pub struct RecognizedToken {
    pub kind: TokenKind,
    pub start_time: f64,
    pub end_time: f64,
}

impl RecognizedToken {
    pub fn word(start_time: f64, end_time: f64) -> Self {
        Self {
            kind: TokenKind::Word,
            start_time,
            end_time,
        }
    }

    pub fn punctuation(start_time: f64, end_time: f64) -> Self {
        Self {
            kind: TokenKind::Punctuation,
            start_time,
            end_time,
        }
    }
}
