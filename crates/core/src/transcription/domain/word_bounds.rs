use super::token::{RecognizedToken, TokenKind};

/// Start time of the first spoken word in a transcript, skipping
/// punctuation tokens. None if nothing was recognized as a word.
pub fn earliest_word_start(tokens: &[RecognizedToken]) -> Option<f64> {
    tokens
        .iter()
        .find(|t| t.kind == TokenKind::Word)
        .map(|t| t.start_time)
}

/// End time of the last spoken word in a transcript.
pub fn latest_word_end(tokens: &[RecognizedToken]) -> Option<f64> {
    tokens
        .iter()
        .rev()
        .find(|t| t.kind == TokenKind::Word)
        .map(|t| t.end_time)
}
