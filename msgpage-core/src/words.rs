//! Word splitting and byte accounting

/// Split a message into words on runs of Unicode whitespace
///
/// Leading, trailing and repeated whitespace never produce empty words.
pub fn split_words(message: &str) -> Vec<&str> {
    message.split_whitespace().collect()
}

/// Byte length of `words` joined by single spaces
pub fn joined_len(words: &[&str]) -> usize {
    let bytes: usize = words.iter().map(|w| w.len()).sum();
    bytes + words.len().saturating_sub(1)
}
