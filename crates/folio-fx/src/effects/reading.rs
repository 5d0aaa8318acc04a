//! Reading time estimate

/// Whitespace-delimited word count
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Minutes to read `words` at `words_per_minute`, rounded up, at least 1
///
/// A zero rate is treated as the default of 200.
pub fn reading_minutes(words: usize, words_per_minute: u32) -> u32 {
    let wpm = if words_per_minute == 0 { 200 } else { words_per_minute };
    let minutes = words.div_ceil(wpm as usize);
    minutes.max(1) as u32
}

/// Badge text
pub fn reading_time_label(minutes: u32) -> String {
    format!("{} min read", minutes)
}
