#![forbid(unsafe_code)]

//! Text metrics
//!
//! All counts are literal substring counts over the raw text. Nothing here
//! knows about JavaScript syntax, so keywords inside strings and comments
//! are counted too.

/// Substrings that mark a line as declaring a function
pub const FUNCTION_MARKERS: [&str; 2] = ["function ", "=> "];

/// Substrings summed into the complexity score
pub const COMPLEXITY_MARKERS: [&str; 4] = ["if ", "for ", "while ", "switch "];

/// Number of `'\n'`-separated segments (an empty text has one)
pub fn line_count(text: &str) -> u32 {
    to_u32(text.split('\n').count())
}

/// Returns true if the line counts towards the function total
pub fn declares_function(line: &str) -> bool {
    FUNCTION_MARKERS.iter().any(|marker| line.contains(marker))
}

/// Non-overlapping occurrences of `needle` in `text`
pub fn count_occurrences(text: &str, needle: &str) -> u32 {
    to_u32(text.matches(needle).count())
}

/// Sum of occurrences of each complexity marker
pub fn complexity_score(text: &str) -> u32 {
    COMPLEXITY_MARKERS
        .iter()
        .map(|marker| count_occurrences(text, marker))
        .fold(0u32, u32::saturating_add)
}

pub(crate) fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
