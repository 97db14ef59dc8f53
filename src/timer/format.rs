//! Formatting for remaining time.

/// Format seconds as `MM:SS`.
///
/// Minutes are zero-padded to two digits and keep any extra digits.
#[must_use]
pub fn format_mmss(seconds: u64) -> String {
    let minutes = seconds / 60;
    let seconds = seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// The flip-clock digits for the remaining time.
///
/// Zero renders as `----`, the "nothing scheduled" face.
#[must_use]
pub fn display_digits(seconds: u64) -> String {
    if seconds == 0 {
        return "----".to_string();
    }
    format_mmss(seconds).replace(':', "")
}
