//! Application state for the TUI.

use crate::timer::Minutes;

/// Longest minute entry accepted from the keyboard.
const MAX_INPUT_LEN: usize = 8;

/// State owned by the TUI itself, outside the session.
#[derive(Debug)]
pub struct App {
    /// Minute count as typed.
    pub minutes_input: String,
    /// Whether the help overlay is open.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Create a new app with the minute field prefilled.
    #[must_use]
    pub fn new(default_minutes: Minutes) -> Self {
        Self {
            minutes_input: default_minutes.to_string(),
            show_help: false,
            should_quit: false,
        }
    }

    /// The typed minutes, coerced into range.
    #[must_use]
    pub fn minutes(&self) -> Minutes {
        Minutes::parse(&self.minutes_input)
    }

    /// Append a digit or decimal point to the minute field.
    pub fn push_char(&mut self, c: char) {
        if !(c.is_ascii_digit() || c == '.') || self.minutes_input.len() >= MAX_INPUT_LEN {
            return;
        }
        self.minutes_input.push(c);
    }

    /// Delete the last character of the minute field.
    pub fn backspace(&mut self) {
        self.minutes_input.pop();
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefilled_minutes() {
        let app = App::new(Minutes::new(5));
        assert_eq!(app.minutes_input, "5");
        assert_eq!(app.minutes(), Minutes::new(5));
    }

    #[test]
    fn test_editing() {
        let mut app = App::new(Minutes::new(5));
        app.push_char('0');
        app.push_char('x');
        assert_eq!(app.minutes_input, "50");

        app.backspace();
        app.backspace();
        app.backspace();
        assert_eq!(app.minutes_input, "");
        // Empty input still yields a usable count.
        assert_eq!(app.minutes(), Minutes::MIN);
    }

    #[test]
    fn test_input_length_is_bounded() {
        let mut app = App::new(Minutes::new(1));
        for _ in 0..20 {
            app.push_char('9');
        }
        assert_eq!(app.minutes_input.len(), MAX_INPUT_LEN);
    }
}
