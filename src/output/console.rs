//! Line-mode presenter.
//!
//! Status changes are printed one per line, except the running countdown,
//! which rewrites a single line in place.

use std::io::{self, Stdout, Write};

use colored::Colorize;

use crate::output::pretty::controls_hint;
use crate::timer::{Controls, Presenter, Status};

/// Presenter that writes to a terminal or any other writer.
pub struct ConsolePresenter<W: Write = Stdout> {
    out: W,
    sound: bool,
    last_status: Option<Status>,
    controls: Option<Controls>,
    /// A `\r`-rewritten countdown line is currently open.
    inline: bool,
}

impl ConsolePresenter<Stdout> {
    /// Presenter on stdout.
    #[must_use]
    pub fn stdout(sound: bool) -> Self {
        Self::new(io::stdout(), sound)
    }
}

impl<W: Write> ConsolePresenter<W> {
    /// Presenter on `out`; `sound` rings the bell on completion.
    #[must_use]
    pub fn new(out: W, sound: bool) -> Self {
        Self {
            out,
            sound,
            last_status: None,
            controls: None,
            inline: false,
        }
    }

    /// Give back the writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Close the in-place countdown line, if one is open.
    pub fn finish_line(&mut self) {
        if self.inline {
            writeln!(self.out).ok();
            self.inline = false;
        }
    }

    fn line(&mut self, text: &str) {
        self.finish_line();
        writeln!(self.out, "{text}").ok();
    }
}

impl<W: Write> Presenter for ConsolePresenter<W> {
    fn render_remaining(&mut self, _remaining_seconds: u64) {
        // The countdown is printed through `Status::TimeLeft`.
    }

    fn render_status(&mut self, status: &Status) {
        // A repeated countdown value is a redraw; any other status is an event.
        if matches!(status, Status::TimeLeft(_)) && self.last_status.as_ref() == Some(status) {
            return;
        }
        self.last_status = Some(*status);

        let text = status.to_string();
        match status {
            Status::TimeLeft(_) => {
                write!(self.out, "\r{}  ", text.bold()).ok();
                self.out.flush().ok();
                self.inline = true;
            }
            Status::Excuse(_) => self.line(&format!("  … {}", text.yellow().italic())),
            Status::Snoozed(_) => self.line(&text.magenta().to_string()),
            Status::Done => self.line(&text.green().bold().to_string()),
            Status::Reset => self.line(&text.cyan().to_string()),
            Status::Ready | Status::Begged | Status::Starting => self.line(&text),
        }
    }

    fn show_completion(&mut self) {
        self.line(&"🎉 Time's up! Go do the thing.".green().bold().to_string());
        if self.sound {
            write!(self.out, "\x07").ok();
        }
        self.out.flush().ok();
    }

    fn hide_completion(&mut self) {}

    fn set_controls(&mut self, controls: Controls) {
        if self.controls == Some(controls) {
            return;
        }
        self.controls = Some(controls);
        self.line(&controls_hint(controls).dimmed().to_string());
    }
}
