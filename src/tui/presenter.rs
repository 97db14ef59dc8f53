//! Presenter backing the TUI.
//!
//! Holds what the screen should show; `ui::render` reads it every frame.

use std::time::{Duration, Instant};

use crate::config::PresenterStyle;
use crate::timer::{display_digits, Controls, Presenter, Status};

/// How long a changed digit stays highlighted.
pub const FLIP_DURATION: Duration = Duration::from_millis(350);

/// Delay between typed characters in the typewriter style.
pub const TYPE_INTERVAL: Duration = Duration::from_millis(35);

/// View state for the TUI.
#[derive(Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct TuiPresenter {
    style: PresenterStyle,
    sound: bool,
    digits: String,
    /// When each digit last changed, by position.
    flipped_at: Vec<Option<Instant>>,
    status: String,
    status_is_excuse: bool,
    status_since: Instant,
    completion_visible: bool,
    controls: Controls,
    bell_pending: bool,
}

impl TuiPresenter {
    /// Create a presenter for `style`; `sound` enables the terminal bell.
    #[must_use]
    pub fn new(style: PresenterStyle, sound: bool) -> Self {
        let digits = display_digits(0);
        Self {
            style,
            sound,
            flipped_at: vec![None; digits.chars().count()],
            digits,
            status: String::new(),
            status_is_excuse: false,
            status_since: Instant::now(),
            completion_visible: false,
            controls: Controls::default(),
            bell_pending: false,
        }
    }

    /// Clock digits, `MMSS` or `----`.
    #[must_use]
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Whether the digit at `index` is mid-flip at `now`.
    #[must_use]
    pub fn is_flipping(&self, index: usize, now: Instant) -> bool {
        self.style == PresenterStyle::Flip
            && self
                .flipped_at
                .get(index)
                .copied()
                .flatten()
                .is_some_and(|at| now.saturating_duration_since(at) < FLIP_DURATION)
    }

    /// The part of the status line visible at `now`.
    #[must_use]
    pub fn visible_status(&self, now: Instant) -> &str {
        if self.style != PresenterStyle::Typewriter || !self.status_is_excuse {
            return &self.status;
        }

        let elapsed = now.saturating_duration_since(self.status_since);
        let typed = usize::try_from(elapsed.as_millis() / TYPE_INTERVAL.as_millis())
            .unwrap_or(usize::MAX)
            .saturating_add(1);
        match self.status.char_indices().nth(typed) {
            Some((end, _)) => &self.status[..end],
            None => &self.status,
        }
    }

    /// Whether the current status is an excuse.
    #[must_use]
    pub const fn status_is_excuse(&self) -> bool {
        self.status_is_excuse
    }

    /// Whether the completion screen is up.
    #[must_use]
    pub const fn completion_visible(&self) -> bool {
        self.completion_visible
    }

    /// Current control availability.
    #[must_use]
    pub const fn controls(&self) -> Controls {
        self.controls
    }

    /// Take the pending bell, if any.
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.bell_pending)
    }
}

impl Presenter for TuiPresenter {
    fn render_remaining(&mut self, remaining_seconds: u64) {
        let digits = display_digits(remaining_seconds);
        if digits == self.digits {
            return;
        }

        let now = Instant::now();
        let old: Vec<char> = self.digits.chars().collect();
        let new: Vec<char> = digits.chars().collect();
        if old.len() != new.len() {
            self.flipped_at = vec![Some(now); new.len()];
        } else {
            for (i, (a, b)) in old.iter().zip(&new).enumerate() {
                if a != b {
                    self.flipped_at[i] = Some(now);
                }
            }
        }

        if self.style == PresenterStyle::Flip && self.sound {
            self.bell_pending = true;
        }
        self.digits = digits;
    }

    fn render_status(&mut self, status: &Status) {
        self.status = status.to_string();
        self.status_is_excuse = status.is_excuse();
        self.status_since = Instant::now();
    }

    fn show_completion(&mut self) {
        self.completion_visible = true;
        if self.sound {
            self.bell_pending = true;
        }
    }

    fn hide_completion(&mut self) {
        self.completion_visible = false;
    }

    fn set_controls(&mut self, controls: Controls) {
        self.controls = controls;
    }
}
