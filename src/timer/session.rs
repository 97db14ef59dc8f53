//! The session controller.
//!
//! Owns every piece of mutable timer state. User commands arrive through
//! [`Session::apply`]; scheduled work comes back through [`Session::wake`].
//! Both run on the same event loop, so there is never more than one writer.

use std::time::Duration;

use chrono::Local;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use super::excuses;
use super::format::format_mmss;
use super::minutes::Minutes;
use super::schedule::{Scheduler, TickHandle, Wake};
use super::sink::{LogSink, Presenter};
use super::status::{Controls, Mode, Status};
use super::timings::Timings;

/// A user-triggered action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start with excuses.
    Start(Minutes),
    /// Start without excuses.
    Beg(Minutes),
    /// Add random time to a running countdown.
    Snooze,
    /// Abandon everything and go back to idle.
    Reset,
    /// Leave the completion screen.
    Restart,
}

/// What Restart does after the completion screen closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RestartBehavior {
    /// Return to idle, ready for a new start.
    #[default]
    Idle,
    /// Count down this many minutes straight away.
    Countdown(Minutes),
}

/// The procrastinating countdown.
pub struct Session<P, L, R = StdRng> {
    remaining_seconds: u64,
    mode: Mode,
    abort_requested: bool,
    active_tick: Option<TickHandle>,
    /// Bumped whenever pending wakes must stop mattering.
    epoch: u64,
    excuses_left: u32,
    timings: Timings,
    restart: RestartBehavior,
    scheduler: Scheduler,
    presenter: P,
    log: L,
    rng: R,
}

impl<P: Presenter, L: LogSink> Session<P, L, StdRng> {
    /// Create an idle session with an entropy-seeded RNG.
    #[must_use]
    pub fn new(scheduler: Scheduler, presenter: P, log: L) -> Self {
        Self::with_rng(scheduler, presenter, log, StdRng::from_entropy())
    }
}

impl<P: Presenter, L: LogSink, R: Rng> Session<P, L, R> {
    /// Create an idle session drawing randomness from `rng`.
    #[must_use]
    pub fn with_rng(scheduler: Scheduler, presenter: P, log: L, rng: R) -> Self {
        let mut session = Self {
            remaining_seconds: 0,
            mode: Mode::Idle,
            abort_requested: false,
            active_tick: None,
            epoch: 0,
            excuses_left: 0,
            timings: Timings::default(),
            restart: RestartBehavior::default(),
            scheduler,
            presenter,
            log,
            rng,
        };

        session.presenter.render_remaining(0);
        session.presenter.render_status(&Status::Ready);
        session.presenter.hide_completion();
        session.presenter.set_controls(Controls::for_mode(Mode::Idle));
        session.record("Ready.");
        session
    }

    /// Replace the delay ranges.
    #[must_use]
    pub fn with_timings(mut self, timings: Timings) -> Self {
        self.timings = timings;
        self
    }

    /// Set what Restart does.
    #[must_use]
    pub fn with_restart(mut self, restart: RestartBehavior) -> Self {
        self.restart = restart;
        self
    }

    /// Current mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Seconds left on the countdown.
    #[must_use]
    pub const fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    /// Whether a reset has asked the procrastination loop to stop.
    #[must_use]
    pub const fn abort_requested(&self) -> bool {
        self.abort_requested
    }

    /// Whether a tick is running.
    #[must_use]
    pub const fn is_ticking(&self) -> bool {
        self.active_tick.is_some()
    }

    /// Excuses still to come in the current procrastination loop.
    #[must_use]
    pub const fn excuses_left(&self) -> u32 {
        self.excuses_left
    }

    /// Which inputs the current mode allows.
    #[must_use]
    pub const fn controls(&self) -> Controls {
        Controls::for_mode(self.mode)
    }

    /// The presenter.
    #[must_use]
    pub const fn presenter(&self) -> &P {
        &self.presenter
    }

    /// The presenter, mutably.
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// The log sink.
    #[must_use]
    pub const fn log(&self) -> &L {
        &self.log
    }

    /// Dispatch a user command.
    pub fn apply(&mut self, command: Command) {
        debug!(?command, mode = %self.mode, "command");
        match command {
            Command::Start(minutes) => self.start(minutes),
            Command::Beg(minutes) => self.beg(minutes),
            Command::Snooze => {
                self.snooze();
            }
            Command::Reset => self.reset(),
            Command::Restart => self.restart(),
        }
    }

    /// Start a countdown of `minutes`, after some excuses.
    ///
    /// Ignored unless idle or finished.
    pub fn start(&mut self, minutes: Minutes) {
        self.begin(minutes, false);
    }

    /// Start a countdown of `minutes` right away.
    ///
    /// Ignored unless idle or finished.
    pub fn beg(&mut self, minutes: Minutes) {
        self.begin(minutes, true);
    }

    /// Add a random number of seconds to a running countdown.
    ///
    /// Returns the seconds added, or `None` if nothing is counting.
    pub fn snooze(&mut self) -> Option<u64> {
        if self.mode != Mode::Counting || self.active_tick.is_none() {
            debug!(mode = %self.mode, "snooze ignored");
            return None;
        }

        let added = self.rng.gen_range(self.timings.snooze_seconds.clone());
        self.remaining_seconds = self.remaining_seconds.saturating_add(added);

        self.presenter.render_remaining(self.remaining_seconds);
        self.presenter.render_status(&Status::Snoozed(added));
        self.record(&format!("Snoozed +{added}s"));
        Some(added)
    }

    /// Stop whatever is happening and go back to idle.
    pub fn reset(&mut self) {
        self.active_tick = None;
        self.abort_requested = true;
        self.epoch += 1;
        self.excuses_left = 0;
        self.remaining_seconds = 0;

        self.presenter.render_remaining(0);
        self.presenter.render_status(&Status::Reset);
        self.presenter.hide_completion();
        self.enter(Mode::Idle);
        self.record("Reset by user.");
    }

    /// Leave the completion screen.
    ///
    /// Ignored unless finished.
    pub fn restart(&mut self) {
        if self.mode != Mode::Finished {
            debug!(mode = %self.mode, "restart ignored");
            return;
        }

        self.epoch += 1;
        self.presenter.hide_completion();
        self.record("Restarted.");

        match self.restart {
            RestartBehavior::Idle => {
                self.remaining_seconds = 0;
                self.presenter.render_remaining(0);
                self.presenter.render_status(&Status::Ready);
                self.enter(Mode::Idle);
            }
            RestartBehavior::Countdown(minutes) => {
                self.abort_requested = false;
                self.remaining_seconds = minutes.as_seconds();
                self.start_countdown();
            }
        }
    }

    /// Handle a resolved suspension or tick.
    ///
    /// Wakes from before the last reset, restart, start or completion are
    /// dropped without touching state.
    pub fn wake(&mut self, wake: Wake) {
        if wake.epoch() != self.epoch || self.abort_requested {
            trace!(?wake, epoch = self.epoch, "stale wake dropped");
            return;
        }

        match wake {
            Wake::Resume { .. } if self.mode == Mode::Procrastinating => self.next_excuse(),
            Wake::Launch { .. } if self.mode == Mode::Procrastinating => self.start_countdown(),
            Wake::Tick { .. } if self.mode == Mode::Counting => self.tick(),
            _ => trace!(?wake, mode = %self.mode, "wake does not apply"),
        }
    }

    fn begin(&mut self, minutes: Minutes, skip_delays: bool) {
        if !self.mode.accepts_start() {
            debug!(mode = %self.mode, "start ignored");
            return;
        }

        self.epoch += 1;
        self.abort_requested = false;
        self.remaining_seconds = minutes.as_seconds();

        self.presenter.hide_completion();
        self.presenter.render_remaining(self.remaining_seconds);
        if skip_delays {
            self.presenter.render_status(&Status::Begged);
        }
        self.enter(Mode::Procrastinating);

        let delays = if skip_delays {
            0
        } else {
            self.rng.gen_range(self.timings.delay_count.clone())
        };
        self.excuses_left = delays;
        self.record(&format!("Procrastination session started — {delays} delay(s)."));

        if skip_delays {
            self.start_countdown();
        } else {
            self.next_excuse();
        }
    }

    /// One iteration of the procrastination loop, or the settle pause after it.
    fn next_excuse(&mut self) {
        if self.abort_requested {
            return;
        }

        if self.excuses_left == 0 {
            self.presenter.render_status(&Status::Starting);
            self.scheduler
                .after(self.timings.settle_delay, Wake::Launch { epoch: self.epoch });
            return;
        }

        self.excuses_left -= 1;
        let excuse = excuses::pick(&mut self.rng);
        self.presenter.render_status(&Status::Excuse(excuse));
        self.record(&format!("Excuse: {excuse}"));

        let delay = self.rng.gen_range(self.timings.excuse_delay_ms.clone());
        self.scheduler
            .after(Duration::from_millis(delay), Wake::Resume { epoch: self.epoch });
    }

    fn start_countdown(&mut self) {
        self.active_tick = Some(self.scheduler.every_second(self.epoch));
        self.enter(Mode::Counting);

        self.presenter.render_remaining(self.remaining_seconds);
        self.presenter
            .render_status(&Status::TimeLeft(self.remaining_seconds));
        self.record(&format!(
            "Countdown started: {}",
            format_mmss(self.remaining_seconds)
        ));
    }

    fn tick(&mut self) {
        if self.active_tick.is_none() {
            return;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            self.finish();
            return;
        }

        self.presenter.render_remaining(self.remaining_seconds);
        self.presenter
            .render_status(&Status::TimeLeft(self.remaining_seconds));
    }

    fn finish(&mut self) {
        self.active_tick = None;
        self.epoch += 1;
        self.enter(Mode::Finished);

        self.presenter.render_remaining(0);
        self.presenter.render_status(&Status::Done);
        self.record("Timer finished.");
        self.presenter.show_completion();
    }

    fn enter(&mut self, mode: Mode) {
        if self.mode != mode {
            debug!(from = %self.mode, to = %mode, "mode change");
        }
        self.mode = mode;
        self.presenter.set_controls(Controls::for_mode(mode));
        debug_assert_eq!(self.active_tick.is_some(), mode == Mode::Counting);
    }

    fn record(&mut self, message: &str) {
        self.log.append(Local::now(), message);
    }
}
