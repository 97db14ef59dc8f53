//! Test doubles for driving a session.

use std::time::Duration;

use rand::Rng;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time;

use super::schedule::Wake;
use super::session::Session;
use super::sink::{LogSink, Presenter};
use super::status::{Controls, Status};

/// Presenter that remembers everything it was told.
#[derive(Debug, Default)]
pub struct Recorder {
    pub remaining: Vec<u64>,
    pub statuses: Vec<String>,
    pub status: Option<String>,
    pub completions: usize,
    pub completion_visible: bool,
    pub controls: Option<Controls>,
}

impl Presenter for Recorder {
    fn render_remaining(&mut self, remaining_seconds: u64) {
        self.remaining.push(remaining_seconds);
    }

    fn render_status(&mut self, status: &Status) {
        let text = status.to_string();
        self.statuses.push(text.clone());
        self.status = Some(text);
    }

    fn show_completion(&mut self) {
        self.completions += 1;
        self.completion_visible = true;
    }

    fn hide_completion(&mut self) {
        self.completion_visible = false;
    }

    fn set_controls(&mut self, controls: Controls) {
        self.controls = Some(controls);
    }
}

/// Feed wakes into the session until `done` holds.
///
/// Panics if the wake channel closes first.
pub async fn run_until<P, L, R, F>(
    session: &mut Session<P, L, R>,
    wakes: &mut UnboundedReceiver<Wake>,
    done: F,
) where
    P: Presenter,
    L: LogSink,
    R: Rng,
    F: Fn(&Session<P, L, R>) -> bool,
{
    while !done(session) {
        let wake = wakes.recv().await.expect("wake channel closed");
        session.wake(wake);
    }
}

/// Feed every wake that arrives within `quiet` of the previous one.
pub async fn drain<P, L, R>(
    session: &mut Session<P, L, R>,
    wakes: &mut UnboundedReceiver<Wake>,
    quiet: Duration,
) where
    P: Presenter,
    L: LogSink,
    R: Rng,
{
    while let Ok(Some(wake)) = time::timeout(quiet, wakes.recv()).await {
        session.wake(wake);
    }
}
