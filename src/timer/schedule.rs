//! Cooperative suspensions and the countdown tick.
//!
//! Nothing here touches session state. Spawned tasks sleep and then send a
//! [`Wake`] into the channel the event loop reads from; the session decides
//! whether the wake is still current.

use std::fmt;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tracing::trace;

use super::timings::TICK_PERIOD;

/// A resolved suspension or tick, tagged with the epoch it was scheduled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wake {
    /// An excuse pause ended.
    Resume {
        /// Epoch at scheduling time.
        epoch: u64,
    },
    /// The settle pause ended; start counting.
    Launch {
        /// Epoch at scheduling time.
        epoch: u64,
    },
    /// One second passed while counting.
    Tick {
        /// Epoch at scheduling time.
        epoch: u64,
    },
}

impl Wake {
    /// The epoch this wake belongs to.
    #[must_use]
    pub const fn epoch(self) -> u64 {
        match self {
            Self::Resume { epoch } | Self::Launch { epoch } | Self::Tick { epoch } => epoch,
        }
    }
}

/// Spawns timed work that reports back through a channel.
///
/// Must be used from inside a tokio runtime.
#[derive(Debug, Clone)]
pub struct Scheduler {
    tx: mpsc::UnboundedSender<Wake>,
}

impl Scheduler {
    /// Create a scheduler and the receiver its wakes arrive on.
    #[must_use]
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Wake>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Send `wake` after `delay`.
    pub fn after(&self, delay: Duration, wake: Wake) {
        let tx = self.tx.clone();
        trace!(?wake, ?delay, "scheduling wake");
        tokio::spawn(async move {
            time::sleep(delay).await;
            tx.send(wake).ok();
        });
    }

    /// Start sending `Wake::Tick` once per second, first one a second from now.
    ///
    /// The tick stops when the returned handle is dropped.
    #[must_use]
    pub fn every_second(&self, epoch: u64) -> TickHandle {
        let tx = self.tx.clone();
        let task = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
            loop {
                interval.tick().await;
                if tx.send(Wake::Tick { epoch }).is_err() {
                    break;
                }
            }
        });
        TickHandle { task, epoch }
    }
}

/// Owner of a running tick. Dropping it cancels the tick.
pub struct TickHandle {
    task: JoinHandle<()>,
    epoch: u64,
}

impl TickHandle {
    /// Epoch the tick was started in.
    #[must_use]
    pub const fn epoch(&self) -> u64 {
        self.epoch
    }
}

impl Drop for TickHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

impl fmt::Debug for TickHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TickHandle")
            .field("epoch", &self.epoch)
            .field("finished", &self.task.is_finished())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_after_delivers_once() {
        let (scheduler, mut rx) = Scheduler::channel();
        let started = Instant::now();

        scheduler.after(Duration::from_millis(700), Wake::Launch { epoch: 3 });

        assert_eq!(rx.recv().await, Some(Wake::Launch { epoch: 3 }));
        assert!(started.elapsed() >= Duration::from_millis(700));
        assert!(time::timeout(Duration::from_secs(10), rx.recv()).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_tick_period() {
        let (scheduler, mut rx) = Scheduler::channel();
        let started = Instant::now();
        let _handle = scheduler.every_second(1);

        for n in 1..=3u64 {
            assert_eq!(rx.recv().await, Some(Wake::Tick { epoch: 1 }));
            assert_eq!(started.elapsed().as_secs(), n);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handle_stops_ticks() {
        let (scheduler, mut rx) = Scheduler::channel();
        let handle = scheduler.every_second(9);
        assert_eq!(handle.epoch(), 9);

        assert_eq!(rx.recv().await, Some(Wake::Tick { epoch: 9 }));
        drop(handle);

        assert!(time::timeout(Duration::from_secs(5), rx.recv()).await.is_err());
    }

    #[test]
    fn test_wake_epoch() {
        assert_eq!(Wake::Resume { epoch: 4 }.epoch(), 4);
        assert_eq!(Wake::Launch { epoch: 5 }.epoch(), 5);
        assert_eq!(Wake::Tick { epoch: 6 }.epoch(), 6);
    }
}
