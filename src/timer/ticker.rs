//! Periodic tick task
//!
//! Spawns a tokio task that sends one [`Tick`] per period until it is
//! cancelled through a oneshot channel or its receiver goes away. The task
//! carries no countdown state; the owner of the countdown applies each tick.

use crate::Result;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::debug;

/// Capacity of the tick channel between the task and its owner
const TICK_BUFFER: usize = 16;

/// One elapsed period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// 1-based count of ticks sent by this ticker
    pub sequence: u64,
}

/// Handle to a running tick task
#[derive(Debug)]
pub struct Ticker {
    rx: mpsc::Receiver<Tick>,
    cancel_tx: Option<oneshot::Sender<()>>,
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Spawn a tick task on the current tokio runtime. The first tick
    /// arrives one full period after spawning.
    pub fn spawn(period: Duration) -> Self {
        let (tx, rx) = mpsc::channel(TICK_BUFFER);
        let (cancel_tx, cancel_rx) = oneshot::channel();
        let handle = tokio::spawn(run_ticker(period, tx, cancel_rx));

        Self {
            rx,
            cancel_tx: Some(cancel_tx),
            handle,
        }
    }

    /// Wait for the next tick. Returns `None` once the task has stopped.
    pub async fn recv(&mut self) -> Option<Tick> {
        self.rx.recv().await
    }

    /// Take a tick if one is already queued
    pub fn try_recv(&mut self) -> Option<Tick> {
        self.rx.try_recv().ok()
    }

    /// Ask the task to stop scheduling ticks
    pub fn cancel(&mut self) {
        if let Some(cancel_tx) = self.cancel_tx.take() {
            // The task may already be gone
            let _ = cancel_tx.send(());
        }
    }

    /// Cancel and wait for the task to exit
    pub async fn shutdown(mut self) -> Result<()> {
        self.cancel();
        self.handle.await?;
        Ok(())
    }
}

async fn run_ticker(period: Duration, tx: mpsc::Sender<Tick>, mut cancel_rx: oneshot::Receiver<()>) {
    let mut interval = interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut sequence = 0u64;

    loop {
        tokio::select! {
            biased;

            // Fires on an explicit cancel and when the handle is dropped
            _ = &mut cancel_rx => {
                debug!("Ticker cancelled after {} ticks", sequence);
                break;
            }

            _ = interval.tick() => {
                sequence += 1;
                if tx.send(Tick { sequence }).await.is_err() {
                    debug!("Tick receiver dropped, stopping ticker");
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_ticks_once_per_period() {
        let start = Instant::now();
        let mut ticker = Ticker::spawn(Duration::from_secs(1));

        for expected in 1..=3 {
            let tick = ticker.recv().await.unwrap();
            assert_eq!(tick.sequence, expected);
            let elapsed = start.elapsed();
            assert!(elapsed >= Duration::from_secs(expected));
            assert!(elapsed < Duration::from_secs(expected) + Duration::from_millis(10));
        }

        ticker.shutdown().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_tick_before_first_period() {
        let mut ticker = Ticker::spawn(Duration::from_secs(1));
        tokio::time::sleep(Duration::from_millis(999)).await;
        assert!(ticker.try_recv().is_none());
        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(ticker.recv().await, Some(Tick { sequence: 1 }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_task() {
        let mut ticker = Ticker::spawn(Duration::from_secs(1));
        ticker.recv().await.unwrap();
        ticker.cancel();

        // Drain whatever was queued before cancellation; the stream must end
        while ticker.recv().await.is_some() {}
        assert!(ticker.shutdown().await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_without_ticks() {
        let ticker = Ticker::spawn(Duration::from_secs(60));
        assert!(ticker.shutdown().await.is_ok());
    }
}
