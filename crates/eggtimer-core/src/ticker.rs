//! Background tick source.
//!
//! A dedicated thread sleeps for a fixed interval and sends a [`Tick`] over a
//! bounded channel. The receiving side drains ticks on its own thread and
//! decides itself when to look; the ticker never touches the timer state.

use std::{
    io,
    sync::mpsc::{self, TryRecvError, TrySendError},
    thread,
    time::Duration,
};

/// Ticks per second.
pub const TICK_RATE_HZ: u32 = 25;

/// Time between two ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(1000 / TICK_RATE_HZ as u64);

/// Ticks kept while nobody drains them, ten minutes' worth. Later ticks are dropped.
pub const TICK_BACKLOG: usize = TICK_RATE_HZ as usize * 600;

/// Progress added per tick by [`TimerMode::FixedIncrement`](crate::TimerMode::FixedIncrement).
pub const FIXED_INCREMENT: f64 = 0.004;

/// A timing signal with no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick;

/// Errors reported by [`Ticker`].
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::IsVariant)]
pub enum TickerError {
    /// The ticker thread could not be started.
    #[display("failed to spawn ticker thread: {_0}")]
    Spawn(io::Error),
    /// The ticker thread is gone.
    #[display("ticker thread disconnected")]
    Disconnected,
}

/// Receiving end of a running ticker thread.
pub struct Ticker {
    receiver: mpsc::Receiver<Tick>,
}

impl std::fmt::Debug for Ticker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ticker").finish_non_exhaustive()
    }
}

impl Ticker {
    /// Starts a ticker thread sending one [`Tick`] every `interval`, keeping at
    /// most [`TICK_BACKLOG`] undrained ticks.
    ///
    /// # Errors
    ///
    /// Returns [`TickerError::Spawn`] if the thread cannot be created.
    pub fn spawn(interval: Duration) -> Result<Self, TickerError> {
        Self::with_backlog(interval, TICK_BACKLOG)
    }

    /// Like [`Ticker::spawn`], keeping at most `backlog` undrained ticks (at least one).
    ///
    /// The thread exits once this `Ticker` has been dropped.
    ///
    /// # Errors
    ///
    /// Returns [`TickerError::Spawn`] if the thread cannot be created.
    pub fn with_backlog(interval: Duration, backlog: usize) -> Result<Self, TickerError> {
        let (tx, rx) = mpsc::sync_channel(backlog.max(1));
        thread::Builder::new()
            .name("egg-ticker".to_owned())
            .spawn(move || {
                loop {
                    thread::sleep(interval);
                    match tx.try_send(Tick) {
                        Ok(()) | Err(TrySendError::Full(Tick)) => {}
                        Err(TrySendError::Disconnected(Tick)) => break,
                    }
                }
                log::debug!("ticker thread stopped");
            })
            .map_err(TickerError::Spawn)?;
        log::debug!("ticker thread started, interval={interval:?}, backlog={backlog}");
        Ok(Self { receiver: rx })
    }

    /// Drains all ticks received so far without blocking and returns how many there were.
    ///
    /// # Errors
    ///
    /// Returns [`TickerError::Disconnected`] if the ticker thread has exited
    /// and no ticks are left.
    pub fn pending(&self) -> Result<usize, TickerError> {
        let mut count = 0;
        loop {
            match self.receiver.try_recv() {
                Ok(Tick) => count += 1,
                Err(TryRecvError::Empty) => return Ok(count),
                Err(TryRecvError::Disconnected) if count > 0 => return Ok(count),
                Err(TryRecvError::Disconnected) => return Err(TickerError::Disconnected),
            }
        }
    }
}
