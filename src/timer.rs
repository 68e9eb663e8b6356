//! Timer service abstraction and the two bundled implementations: a
//! thread-backed interval ticker and a manually-fired timer for tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender, TrySendError, bounded, select, tick, unbounded};

use crate::events::Tick;

/// Schedules a periodic tick stream.
pub trait TimerService {
    fn schedule(&mut self, period: Duration) -> TimerHandle;
}

/// Owned handle to a running schedule. Dropping the handle cancels the
/// schedule; no periodic callback outlives its owner.
#[derive(Debug)]
pub struct TimerHandle {
    ticks: Receiver<Tick>,
    _cancel: Option<Sender<()>>,
}

impl TimerHandle {
    /// Handle whose cancellation is observed through the receiver side
    /// disconnecting (sufficient for in-process timers).
    pub fn new(ticks: Receiver<Tick>) -> Self {
        Self {
            ticks,
            _cancel: None,
        }
    }

    /// Handle that additionally drops `cancel` on teardown, stopping a
    /// detached producer.
    pub fn with_cancel(ticks: Receiver<Tick>, cancel: Sender<()>) -> Self {
        Self {
            ticks,
            _cancel: Some(cancel),
        }
    }

    /// Non-blocking: one pending tick, if any.
    pub fn try_tick(&self) -> Option<Tick> {
        self.ticks.try_recv().ok()
    }

    /// Cloned receiver for embeddings that select over their own channels.
    pub fn ticks(&self) -> Receiver<Tick> {
        self.ticks.clone()
    }
}

/// Interval ticker backed by a spawned thread and
/// [`crossbeam_channel::tick`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadTicker;

impl TimerService for ThreadTicker {
    fn schedule(&mut self, period: Duration) -> TimerHandle {
        // Depth-1 tick channel: a lagging consumer coalesces ticks
        // instead of receiving a burst.
        let (tick_tx, tick_rx) = bounded(1);
        let (cancel_tx, cancel_rx) = bounded::<()>(0);
        thread::spawn(move || {
            let cadence = tick(period);
            loop {
                select! {
                    recv(cadence) -> _ => match tick_tx.try_send(Tick) {
                        Ok(()) | Err(TrySendError::Full(_)) => {}
                        Err(TrySendError::Disconnected(_)) => break,
                    },
                    recv(cancel_rx) -> _ => break,
                }
            }
        });
        TimerHandle::with_cancel(tick_rx, cancel_tx)
    }
}

/// Deterministic timer for tests: ticks fire only when [`ManualTimer::fire`]
/// is called. Clones share the same schedule slot.
#[derive(Debug, Clone, Default)]
pub struct ManualTimer {
    slot: Rc<RefCell<Option<Sender<Tick>>>>,
    scheduled: Rc<Cell<usize>>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver one tick to the current schedule. Returns false when no
    /// schedule is active or its handle has been dropped.
    pub fn fire(&self) -> bool {
        match &*self.slot.borrow() {
            Some(tx) => tx.send(Tick).is_ok(),
            None => false,
        }
    }

    /// How many times a schedule was acquired.
    pub fn schedule_count(&self) -> usize {
        self.scheduled.get()
    }
}

impl TimerService for ManualTimer {
    fn schedule(&mut self, _period: Duration) -> TimerHandle {
        let (tx, rx) = unbounded();
        *self.slot.borrow_mut() = Some(tx);
        self.scheduled.set(self.scheduled.get() + 1);
        TimerHandle::new(rx)
    }
}
