//! Control intents for the status renderer
//!
//! A bounded channel built on `critical-section` and `heapless::Deque`, so
//! intents can be queued from an interrupt or another task and drained by
//! the renderer at the start of its next tick.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::status::Status;

/// Request to change how the renderer behaves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlIntent {
    /// Zero every classifier and pattern timer, keeping the latches
    ResetTimers,
    /// Show this status regardless of classification
    Override(Status),
    /// Return to classified statuses
    ClearOverride,
}

/// Error returned when trying to send to a full channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError(pub ControlIntent);

/// Error returned when trying to receive from an empty channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// A bounded, interrupt-safe intent queue.
pub struct ControlChannel<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<ControlIntent, SIZE>>>,
}

impl<const SIZE: usize> ControlChannel<SIZE> {
    /// Create a new empty channel.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for this channel.
    pub const fn sender(&self) -> ControlSender<'_, SIZE> {
        ControlSender { channel: self }
    }

    /// Get a receiver handle for this channel.
    pub const fn receiver(&self) -> ControlReceiver<'_, SIZE> {
        ControlReceiver { channel: self }
    }

    /// Try to queue an intent.
    ///
    /// Returns `Err(TrySendError(intent))` if the channel is full.
    pub fn try_send(&self, intent: ControlIntent) -> Result<(), TrySendError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(intent).map_err(TrySendError)
        })
    }

    /// Try to take the oldest queued intent.
    pub fn try_receive(&self) -> Result<ControlIntent, TryReceiveError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(TryReceiveError)
        })
    }
}

impl<const SIZE: usize> Default for ControlChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sending side of a [`ControlChannel`]
#[derive(Clone, Copy)]
pub struct ControlSender<'a, const SIZE: usize> {
    channel: &'a ControlChannel<SIZE>,
}

impl<const SIZE: usize> ControlSender<'_, SIZE> {
    pub fn try_send(&self, intent: ControlIntent) -> Result<(), TrySendError> {
        self.channel.try_send(intent)
    }

    /// Queue a timer reset
    pub fn reset_timers(&self) -> Result<(), TrySendError> {
        self.try_send(ControlIntent::ResetTimers)
    }

    /// Force a status until cleared
    pub fn override_status(&self, status: Status) -> Result<(), TrySendError> {
        self.try_send(ControlIntent::Override(status))
    }

    pub fn clear_override(&self) -> Result<(), TrySendError> {
        self.try_send(ControlIntent::ClearOverride)
    }
}

/// Receiving side of a [`ControlChannel`]
#[derive(Clone, Copy)]
pub struct ControlReceiver<'a, const SIZE: usize> {
    channel: &'a ControlChannel<SIZE>,
}

impl<const SIZE: usize> ControlReceiver<'_, SIZE> {
    pub fn try_receive(&self) -> Result<ControlIntent, TryReceiveError> {
        self.channel.try_receive()
    }
}
