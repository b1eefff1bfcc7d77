//! Lock-free message paths between the control thread and the render thread.
//!
//! Both directions are single-producer/single-consumer `rtrb` rings sized at
//! construction, so neither side ever allocates or blocks afterwards.
//!
//! - control → render: [`ControlMessage`]s, never dropped. A full ring is
//!   reported back to the sender instead of silently discarding the message.
//! - render → control: [`EngineStatus`] snapshots, lossy. The render thread
//!   skips a snapshot rather than wait for the UI to catch up.

use std::collections::VecDeque;

use rtrb::{Consumer, Producer, PushError, RingBuffer};

use crate::{error::ControlError, params::ParamKey};

/// Commands sent from the control thread to the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlMessage {
    SetPlaying(bool),
    SetParam { key: ParamKey, value: f32 },
}

/// Snapshot of engine state published after every rendered block.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EngineStatus {
    /// Gate state as seen by the envelope
    pub playing: bool,
    /// Seconds into the current beat
    pub beat_phase: f64,
    /// Envelope coefficient of the last rendered sample
    pub envelope_level: f32,
    /// Blocks rendered since construction
    pub blocks_rendered: u64,
}

/// Source of control messages for the engine.
///
/// Implemented for the ring consumer used in production and for a plain
/// `VecDeque` so the engine can be driven without a channel.
pub trait MessageReceiver: Send {
    fn pop(&mut self) -> Option<ControlMessage>;
}

impl MessageReceiver for Consumer<ControlMessage> {
    #[inline]
    fn pop(&mut self) -> Option<ControlMessage> {
        Consumer::pop(self).ok()
    }
}

impl MessageReceiver for VecDeque<ControlMessage> {
    fn pop(&mut self) -> Option<ControlMessage> {
        self.pop_front()
    }
}

/// Sink for status snapshots on the render side.
pub trait StatusSender: Send {
    /// Publish a snapshot. Must not block; dropping it is fine.
    fn publish(&mut self, status: EngineStatus);
}

impl StatusSender for Producer<EngineStatus> {
    #[inline]
    fn publish(&mut self, status: EngineStatus) {
        let _ = self.push(status);
    }
}

impl StatusSender for () {
    fn publish(&mut self, _status: EngineStatus) {}
}

/// Control-side half of the parameter channel.
pub struct ControlSender {
    tx: Producer<ControlMessage>,
}

impl ControlSender {
    /// Enqueue `msg` for the engine.
    ///
    /// On a full ring the message is handed back inside
    /// [`ControlError::QueueFull`] and nothing is enqueued.
    pub fn send(&mut self, msg: ControlMessage) -> Result<(), ControlError> {
        self.tx.push(msg).map_err(|PushError::Full(msg)| ControlError::QueueFull(msg))
    }

    /// Number of messages that can be sent right now without hitting a full ring.
    pub fn free_slots(&self) -> usize {
        self.tx.slots()
    }

    /// True once the engine (the consumer) has been dropped.
    pub fn is_abandoned(&self) -> bool {
        self.tx.is_abandoned()
    }
}

/// Control-side half of the status feed.
pub struct StatusReceiver {
    rx: Consumer<EngineStatus>,
}

impl StatusReceiver {
    /// Drain the feed and return the newest snapshot, if any arrived.
    pub fn latest(&mut self) -> Option<EngineStatus> {
        let mut latest = None;
        while let Ok(status) = self.rx.pop() {
            latest = Some(status);
        }
        latest
    }
}

/// Create the control → render parameter channel.
pub fn parameter_channel(capacity: usize) -> (ControlSender, Consumer<ControlMessage>) {
    let (tx, rx) = RingBuffer::<ControlMessage>::new(capacity.max(1));
    (ControlSender { tx }, rx)
}

/// Create the render → control status feed.
pub fn status_channel(capacity: usize) -> (Producer<EngineStatus>, StatusReceiver) {
    let (tx, rx) = RingBuffer::<EngineStatus>::new(capacity.max(1));
    (tx, StatusReceiver { rx })
}
