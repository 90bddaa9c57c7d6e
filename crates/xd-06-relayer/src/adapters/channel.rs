//! # Relay Channel
//!
//! Bounded in-process transport between the origin and destination sides.
//! Nothing here is trusted: the inbox checks every packet.

use crate::domain::{RelayPacket, RelayerError};
use tokio::sync::mpsc;

/// Origin end.
#[derive(Clone, Debug)]
pub struct RelaySender {
    inner: mpsc::Sender<RelayPacket>,
}

/// Destination end.
#[derive(Debug)]
pub struct RelayReceiver {
    inner: mpsc::Receiver<RelayPacket>,
}

/// Bounded channel holding up to `capacity` packets in flight.
pub fn relay_channel(capacity: usize) -> (RelaySender, RelayReceiver) {
    let (tx, rx) = mpsc::channel(capacity.max(1));
    (RelaySender { inner: tx }, RelayReceiver { inner: rx })
}

impl RelaySender {
    /// Send a packet, waiting for room.
    pub async fn send(&self, packet: RelayPacket) -> Result<(), RelayerError> {
        self.inner
            .send(packet)
            .await
            .map_err(|_| RelayerError::ChannelClosed)
    }

    /// Whether the receiver is gone.
    pub fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }
}

impl RelayReceiver {
    /// Next packet, or `None` once every sender is dropped and the buffer
    /// is drained.
    pub async fn recv(&mut self) -> Option<RelayPacket> {
        self.inner.recv().await
    }

    /// Next packet without waiting.
    pub fn try_recv(&mut self) -> Option<RelayPacket> {
        self.inner.try_recv().ok()
    }
}
