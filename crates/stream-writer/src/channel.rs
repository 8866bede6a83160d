//! Bounded channel consumer.
//!
//! Several tasks can feed one downstream writer through a bounded tokio
//! channel. `send` blocks while the channel is full, which is how a slow
//! writer pushes back on the producing tasks. It must be called from a
//! blocking context (a plain thread or `spawn_blocking`), never from
//! inside an async task.

use stream_core::{ConsumerError, Record, RecordConsumer};
use tokio::sync::mpsc;

/// Sending half of a record channel.
#[derive(Debug, Clone)]
pub struct ChannelConsumer {
    tx: mpsc::Sender<Record>,
}

impl ChannelConsumer {
    pub fn new(tx: mpsc::Sender<Record>) -> Self {
        Self { tx }
    }
}

impl RecordConsumer for ChannelConsumer {
    fn send(&mut self, record: &Record) -> Result<(), ConsumerError> {
        self.tx
            .blocking_send(record.clone())
            .map_err(|_| ConsumerError::Closed)
    }
}

/// Create a bounded record channel.
pub fn record_channel(capacity: usize) -> (ChannelConsumer, mpsc::Receiver<Record>) {
    let (tx, rx) = mpsc::channel(capacity.max(1));
    (ChannelConsumer::new(tx), rx)
}
