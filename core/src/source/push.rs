use crate::bridge::decode_payload;
use crate::prelude::{BenchError, BenchResult, Delivery, ResultSource};
use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender};

/// Host-side entry point for push-model bridges.
///
/// The host calls [`PushHandle::return_from_host`] whenever a batch is ready,
/// and signals completion with `None`, [`PushHandle::finish`], or by dropping
/// every handle.
#[derive(Clone)]
pub struct PushHandle {
    sender: UnboundedSender<Option<String>>,
}

impl PushHandle {
    pub fn return_from_host(&self, payload: Option<String>) -> BenchResult<()> {
        self.sender
            .send(payload)
            .map_err(|_| BenchError::Bridge("renderer side of the push bridge is gone".into()))
    }

    pub fn finish(&self) -> BenchResult<()> {
        self.return_from_host(None)
    }
}

/// Push-model source: drains one queued payload per poll.
pub struct PushSource {
    receiver: UnboundedReceiver<Option<String>>,
}

impl PushSource {
    pub fn channel() -> (PushHandle, PushSource) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (PushHandle { sender }, PushSource { receiver })
    }
}

impl ResultSource for PushSource {
    fn next_delivery(&mut self) -> BenchResult<Delivery> {
        match self.receiver.try_recv() {
            Ok(payload) => decode_payload(payload.as_deref()),
            Err(TryRecvError::Empty) => Ok(Delivery::Pending),
            Err(TryRecvError::Disconnected) => Ok(Delivery::EndOfStream),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_queue_is_pending() {
        let (_handle, mut source) = PushSource::channel();
        assert_eq!(source.next_delivery().unwrap(), Delivery::Pending);
    }

    #[test]
    fn pushed_payloads_arrive_in_order() {
        let (handle, mut source) = PushSource::channel();
        handle
            .return_from_host(Some(r#"[{"name":"a","time_c":2,"time_neon":1}]"#.into()))
            .unwrap();
        handle.finish().unwrap();

        assert!(matches!(source.next_delivery().unwrap(), Delivery::Batch(_)));
        assert_eq!(source.next_delivery().unwrap(), Delivery::EndOfStream);
    }

    #[test]
    fn dropped_handles_end_the_stream() {
        let (handle, mut source) = PushSource::channel();
        drop(handle);
        assert_eq!(source.next_delivery().unwrap(), Delivery::EndOfStream);
    }

    #[test]
    fn pushing_after_source_dropped_fails() {
        let (handle, source) = PushSource::channel();
        drop(source);
        assert!(matches!(handle.finish(), Err(BenchError::Bridge(_))));
    }
}
