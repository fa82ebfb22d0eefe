use bytes::Bytes;

use crate::types::EnvelopeError;

/// Consumer buffer state reported after each accepted chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    /// Buffer can take more right now.
    Ready,
    /// Buffer is full; stop until the consumer has drained.
    Full,
}

/// Outcome of one `ChunkSplitter::pump` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumpStatus {
    /// Sink reported `Full`; call `pump` again once it has drained.
    Paused,
    /// Every chunk was delivered and `finish` has been signaled.
    Finished,
    /// The splitter was terminated before the stream ended.
    Terminated,
}

/// Backpressure-aware chunk consumer (socket writer, HTTP body, ...).
pub trait ChunkSink {
    /// Take ownership of one chunk. `Err` means the chunk was NOT accepted.
    fn write_chunk(&mut self, chunk: Bytes) -> Result<Readiness, EnvelopeError>;

    /// End-of-stream signal, delivered exactly once after the last chunk.
    fn finish(&mut self) -> Result<(), EnvelopeError> {
        Ok(())
    }
}

/// Unbounded in-memory sink.
impl ChunkSink for Vec<Bytes> {
    fn write_chunk(&mut self, chunk: Bytes) -> Result<Readiness, EnvelopeError> {
        self.push(chunk);
        Ok(Readiness::Ready)
    }
}
