// ## 📂 File: `src/splitter/chunk_splitter.rs`

//! Splits a finalized payload into ≤ `max_chunk_size` slices.
//!
//! Design notes:
//! - Arena + cursor: the chunk list is built once, the cursor only moves forward.
//! - Slices are `Bytes` views into the finalized payload; splitting never copies.
//! - Backpressure falls out of the pull contract: nothing moves until asked.

use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;
use futures::Stream;

use crate::constants::{DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE};
use crate::queue::ByteQueue;
use crate::splitter::types::{ChunkSink, PumpStatus, Readiness};
use crate::types::EnvelopeError;

/// `None` → `DEFAULT_CHUNK_SIZE`; otherwise `1..=MAX_CHUNK_SIZE`.
pub fn resolve_max_chunk_size(max_chunk_size: Option<usize>) -> Result<usize, EnvelopeError> {
    match max_chunk_size {
        None => Ok(DEFAULT_CHUNK_SIZE),
        Some(0) => Err(EnvelopeError::invalid_argument("max_chunk_size must be > 0")),
        Some(n) if n > MAX_CHUNK_SIZE => Err(EnvelopeError::invalid_argument(format!(
            "max_chunk_size {n} exceeds {MAX_CHUNK_SIZE}"
        ))),
        Some(n) => Ok(n),
    }
}

#[derive(Debug)]
pub struct ChunkSplitter {
    chunks: Vec<Bytes>,
    cursor: usize,
    byte_size: usize,
    max_chunk_size: usize,
    delivered: usize,
    terminated: bool,
    end_signaled: bool,
}

impl ChunkSplitter {
    /// Build a splitter over `payload`.
    ///
    /// - `max_chunk_size = None` falls back to `DEFAULT_CHUNK_SIZE`.
    /// - A non-empty payload no longer than the limit yields exactly one chunk.
    /// - An empty payload yields no chunks.
    ///
    /// Errors:
    /// - `InvalidArgument` when `max_chunk_size` is zero or above `MAX_CHUNK_SIZE`.
    pub fn new(payload: impl Into<Bytes>, max_chunk_size: Option<usize>) -> Result<Self, EnvelopeError> {
        let max_chunk_size = resolve_max_chunk_size(max_chunk_size)?;

        let mut queue = ByteQueue::new();
        queue.append(payload.into())?;
        let payload = queue.finalize()?;
        let byte_size = payload.len();

        let mut chunks = Vec::with_capacity(byte_size.div_ceil(max_chunk_size));
        for part in queue.snapshot_chunks()? {
            if part.len() <= max_chunk_size {
                chunks.push(part);
                continue;
            }
            let mut off = 0;
            while off < part.len() {
                let end = (off + max_chunk_size).min(part.len());
                chunks.push(part.slice(off..end));
                off = end;
            }
        }

        tracing::debug!(byte_size, max_chunk_size, chunks = chunks.len(), "chunk splitter ready");

        Ok(Self {
            chunks,
            cursor: 0,
            byte_size,
            max_chunk_size,
            delivered: 0,
            terminated: false,
            end_signaled: false,
        })
    }

    /// Total length of the finalized payload.
    #[inline]
    pub fn byte_size(&self) -> usize {
        self.byte_size
    }

    #[inline]
    pub fn max_chunk_size(&self) -> usize {
        self.max_chunk_size
    }

    /// Number of chunks the payload was split into (0 after `terminate`).
    #[inline]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Bytes handed to the consumer so far.
    #[inline]
    pub fn delivered_bytes(&self) -> usize {
        self.delivered
    }

    #[inline]
    pub fn remaining_chunks(&self) -> usize {
        self.chunks.len().saturating_sub(self.cursor)
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.terminated || self.cursor >= self.chunks.len()
    }

    #[inline]
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Pull the next chunk; `None` once the stream has ended.
    pub fn next_chunk(&mut self) -> Option<Bytes> {
        if self.is_exhausted() {
            return None;
        }
        let chunk = self.chunks[self.cursor].clone();
        self.advance(chunk.len());
        Some(chunk)
    }

    #[inline]
    fn advance(&mut self, len: usize) {
        self.cursor += 1;
        self.delivered += len;
        debug_assert!(self.delivered <= self.byte_size);
    }

    /// Push chunks into `sink` until it reports `Full` or the stream ends.
    ///
    /// - `Paused`: the sink is full; the next call resumes at the next chunk.
    /// - `Finished`: all chunks delivered and `sink.finish()` called (once per splitter).
    /// - `Terminated`: the splitter was terminated; nothing is written.
    ///
    /// A chunk the sink rejects with `Err` is not counted as delivered and is
    /// offered again on the next call.
    pub fn pump<S: ChunkSink + ?Sized>(&mut self, sink: &mut S) -> Result<PumpStatus, EnvelopeError> {
        if self.terminated {
            return Ok(PumpStatus::Terminated);
        }

        while self.cursor < self.chunks.len() {
            let chunk = self.chunks[self.cursor].clone();
            let len = chunk.len();
            let readiness = sink.write_chunk(chunk)?;
            self.advance(len);

            if readiness == Readiness::Full {
                tracing::trace!(cursor = self.cursor, delivered = self.delivered, "sink full, pausing");
                if self.cursor < self.chunks.len() {
                    return Ok(PumpStatus::Paused);
                }
            }
        }

        if !self.end_signaled {
            sink.finish()?;
            self.end_signaled = true;
            tracing::debug!(delivered = self.delivered, "chunk stream finished");
        }
        Ok(PumpStatus::Finished)
    }

    /// Release chunk storage. Returns `true` only for the call that had effect.
    pub fn terminate(&mut self) -> bool {
        if self.terminated {
            tracing::trace!("terminate on already terminated splitter");
            return false;
        }
        self.terminated = true;
        self.chunks = Vec::new();
        self.cursor = 0;
        tracing::debug!(delivered = self.delivered, byte_size = self.byte_size, "chunk splitter terminated");
        true
    }
}

impl Iterator for ChunkSplitter {
    type Item = Bytes;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_chunk()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = if self.terminated { 0 } else { self.remaining_chunks() };
        (n, Some(n))
    }
}

impl ExactSizeIterator for ChunkSplitter {}

impl Stream for ChunkSplitter {
    type Item = Bytes;

    fn poll_next(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Poll::Ready(self.get_mut().next_chunk())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        Iterator::size_hint(self)
    }
}
