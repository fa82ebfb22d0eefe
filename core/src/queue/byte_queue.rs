// ## 📂 File: `src/queue/byte_queue.rs`

//! Byte-accurate chunk queue.
//!
//! Design notes:
//! - Chunks are `bytes::Bytes`, so prefix/suffix splits are refcounted views, not copies.
//! - A copy only happens when a read spans more than one chunk.
//! - `peek` takes `&self`: it cannot observe or leave intermediate state.

use std::collections::VecDeque;

use bytes::{Bytes, BytesMut};

use crate::types::EnvelopeError;

/// Ordered sequence of chunks + running total length + finalized flag.
///
/// Invariant: `len` always equals the sum of the current chunk lengths.
#[derive(Debug, Default, Clone)]
pub struct ByteQueue {
    chunks: VecDeque<Bytes>,
    len: usize,
    finalized: bool,
}

impl ByteQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an open queue pre-filled with `chunks`, in order.
    pub fn from_chunks<I, B>(chunks: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<Bytes>,
    {
        let mut queue = Self::new();
        for chunk in chunks {
            queue.push_unchecked(chunk.into());
        }
        queue
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    #[inline]
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Add a chunk to the tail.
    ///
    /// Errors:
    /// - `Overflow` once the queue is finalized.
    pub fn append(&mut self, chunk: impl Into<Bytes>) -> Result<(), EnvelopeError> {
        if self.finalized {
            return Err(EnvelopeError::Overflow("append after finalize"));
        }
        self.push_unchecked(chunk.into());
        Ok(())
    }

    fn push_unchecked(&mut self, chunk: Bytes) {
        // Empty chunks carry nothing and would only make boundary math noisier.
        if chunk.is_empty() {
            return;
        }
        self.len += chunk.len();
        self.chunks.push_back(chunk);
    }

    /// Return exactly `n` bytes from the head without touching queue state.
    pub fn peek(&self, n: usize) -> Result<Bytes, EnvelopeError> {
        self.check_available(n)?;
        if n == 0 {
            return Ok(Bytes::new());
        }

        // `check_available` guarantees a head chunk exists when n > 0.
        let head = match self.chunks.front() {
            Some(head) => head,
            None => return Err(EnvelopeError::Underflow { requested: n, available: 0 }),
        };

        if head.len() == n {
            return Ok(head.clone());
        }
        if head.len() > n {
            return Ok(head.slice(..n));
        }

        // Spans several chunks: gather into a freshly sized buffer.
        let mut out = BytesMut::with_capacity(n);
        for chunk in &self.chunks {
            let want = n - out.len();
            if want == 0 {
                break;
            }
            let take = want.min(chunk.len());
            out.extend_from_slice(&chunk[..take]);
        }
        debug_assert_eq!(out.len(), n);
        Ok(out.freeze())
    }

    /// Remove and return exactly `n` bytes from the head.
    ///
    /// Errors:
    /// - `Underflow` when `n` exceeds the current length (any state).
    /// - `Overflow` when the queue is finalized and `n > 0`.
    pub fn consume(&mut self, n: usize) -> Result<Bytes, EnvelopeError> {
        self.check_available(n)?;
        if n == 0 {
            return Ok(Bytes::new());
        }
        if self.finalized {
            return Err(EnvelopeError::Overflow("consume after finalize"));
        }

        let head_len = self.chunks.front().map(Bytes::len).unwrap_or(0);

        let out = if head_len == n {
            self.pop_head()
        } else if head_len > n {
            match self.chunks.front_mut() {
                // Head keeps the suffix.
                Some(head) => head.split_to(n),
                None => Bytes::new(),
            }
        } else {
            let mut out = BytesMut::with_capacity(n);
            while out.len() < n {
                let want = n - out.len();
                let Some(head) = self.chunks.front_mut() else { break };
                if head.len() <= want {
                    out.extend_from_slice(&head[..]);
                    self.chunks.pop_front();
                } else {
                    out.extend_from_slice(&head.split_to(want));
                }
            }
            out.freeze()
        };

        debug_assert_eq!(out.len(), n);
        self.len -= n;
        Ok(out)
    }

    fn pop_head(&mut self) -> Bytes {
        self.chunks.pop_front().unwrap_or_default()
    }

    /// Concatenate the remaining chunks into one buffer and freeze the queue.
    ///
    /// The chunk list stays readable through `snapshot_chunks`.
    ///
    /// Errors:
    /// - `Overflow` on a second call.
    pub fn finalize(&mut self) -> Result<Bytes, EnvelopeError> {
        if self.finalized {
            return Err(EnvelopeError::Overflow("finalize called twice"));
        }
        self.finalized = true;

        let payload = match self.chunks.len() {
            0 => Bytes::new(),
            1 => self.chunks[0].clone(),
            _ => {
                let mut out = BytesMut::with_capacity(self.len);
                for chunk in &self.chunks {
                    out.extend_from_slice(chunk);
                }
                out.freeze()
            }
        };

        tracing::trace!(bytes = self.len, chunks = self.chunks.len(), "byte queue finalized");
        Ok(payload)
    }

    /// Order-preserving view of the remaining chunks. Finalized queues only.
    pub fn snapshot_chunks(&self) -> Result<Vec<Bytes>, EnvelopeError> {
        if !self.finalized {
            return Err(EnvelopeError::UnsupportedOperation(
                "snapshot_chunks before finalize",
            ));
        }
        Ok(self.chunks.iter().cloned().collect())
    }

    #[inline]
    fn check_available(&self, n: usize) -> Result<(), EnvelopeError> {
        if n > self.len {
            return Err(EnvelopeError::Underflow { requested: n, available: self.len });
        }
        Ok(())
    }
}
