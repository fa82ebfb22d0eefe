#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use proptest::prelude::*;
    use envelope_core::{
        constants::{DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE},
        splitter::{resolve_max_chunk_size, ChunkSink, ChunkSplitter, PumpStatus, Readiness},
        types::EnvelopeError,
        utils::chunks_to_payload,
    };

    /// Sink that reports `Full` every `capacity` chunks and counts `finish`.
    struct BoundedSink {
        capacity: usize,
        buffered: usize,
        received: Vec<Bytes>,
        finished: usize,
    }

    impl BoundedSink {
        fn new(capacity: usize) -> Self {
            Self { capacity, buffered: 0, received: Vec::new(), finished: 0 }
        }

        fn drain(&mut self) {
            self.buffered = 0;
        }
    }

    impl ChunkSink for BoundedSink {
        fn write_chunk(&mut self, chunk: Bytes) -> Result<Readiness, EnvelopeError> {
            self.received.push(chunk);
            self.buffered += 1;
            Ok(if self.buffered >= self.capacity { Readiness::Full } else { Readiness::Ready })
        }

        fn finish(&mut self) -> Result<(), EnvelopeError> {
            self.finished += 1;
            Ok(())
        }
    }

    #[test]
    fn test_hello_world_in_fours() {
        let splitter = ChunkSplitter::new(&b"hello world"[..], Some(4)).unwrap();
        assert_eq!(splitter.byte_size(), 11);
        assert_eq!(splitter.chunk_count(), 3);

        let chunks: Vec<Bytes> = splitter.collect();
        assert_eq!(chunks, vec![
            Bytes::from_static(b"hell"),
            Bytes::from_static(b"o wo"),
            Bytes::from_static(b"rld"),
        ]);
        assert_eq!(chunks_to_payload(&chunks), b"hello world");
    }

    #[test]
    fn test_small_payload_is_one_chunk() {
        let mut splitter = ChunkSplitter::new(vec![7u8; 100], None).unwrap();
        assert_eq!(splitter.max_chunk_size(), DEFAULT_CHUNK_SIZE);
        assert_eq!(splitter.next_chunk().unwrap().len(), 100);
        assert!(splitter.next_chunk().is_none());
        assert!(splitter.is_exhausted());
    }

    #[test]
    fn test_empty_payload_yields_nothing() {
        let mut splitter = ChunkSplitter::new(Bytes::new(), Some(8)).unwrap();
        assert_eq!(splitter.byte_size(), 0);
        assert_eq!(splitter.chunk_count(), 0);
        assert!(splitter.next_chunk().is_none());
    }

    #[test]
    fn test_zero_max_is_rejected() {
        let err = ChunkSplitter::new(&b"abc"[..], Some(0)).unwrap_err();
        assert!(matches!(err, EnvelopeError::InvalidArgument(_)));
    }

    #[test]
    fn test_max_above_bound_is_rejected() {
        let err = ChunkSplitter::new(&b"abc"[..], Some(MAX_CHUNK_SIZE + 1)).unwrap_err();
        assert!(matches!(err, EnvelopeError::InvalidArgument(_)));

        let splitter = ChunkSplitter::new(&b"abc"[..], Some(MAX_CHUNK_SIZE)).unwrap();
        assert_eq!(splitter.max_chunk_size(), MAX_CHUNK_SIZE);
        assert_eq!(splitter.chunk_count(), 1);

        assert_eq!(resolve_max_chunk_size(None).unwrap(), DEFAULT_CHUNK_SIZE);
        assert!(resolve_max_chunk_size(Some(usize::MAX)).is_err());
    }

    #[test]
    fn test_pump_pauses_and_resumes_without_gaps() {
        let payload: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
        let mut splitter = ChunkSplitter::new(payload.clone(), Some(64)).unwrap();
        assert_eq!(splitter.chunk_count(), 16);

        let mut sink = BoundedSink::new(5);
        let mut pauses = 0;
        loop {
            match splitter.pump(&mut sink).unwrap() {
                PumpStatus::Paused => {
                    pauses += 1;
                    assert_eq!(sink.received.len() % 5, 0);
                    sink.drain();
                }
                PumpStatus::Finished => break,
                PumpStatus::Terminated => panic!("not terminated"),
            }
        }

        assert_eq!(pauses, 3);
        assert_eq!(sink.received.len(), 16);
        assert_eq!(sink.finished, 1);
        assert_eq!(chunks_to_payload(&sink.received), payload);
        assert_eq!(splitter.delivered_bytes(), 1000);

        // finish is signaled once per splitter
        assert_eq!(splitter.pump(&mut sink).unwrap(), PumpStatus::Finished);
        assert_eq!(sink.finished, 1);
    }

    #[test]
    fn test_full_on_last_chunk_finishes() {
        let mut splitter = ChunkSplitter::new(&b"abcdef"[..], Some(3)).unwrap();
        let mut sink = BoundedSink::new(2);
        assert_eq!(splitter.pump(&mut sink).unwrap(), PumpStatus::Finished);
        assert_eq!(sink.received.len(), 2);
        assert_eq!(sink.finished, 1);
    }

    #[test]
    fn test_rejected_chunk_is_offered_again() {
        struct FlakySink {
            fail_next: bool,
            received: Vec<Bytes>,
        }
        impl ChunkSink for FlakySink {
            fn write_chunk(&mut self, chunk: Bytes) -> Result<Readiness, EnvelopeError> {
                if self.fail_next {
                    self.fail_next = false;
                    return Err(EnvelopeError::UnsupportedOperation("socket closed"));
                }
                self.received.push(chunk);
                Ok(Readiness::Ready)
            }
        }

        let mut splitter = ChunkSplitter::new(&b"hello world"[..], Some(4)).unwrap();
        let mut sink = FlakySink { fail_next: true, received: Vec::new() };
        assert!(splitter.pump(&mut sink).is_err());
        assert_eq!(splitter.delivered_bytes(), 0);
        assert_eq!(splitter.pump(&mut sink).unwrap(), PumpStatus::Finished);
        assert_eq!(chunks_to_payload(&sink.received), b"hello world");
    }

    #[test]
    fn test_terminate_is_idempotent() {
        let mut splitter = ChunkSplitter::new(&b"hello world"[..], Some(4)).unwrap();
        assert_eq!(splitter.next_chunk().unwrap(), Bytes::from_static(b"hell"));
        assert!(splitter.terminate());
        assert!(!splitter.terminate());
        assert!(splitter.is_terminated());
        assert!(splitter.next_chunk().is_none());
        assert_eq!(splitter.byte_size(), 11);

        let mut sink: Vec<Bytes> = Vec::new();
        assert_eq!(splitter.pump(&mut sink).unwrap(), PumpStatus::Terminated);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_stream_view() {
        let splitter = ChunkSplitter::new(&b"hello world"[..], Some(4)).unwrap();
        let chunks: Vec<Bytes> = futures::executor::block_on(futures::StreamExt::collect(splitter));
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks_to_payload(&chunks), b"hello world");
    }

    #[test]
    fn test_size_hint_tracks_cursor() {
        let mut splitter = ChunkSplitter::new(vec![0u8; 10], Some(3)).unwrap();
        assert_eq!(splitter.len(), 4);
        splitter.next_chunk();
        assert_eq!(splitter.len(), 3);
        assert_eq!(splitter.remaining_chunks(), 3);
    }

    proptest! {
        #[test]
        fn prop_chunks_reassemble_payload(
            payload in proptest::collection::vec(any::<u8>(), 0..2048),
            max in 1usize..300,
        ) {
            let splitter = ChunkSplitter::new(payload.clone(), Some(max)).unwrap();
            prop_assert_eq!(splitter.byte_size(), payload.len());

            let chunks: Vec<Bytes> = splitter.collect();
            prop_assert!(chunks.iter().all(|c| !c.is_empty() && c.len() <= max));
            prop_assert_eq!(chunks.iter().map(Bytes::len).sum::<usize>(), payload.len());
            prop_assert_eq!(chunks_to_payload(&chunks), payload);
        }
    }
}
