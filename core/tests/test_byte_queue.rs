#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use proptest::prelude::*;
    use envelope_core::{queue::ByteQueue, types::EnvelopeError};

    fn hello_queue() -> ByteQueue {
        ByteQueue::from_chunks([&b"hel"[..], &b"lo "[..], &b"world"[..]])
    }

    #[test]
    fn test_append_tracks_length() {
        let mut q = ByteQueue::new();
        assert!(q.is_empty());
        q.append(&b"abc"[..]).unwrap();
        q.append(vec![1u8, 2, 3, 4]).unwrap();
        assert_eq!(q.len(), 7);
        assert_eq!(q.chunk_count(), 2);
    }

    #[test]
    fn test_zero_length_reads_are_empty() {
        let mut q = hello_queue();
        assert!(q.peek(0).unwrap().is_empty());
        assert!(q.consume(0).unwrap().is_empty());
        assert_eq!(q.len(), 11);
    }

    #[test]
    fn test_peek_exact_head_chunk() {
        let q = hello_queue();
        assert_eq!(&q.peek(3).unwrap()[..], b"hel");
    }

    #[test]
    fn test_consume_exact_head_removes_it() {
        let mut q = hello_queue();
        assert_eq!(&q.consume(3).unwrap()[..], b"hel");
        assert_eq!(q.chunk_count(), 2);
        assert_eq!(q.len(), 8);
    }

    #[test]
    fn test_consume_prefix_keeps_suffix_as_head() {
        let mut q = hello_queue();
        assert_eq!(&q.consume(2).unwrap()[..], b"he");
        assert_eq!(q.chunk_count(), 3);
        assert_eq!(&q.peek(1).unwrap()[..], b"l");
    }

    #[test]
    fn test_reads_span_chunk_boundaries() {
        let mut q = hello_queue();
        assert_eq!(&q.peek(8).unwrap()[..], b"hello wo");
        assert_eq!(&q.consume(8).unwrap()[..], b"hello wo");
        assert_eq!(q.chunk_count(), 1);
        assert_eq!(&q.consume(3).unwrap()[..], b"rld");
        assert!(q.is_empty());
    }

    #[test]
    fn test_repeated_peek_is_stateless() {
        let q = hello_queue();
        let a = q.peek(5).unwrap();
        let b = q.peek(5).unwrap();
        let c = q.peek(7).unwrap();
        assert_eq!(a, b);
        assert_eq!(&c[..5], &a[..]);
        assert_eq!(q.len(), 11);
        assert_eq!(q.chunk_count(), 3);
    }

    #[test]
    fn test_underflow_in_every_state() {
        let mut q = hello_queue();
        assert!(matches!(q.peek(12), Err(EnvelopeError::Underflow { requested: 12, available: 11 })));
        assert!(matches!(q.consume(12), Err(EnvelopeError::Underflow { .. })));

        q.finalize().unwrap();
        assert!(matches!(q.peek(12), Err(EnvelopeError::Underflow { .. })));
        assert!(matches!(q.consume(12), Err(EnvelopeError::Underflow { .. })));
    }

    #[test]
    fn test_append_after_finalize_overflows() {
        let mut q = hello_queue();
        let payload = q.finalize().unwrap();
        assert_eq!(&payload[..], b"hello world");
        assert!(matches!(q.append(&b"x"[..]), Err(EnvelopeError::Overflow(_))));
        assert!(matches!(q.finalize(), Err(EnvelopeError::Overflow(_))));
    }

    #[test]
    fn test_consume_after_finalize_overflows() {
        let mut q = hello_queue();
        q.finalize().unwrap();
        assert!(matches!(q.consume(1), Err(EnvelopeError::Overflow(_))));
        assert!(q.consume(0).unwrap().is_empty());
        // peek stays available on a frozen queue
        assert_eq!(&q.peek(5).unwrap()[..], b"hello");
    }

    #[test]
    fn test_snapshot_requires_finalize() {
        let mut q = hello_queue();
        assert!(matches!(q.snapshot_chunks(), Err(EnvelopeError::UnsupportedOperation(_))));
        q.finalize().unwrap();
        let chunks = q.snapshot_chunks().unwrap();
        assert_eq!(chunks, vec![Bytes::from_static(b"hel"), Bytes::from_static(b"lo "), Bytes::from_static(b"world")]);
    }

    #[test]
    fn test_finalize_empty_queue() {
        let mut q = ByteQueue::new();
        assert!(q.finalize().unwrap().is_empty());
        assert!(q.snapshot_chunks().unwrap().is_empty());
    }

    proptest! {
        #[test]
        fn prop_peek_then_consume_matches_consume(
            chunks in proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..32), 0..8),
            frac in 0.0f64..=1.0,
        ) {
            let total: usize = chunks.iter().map(Vec::len).sum();
            let n = (total as f64 * frac) as usize;

            let mut a = ByteQueue::from_chunks(chunks.clone());
            let mut b = ByteQueue::from_chunks(chunks);

            let peeked = a.peek(n).unwrap();
            prop_assert_eq!(a.len(), total);
            let consumed_a = a.consume(n).unwrap();
            let consumed_b = b.consume(n).unwrap();

            prop_assert_eq!(&peeked, &consumed_a);
            prop_assert_eq!(&consumed_a, &consumed_b);
            prop_assert_eq!(a.len(), total - n);
        }
    }
}
