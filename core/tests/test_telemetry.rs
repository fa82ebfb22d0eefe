#[cfg(test)]
mod telemetry_snapshot_tests {
    use std::time::Duration;

    use envelope_core::telemetry::{Stage, StageTimes, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};

    fn make_counters() -> TelemetryCounters {
        TelemetryCounters {
            chunks: 3,
            bytes_plaintext: 100,
            bytes_compressed: 80,
            bytes_ciphertext: 96,
            bytes_signature: 64,
        }
    }

    fn make_timer() -> TelemetryTimer {
        let mut timer = TelemetryTimer::new();
        std::thread::sleep(Duration::from_millis(20));
        timer.add_stage_time(Stage::Derive, Duration::from_millis(5));
        timer.add_stage_time(Stage::Encrypt, Duration::from_millis(10));
        timer.finish();
        timer
    }

    #[test]
    fn snapshot_copies_counters_and_ratios() {
        let snap = TelemetrySnapshot::from(&make_counters(), &make_timer());
        assert_eq!(snap.chunks, 3);
        assert_eq!(snap.bytes_overhead, 16);
        assert!((snap.compression_ratio - 0.8).abs() < f64::EPSILON);
        assert!(snap.throughput_plaintext_bytes_per_sec > 0.0);
        assert!(snap.sanity_check());
    }

    #[test]
    fn zero_plaintext_has_zero_ratio() {
        let snap = TelemetrySnapshot::from(&TelemetryCounters::default(), &make_timer());
        assert_eq!(snap.compression_ratio, 0.0);
        assert_eq!(snap.throughput_plaintext_bytes_per_sec, 0.0);
    }

    #[test]
    fn stage_times_accumulate() {
        let mut times = StageTimes::default();
        times.add(Stage::Sign, Duration::from_micros(300));
        times.add(Stage::Sign, Duration::from_micros(200));
        assert_eq!(times.get(Stage::Sign), Duration::from_micros(500));
        assert_eq!(times.get(Stage::Split), Duration::ZERO);
        assert!(times.contains(Stage::Sign));
        assert!(!times.contains(Stage::Split));
        assert!((times.get_us(Stage::Sign) - 500.0).abs() < 1e-6);
        assert_eq!(times.total(), Duration::from_micros(500));
        assert_eq!(times.iter().collect::<Vec<_>>(), vec![(&Stage::Sign, &Duration::from_micros(500))]);
    }

    #[test]
    fn has_all_stages_reports_missing() {
        let snap = TelemetrySnapshot::from(&make_counters(), &make_timer());
        assert!(snap.has_all_stages(&[Stage::Derive, Stage::Encrypt]));
        assert!(!snap.has_all_stages(&Stage::ALL));
        assert_eq!(snap.total_stage_time(), Duration::from_millis(15));
    }

    #[test]
    fn timer_time_records_closure() {
        let mut timer = TelemetryTimer::new();
        let out = timer.time(Stage::Digest, || 2 + 2);
        assert_eq!(out, 4);
        assert!(timer.stage_times.contains(Stage::Digest));
    }

    #[test]
    fn counters_merge() {
        let mut a = make_counters();
        a += make_counters();
        assert_eq!(a.chunks, 6);
        assert_eq!(a.bytes_ciphertext, 192);
        assert_eq!(a.overhead_bytes(), 32);
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let snap = TelemetrySnapshot::from(&make_counters(), &make_timer());
        let json = snap.to_json().unwrap();
        assert!(json.contains("\"bytes_plaintext\":100"));
        assert!(json.contains("Encrypt"));

        let back: TelemetrySnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.chunks, snap.chunks);
        assert_eq!(back.stage_times, snap.stage_times);
    }
}
