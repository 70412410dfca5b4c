// ==============================================
// SELECTOR CONTRACT TESTS (integration)
// ==============================================
//
// Behaviour every consumer of TopNSelector relies on, exercised only through
// the public API.

use topnkit::ds::{Entry, TopNSelector, merge_sorted, top_n};

fn ranked<K: Copy, S: Copy>(entries: Vec<Entry<K, S>>) -> Vec<(K, S)> {
    entries.into_iter().map(Entry::into_parts).collect()
}

// ==============================================
// Construction
// ==============================================

mod construction {
    use super::*;

    #[test]
    fn zero_capacity_fails_with_config_error() {
        let err = TopNSelector::<String, f64>::new(0).unwrap_err();
        assert!(err.to_string().contains("capacity"));
    }

    #[test]
    fn fresh_selector_is_empty() {
        let top: TopNSelector<u32, f64> = TopNSelector::new(5).unwrap();
        assert_eq!(top.size(), 0);
        assert_eq!(top.capacity(), 5);
        assert!(top.peek_min().is_none());
    }
}

// ==============================================
// Offer / drain examples
// ==============================================

mod examples {
    use super::*;

    #[test]
    fn growth_then_overflow() {
        let mut top = TopNSelector::new(3).unwrap();
        let results: Vec<bool> = [("a", 1.0), ("b", 5.0), ("c", 3.0), ("d", 9.0), ("e", 2.0)]
            .into_iter()
            .map(|(k, s)| top.offer(k, s))
            .collect();

        assert_eq!(results, vec![true, true, true, true, false]);
        assert_eq!(
            ranked(top.drain_sorted()),
            vec![("d", 9.0), ("b", 5.0), ("c", 3.0)]
        );
    }

    #[test]
    fn ties_keep_greatest_keys() {
        let mut top = TopNSelector::new(2).unwrap();
        top.offer("B", 5.0);
        top.offer("C", 5.0);
        top.offer("A", 5.0);
        assert_eq!(ranked(top.drain_sorted()), vec![("C", 5.0), ("B", 5.0)]);
    }

    #[test]
    fn rejection_and_replacement_at_capacity_one() {
        let mut top = TopNSelector::new(1).unwrap();
        assert!(top.offer("X", 10.0));

        assert!(!top.offer("W", 10.0));
        assert_eq!(top.peek_min().map(|e| (*e.key(), *e.score())), Some(("X", 10.0)));

        assert!(top.offer("Z", 11.0));
        assert_eq!(ranked(top.drain_sorted()), vec![("Z", 11.0)]);
    }

    #[test]
    fn drain_is_not_restartable() {
        let mut top = TopNSelector::new(3).unwrap();
        top.extend([(1, 0.1), (2, 0.2)]);
        assert_eq!(top.drain_sorted().len(), 2);
        assert!(top.drain_sorted().is_empty());
    }

    #[test]
    fn fewer_candidates_than_capacity() {
        let best = top_n([("only", 1.0)], 10).unwrap();
        assert_eq!(ranked(best), vec![("only", 1.0)]);
    }
}

// ==============================================
// Scale
// ==============================================

mod scale {
    use super::*;

    #[test]
    fn large_stream_matches_sort() {
        let candidates: Vec<(u32, u64)> = (0..50_000u32)
            .map(|i| (i, u64::from(i).wrapping_mul(2_654_435_761) % 10_007))
            .collect();

        let mut top = TopNSelector::new(100).unwrap();
        top.extend(candidates.iter().copied());
        top.check_invariants().unwrap();

        let mut expected = candidates.clone();
        expected.sort_by(|a, b| (b.1, b.0).cmp(&(a.1, a.0)));
        expected.truncate(100);

        assert_eq!(ranked(top.drain_sorted()), expected);
    }

    #[test]
    fn sharded_workers_merge_to_global_top() {
        let candidates: Vec<(u32, u32)> = (0..10_000).map(|i| (i, (i * 31) % 997)).collect();

        let handles: Vec<_> = candidates
            .chunks(2_500)
            .map(|chunk| {
                let chunk = chunk.to_vec();
                std::thread::spawn(move || {
                    let mut top = TopNSelector::new(25).unwrap();
                    top.extend(chunk);
                    top.drain_sorted()
                })
            })
            .collect();
        let runs: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        let expected = top_n(candidates, 25).unwrap();
        assert_eq!(merge_sorted(runs, 25), expected);
    }
}
