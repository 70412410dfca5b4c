#![no_main]

use libfuzzer_sys::fuzz_target;
use topnkit::ds::TopNSelector;

// Fuzz arbitrary operation sequences on TopNSelector
//
// Tests random sequences of offer, peek_min, would_accept, drain_sorted and
// clear, checking the size bound and heap property after every step.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let capacity = usize::from(data[0] % 32) + 1;
    let mut top: TopNSelector<u8, u8> = match TopNSelector::new(capacity) {
        Ok(top) => top,
        Err(_) => return,
    };

    let mut idx = 1;
    while idx + 2 < data.len() {
        let op = data[idx] % 6;
        let key = data[idx + 1];
        let score = data[idx + 2];

        match op {
            0 | 1 | 2 => {
                // offer
                let old_len = top.len();
                let predicted = top.would_accept(&key, &score);
                let accepted = top.offer(key, score);
                assert_eq!(accepted, predicted);

                if accepted && old_len < capacity {
                    assert_eq!(top.len(), old_len + 1);
                } else {
                    assert_eq!(top.len(), old_len);
                }
            }
            3 => {
                // peek_min
                if let Some(min) = top.peek_min() {
                    for entry in top.iter() {
                        assert!(entry >= min);
                    }
                } else {
                    assert!(top.is_empty());
                }
            }
            4 => {
                // drain_sorted
                let old_len = top.len();
                let drained = top.drain_sorted();
                assert_eq!(drained.len(), old_len);
                assert!(drained.windows(2).all(|w| w[0] >= w[1]));
                assert!(top.is_empty());
            }
            5 => {
                // clear
                top.clear();
                assert!(top.is_empty());
                assert_eq!(top.capacity(), capacity);
            }
            _ => unreachable!(),
        }

        assert!(top.len() <= top.capacity());
        assert!(top.check_invariants().is_ok());
        idx += 3;
    }
});
