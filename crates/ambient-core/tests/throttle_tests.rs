// Host-side tests for the trailing-edge throttle.

use ambient_core::throttle::Throttle;
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn throttle_keeps_latest_value_in_window() {
    let mut t = Throttle::new(ms(60));
    assert_eq!(t.offer(ms(0), 1), ms(60));
    assert_eq!(t.offer(ms(10), 2), ms(60));
    assert_eq!(t.offer(ms(59), 3), ms(60));

    assert!(t.flush(ms(59)).is_none(), "window still open");
    assert_eq!(t.flush(ms(60)), Some((3, ms(60))));
    assert!(t.flush(ms(61)).is_none(), "nothing is queued behind the sample");
    assert!(t.deadline().is_none());
}

#[test]
fn throttle_opens_new_window_after_flush() {
    let mut t = Throttle::new(ms(100));
    t.offer(ms(0), "a");
    assert_eq!(t.flush(ms(150)), Some(("a", ms(100))));

    assert_eq!(t.offer(ms(170), "b"), ms(270));
    assert_eq!(t.deadline(), Some(ms(270)));
    assert_eq!(t.flush(ms(300)), Some(("b", ms(270))));
}

#[test]
fn throttle_accepts_one_value_per_window_for_dense_input() {
    let mut t = Throttle::new(ms(60));
    let mut accepted = Vec::new();
    // one raw event per millisecond for 600ms
    for now in 0..600u64 {
        if let Some((v, _)) = t.flush(ms(now)) {
            accepted.push(v);
        }
        t.offer(ms(now), now);
    }
    assert_eq!(accepted.len(), 9);
    // every accepted value is the last raw event before its window closed
    assert_eq!(accepted[0], 59);
    assert_eq!(accepted[1], 119);
}
