//! Display and value never diverge over long operation sequences.

use tally::controller::{CounterController, DisplaySurface, SharedText};
use tally::ui::counter::CounterIntent;

/// Surface that records every write.
#[derive(Default)]
struct RecordingSurface {
    writes: Vec<String>,
}

impl DisplaySurface for RecordingSurface {
    fn set_text(&mut self, text: &str) {
        self.writes.push(text.to_string());
    }
}

/// Deterministic intent stream (xorshift), so failures are reproducible.
fn intents(seed: u64, len: usize) -> Vec<CounterIntent> {
    let mut x = seed;
    (0..len)
        .map(|_| {
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            match x % 7 {
                0 => CounterIntent::Reset,
                1..=3 => CounterIntent::Increment,
                _ => CounterIntent::Decrement,
            }
        })
        .collect()
}

#[test]
fn display_matches_value_after_every_operation() {
    for seed in [1u64, 7, 42, 0xdead_beef] {
        let view = SharedText::new();
        let mut ctrl = CounterController::new(view.clone());
        let mut expected: i64 = 0;
        for intent in intents(seed, 500) {
            expected = match intent {
                CounterIntent::Increment => expected + 1,
                CounterIntent::Decrement => expected - 1,
                CounterIntent::Reset => 0,
            };
            let value = ctrl.dispatch(intent);
            assert_eq!(value, expected);
            assert_eq!(view.text(), expected.to_string());
        }
    }
}

#[test]
fn every_operation_writes_the_display_once() {
    let mut ctrl = CounterController::new(RecordingSurface::default());
    ctrl.increment();
    ctrl.increment();
    ctrl.decrement();
    ctrl.reset();
    ctrl.decrement();
    assert_eq!(ctrl.surface().writes, vec!["0", "1", "2", "1", "0", "-1"]);
}

#[test]
fn reset_from_negative_is_zero() {
    let view = SharedText::new();
    let mut ctrl = CounterController::new(view.clone());
    for _ in 0..4 {
        ctrl.decrement();
    }
    assert_eq!(view.text(), "-4");
    ctrl.reset();
    assert_eq!(ctrl.value(), 0);
    assert_eq!(view.text(), "0");
}
