// Typed-text effect driven against a virtual clock

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use portfolio_wasm::typing::{launch, start, Scheduler, TextSurface};
use portfolio_wasm::{SiteError, Typewriter, TypingCursor, TypingTiming};

/// Scheduler that only advances when the test says so
#[derive(Default)]
struct VirtualClock {
    now: Cell<u64>,
    pending: RefCell<Vec<(u64, Box<dyn FnOnce()>)>>,
    max_pending: Cell<usize>,
}

#[derive(Clone, Default)]
struct ClockHandle(Rc<VirtualClock>);

impl Scheduler for ClockHandle {
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) {
        let due = self.0.now.get() + delay_ms as u64;
        let mut pending = self.0.pending.borrow_mut();
        pending.push((due, callback));
        self.0.max_pending.set(self.0.max_pending.get().max(pending.len()));
    }
}

impl ClockHandle {
    /// Fire every callback due at or before `until`, in due order
    fn run_until(&self, until: u64) {
        loop {
            let next = {
                let mut pending = self.0.pending.borrow_mut();
                let idx = pending
                    .iter()
                    .enumerate()
                    .filter(|(_, (due, _))| *due <= until)
                    .min_by_key(|(_, (due, _))| *due)
                    .map(|(i, _)| i);
                idx.map(|i| pending.remove(i))
            };
            match next {
                Some((due, callback)) => {
                    self.0.now.set(due);
                    callback();
                }
                None => break,
            }
        }
        self.0.now.set(until);
    }

    fn pending(&self) -> usize {
        self.0.pending.borrow().len()
    }
}

/// Records every write with the virtual time it happened at
#[derive(Clone)]
struct TimedSurface {
    clock: ClockHandle,
    writes: Rc<RefCell<Vec<(u64, String)>>>,
}

impl TextSurface for TimedSurface {
    fn write(&mut self, text: &str) {
        let now = self.clock.0.now.get();
        self.writes.borrow_mut().push((now, text.to_string()));
    }
}

fn harness() -> (ClockHandle, TimedSurface) {
    let clock = ClockHandle::default();
    let surface = TimedSurface {
        clock: clock.clone(),
        writes: Rc::new(RefCell::new(Vec::new())),
    };
    (clock, surface)
}

#[test]
fn test_single_phrase_timeline() {
    let (clock, surface) = harness();
    let engine = Typewriter::from_phrases(["ab"], TypingTiming::new(10, 5, 100)).unwrap();
    start(engine, surface.clone(), clock.clone());

    clock.run_until(145);

    let writes = surface.writes.borrow().clone();
    let expected: Vec<(u64, String)> = [
        (10, "a"),
        (20, "ab"),
        (120, "a"),
        (125, ""),
        (135, "a"),
        (145, "ab"),
    ]
    .into_iter()
    .map(|(t, s)| (t, s.to_string()))
    .collect();
    assert_eq!(writes, expected);
}

#[test]
fn test_never_more_than_one_pending_step() {
    let (clock, surface) = harness();
    let engine = Typewriter::from_phrases(["hello", "world"], TypingTiming::new(7, 3, 50)).unwrap();
    start(engine, surface.clone(), clock.clone());

    clock.run_until(5_000);

    assert_eq!(clock.0.max_pending.get(), 1);
    assert_eq!(clock.pending(), 1);
    assert!(surface.writes.borrow().len() > 50);
}

#[test]
fn test_empty_phrase_set_never_schedules() {
    let (clock, surface) = harness();

    let result = launch(Vec::<String>::new(), TypingTiming::new(10, 5, 100), surface.clone(), clock.clone());
    clock.run_until(10_000);

    assert_eq!(result, Err(SiteError::EmptyPhraseSet));
    assert!(surface.writes.borrow().is_empty());
    assert_eq!(clock.0.max_pending.get(), 0);
}

#[test]
fn test_two_phrases_cycle_back_to_first() {
    let (clock, surface) = harness();
    launch(["x", "yz"], TypingTiming::new(10, 5, 100), surface.clone(), clock.clone()).unwrap();

    // x@10 ""@110 y@120 yz@130 y@230 ""@235 x@245
    clock.run_until(255);

    let texts: Vec<String> = surface.writes.borrow().iter().map(|(_, s)| s.clone()).collect();
    assert_eq!(texts, vec!["x", "", "y", "yz", "y", "", "x"]);
}

#[test]
fn test_every_phrase_typed_in_order_before_wrapping() {
    let phrases = ["Rust", "WASM", "día"];
    let mut engine = Typewriter::from_phrases(phrases, TypingTiming::new(1, 1, 9)).unwrap();

    let mut completed = Vec::new();
    loop {
        let step = engine.advance();
        if step.delay_ms == 9 {
            completed.push(step.text);
        }
        if engine.cursor() == TypingCursor::default() {
            break;
        }
    }

    assert_eq!(completed, phrases);
}

#[test]
fn test_cursor_monotonic_within_each_phase() {
    let phrases = ["abc", "de", "fghij"];
    let lengths = [3usize, 2, 5];
    let mut engine = Typewriter::from_phrases(phrases, TypingTiming::new(1, 2, 3)).unwrap();

    let mut prev = engine.cursor();
    for _ in 0..200 {
        engine.advance();
        let cur = engine.cursor();

        assert!(cur.chars <= lengths[cur.phrase]);
        if prev.phrase == cur.phrase && prev.erasing == cur.erasing {
            if cur.erasing {
                assert!(cur.chars < prev.chars);
            } else {
                assert!(cur.chars > prev.chars);
            }
        }
        // Phrase only moves on at the end of an erase
        if prev.phrase != cur.phrase {
            assert!(prev.erasing);
            assert_eq!(prev.chars, 1);
            assert_eq!(cur.chars, 0);
            assert_eq!(cur.phrase, (prev.phrase + 1) % phrases.len());
        }
        prev = cur;
    }
}

#[test]
fn test_one_pause_per_phrase_cycle() {
    let phrases = ["one", "two", "three"];
    let mut engine = Typewriter::from_phrases(phrases, TypingTiming::new(10, 20, 30)).unwrap();

    let mut pauses = 0;
    let mut phrase_changes = 0;
    let mut last_phrase = engine.cursor().phrase;
    // Two full rounds over all phrases
    let total_steps: usize = phrases.iter().map(|p| p.len() * 2).sum::<usize>() * 2;
    for _ in 0..total_steps {
        let step = engine.advance();
        if step.delay_ms == 30 {
            pauses += 1;
            assert!(engine.cursor().erasing);
            assert_eq!(step.text, phrases[engine.cursor().phrase]);
        }
        if engine.cursor().phrase != last_phrase {
            phrase_changes += 1;
            last_phrase = engine.cursor().phrase;
        }
    }

    assert_eq!(pauses, 6);
    assert_eq!(phrase_changes, 6);
    assert_eq!(engine.cursor(), TypingCursor::default());
}
