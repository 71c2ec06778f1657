//! Self-rescheduling loop for the typing engine
//!
//! The driver owns a `Typewriter` and the surface it writes to. Each tick
//! performs one `advance()`, one write, and schedules exactly one further
//! tick with the delay the engine asked for. Nothing cancels the loop; when
//! the page goes away the pending callback simply never fires.

use std::cell::RefCell;
use std::rc::Rc;

use super::engine::{Typewriter, TypingTiming};
use crate::errors::SiteResult;

/// Destination for the typed text (full replacement on every write)
pub trait TextSurface {
    fn write(&mut self, text: &str);
}

/// "Call this again after N milliseconds"
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>);
}

struct Loop<T: TextSurface, S: Scheduler> {
    engine: Typewriter,
    surface: T,
    scheduler: S,
}

/// Start the animation loop. The first step runs after the engine's
/// initial delay.
pub fn start<T, S>(engine: Typewriter, surface: T, scheduler: S)
where
    T: TextSurface + 'static,
    S: Scheduler + 'static,
{
    let delay = engine.initial_delay();
    let state = Rc::new(RefCell::new(Loop {
        engine,
        surface,
        scheduler,
    }));
    schedule_tick(state, delay);
}

/// Build an engine from `phrases` and start it. With no usable phrase
/// nothing is written or scheduled and `EmptyPhraseSet` is returned.
pub fn launch<I, P, T, S>(phrases: I, timing: TypingTiming, surface: T, scheduler: S) -> SiteResult<()>
where
    I: IntoIterator<Item = P>,
    P: Into<String>,
    T: TextSurface + 'static,
    S: Scheduler + 'static,
{
    let engine = Typewriter::from_phrases(phrases, timing)?;
    start(engine, surface, scheduler);
    Ok(())
}

fn schedule_tick<T, S>(state: Rc<RefCell<Loop<T, S>>>, delay_ms: u32)
where
    T: TextSurface + 'static,
    S: Scheduler + 'static,
{
    let next = Rc::clone(&state);
    state
        .borrow()
        .scheduler
        .schedule(delay_ms, Box::new(move || tick(next)));
}

fn tick<T, S>(state: Rc<RefCell<Loop<T, S>>>)
where
    T: TextSurface + 'static,
    S: Scheduler + 'static,
{
    let delay = {
        let mut guard = state.borrow_mut();
        let Loop { engine, surface, .. } = &mut *guard;
        let step = engine.advance();
        surface.write(&step.text);
        step.delay_ms
    };
    schedule_tick(state, delay);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SiteError;

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<String>>>);

    impl TextSurface for Recorder {
        fn write(&mut self, text: &str) {
            self.0.borrow_mut().push(text.to_string());
        }
    }

    /// Queues callbacks; the test fires them by hand.
    #[derive(Clone, Default)]
    struct ManualScheduler(Rc<RefCell<Vec<(u32, Box<dyn FnOnce()>)>>>);

    impl Scheduler for ManualScheduler {
        fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) {
            self.0.borrow_mut().push((delay_ms, callback));
        }
    }

    impl ManualScheduler {
        fn fire_next(&self) -> Option<u32> {
            let (delay, cb) = {
                let mut pending = self.0.borrow_mut();
                if pending.is_empty() {
                    return None;
                }
                pending.remove(0)
            };
            cb();
            Some(delay)
        }
    }

    #[test]
    fn test_start_schedules_only_first_tick() {
        let surface = Recorder::default();
        let scheduler = ManualScheduler::default();
        let engine = Typewriter::from_phrases(["ab"], TypingTiming::new(10, 5, 100)).unwrap();

        start(engine, surface.clone(), scheduler.clone());

        assert!(surface.0.borrow().is_empty());
        assert_eq!(scheduler.0.borrow().len(), 1);
        assert_eq!(scheduler.0.borrow()[0].0, 10);
    }

    #[test]
    fn test_launch_with_no_phrases_does_nothing() {
        let surface = Recorder::default();
        let scheduler = ManualScheduler::default();

        let result = launch(Vec::<String>::new(), TypingTiming::default(), surface.clone(), scheduler.clone());

        assert_eq!(result, Err(SiteError::EmptyPhraseSet));
        assert!(surface.0.borrow().is_empty());
        assert!(scheduler.0.borrow().is_empty());
    }

    #[test]
    fn test_each_tick_writes_once_and_reschedules_once() {
        let surface = Recorder::default();
        let scheduler = ManualScheduler::default();
        let engine = Typewriter::from_phrases(["ab"], TypingTiming::new(10, 5, 100)).unwrap();
        start(engine, surface.clone(), scheduler.clone());

        let mut delays = Vec::new();
        for i in 1..=4 {
            delays.push(scheduler.fire_next().unwrap());
            assert_eq!(surface.0.borrow().len(), i);
            assert_eq!(scheduler.0.borrow().len(), 1);
        }

        assert_eq!(*surface.0.borrow(), vec!["a", "ab", "a", ""]);
        // delay that preceded each write
        assert_eq!(delays, vec![10, 10, 100, 5]);
    }
}
