//! Typed-text hero effect
//!
//! - `engine`: the pure typing/erasing state machine
//! - `driver`: runs the engine against a text surface and a scheduler

pub mod engine;
pub mod driver;

pub use engine::{prefix, PhraseSet, Step, Typewriter, TypingCursor, TypingTiming};
pub use driver::{launch, start, Scheduler, TextSurface};
