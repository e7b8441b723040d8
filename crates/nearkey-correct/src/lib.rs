//! Proximity-aware keystroke correction engine.
//!
//! Given a sequence of noisy keyboard keystrokes and a dictionary trie, the
//! engine walks the trie depth-first deciding at every node whether the typed
//! input is consistent with that path under a bounded budget of correction
//! operations (adjacent-key substitution, one skipped letter, one excess
//! letter, one transposition, a missing space, a spurious space), and scores
//! every dictionary word reached.
//!
//! # Architecture
//!
//! - [`session`] -- The [`Correction`] traversal engine: an explicit
//!   depth-indexed frame stack and the per-step classification state machine
//! - [`params`] -- Per-query correction-position parameters
//! - [`ranking`] -- Frequency ranking of candidates and split-two-words
//!   scoring
//! - [`suggest`] -- The trie-walking driver producing ranked suggestions
//!
//! The engine holds no reference to the dictionary or the keyboard layout;
//! both are lent per call. One engine instance serves one query at a time and
//! is reset, not reallocated, between queries.

pub mod params;
pub mod ranking;
pub mod session;
pub mod suggest;

mod state;

pub use params::CorrectionParams;
pub use session::{Correction, StepOutcome};
pub use suggest::{Suggester, Suggestion, SuggestionPool};

/// Error type for engine configuration.
///
/// Mid-traversal boundary violations (driving past the declared depth bound)
/// are caller bugs, not errors, and abort via the frame-stack bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CorrectError {
    #[error("typed input of {len} characters exceeds the maximum word length {max}")]
    InputTooLong { len: usize, max: usize },
    #[error("maximum word length {max} exceeds the supported capacity {cap}")]
    CapacityExceeded { max: usize, cap: usize },
    #[error("correction position {pos} is out of range for input of length {len}")]
    PositionOutOfRange { pos: usize, len: usize },
    #[error("correction positions overlap at {pos}")]
    OverlappingPositions { pos: usize },
}
