//! Round and session state
//!
//! A round moves from `Guessing` to `Won`; between rounds the player makes a
//! replay decision. Session statistics accumulate across won rounds.

mod replay;
mod round;
mod stats;

pub use replay::{NO_ANSWERS, ReplayDecision, ReplayError, YES_ANSWERS};
pub use round::{Round, RoundError, RoundState, Turn};
pub use stats::SessionStats;
