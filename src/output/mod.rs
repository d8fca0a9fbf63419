//! Terminal output formatting
//!
//! Rendering of feedback, banners and summaries, with or without color.

pub mod display;
pub mod formatters;

pub use display::{
    print_feedback, print_intro, print_score_result, print_session_summary, print_win,
};
