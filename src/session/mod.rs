//! Session state and the submission pipeline.
//!
//! A session holds the transcript for exactly one document. The
//! pipeline runs one question/answer round-trip at a time against the
//! backend and is the only place that mutates session state during a
//! submission.

mod pipeline;
mod state;

pub use pipeline::{Rejection, SubmitOutcome, submit};
pub use state::{SessionState, Speaker, TranscriptEntry};
