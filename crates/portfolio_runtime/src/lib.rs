//! Timer and submission runtime behind the portfolio page.
//!
//! Everything the original page expressed as `setTimeout` or
//! `requestAnimationFrame` runs here, on a tokio runtime behind an mpsc
//! command/event handle. The host loop stays synchronous and polls events.
mod runtime;
mod submit;
mod types;

pub use runtime::{RuntimeCommander, RuntimeConfig, RuntimeHandle};
pub use submit::{SimulatedSubmitter, Submitter};
pub use types::{RuntimeEvent, SubmissionData, SubmitFailure, TimerKind};
