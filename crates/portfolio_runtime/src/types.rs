use thiserror::Error;

/// Payload of one contact-form submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmissionData {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Why a submission did not go through.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitFailure {
    #[error("submission timed out")]
    Timeout,
    #[error("submission rejected: {reason}")]
    Rejected { reason: String },
}

/// One-shot timers the page schedules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerKind {
    /// Reveal one stagger child after its per-index delay.
    StaggerChild { child: String },
    /// End a notification's display window.
    NotificationExpiry { id: u64 },
    /// Remove a notification once its exit transition has finished.
    NotificationRemoval { id: u64 },
    /// Advance the hero subtitle by one character.
    TypingTick,
}

/// Events delivered back to the host loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeEvent {
    /// The submission task settled.
    SubmissionSettled { result: Result<(), SubmitFailure> },
    /// A one-shot timer elapsed.
    TimerFired { kind: TimerKind },
    /// An animation-frame callback with a monotonic timestamp.
    Frame { now_ms: u64 },
}
