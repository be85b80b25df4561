use crate::state::{ContactData, ElementId, NotificationId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Start the (simulated) submission round trip.
    StartSubmission { data: ContactData },
    /// Reveal a stagger child after its per-index delay.
    ScheduleStagger { child: ElementId, after_ms: u64 },
    /// End a notification's display window.
    ScheduleNotificationExpiry { id: NotificationId, after_ms: u64 },
    /// Remove a notification once its exit transition has finished.
    ScheduleNotificationRemoval { id: NotificationId, after_ms: u64 },
    /// Fire the next typing tick.
    ScheduleTypingTick { after_ms: u64 },
    /// Ask the host for one animation-frame callback.
    RequestFrame,
    /// Stop visibility observation for a one-shot trigger.
    Unobserve { id: ElementId, observer: ObserverKind },
    /// Smooth-scroll the viewport to an absolute offset.
    ScrollTo { y: i64 },
}

/// Which of the two visibility observers an element belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObserverKind {
    /// Sections and card elements, revealed on first sight.
    Reveal,
    /// Stat cards, triggering the counter animation.
    Stats,
}
