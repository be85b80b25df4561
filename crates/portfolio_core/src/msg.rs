use crate::state::{ElementId, NotificationId, PageLayout};
use crate::validate::Field;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Host document finished parsing; wire all modules up.
    DocumentReady(PageLayout),
    /// User edited a form field (input event).
    FieldEdited { field: Field, value: String },
    /// Focus left a form field (blur event).
    FieldBlurred { field: Field },
    /// User activated the submit affordance.
    SubmitClicked,
    /// The submission task settled.
    SubmissionSettled { result: Result<(), String> },
    /// A reveal target crossed the scroll observer's threshold.
    ElementSeen { id: ElementId },
    /// A stat card crossed the stats observer's threshold.
    StatCardSeen { id: ElementId },
    /// A stagger delay elapsed for one child of a reveal parent.
    StaggerElapsed { child: ElementId },
    /// A notification's display window ended.
    NotificationExpired { id: NotificationId },
    /// The user dismissed a notification by hand.
    NotificationDismissed { id: NotificationId },
    /// A notification's exit transition finished.
    NotificationRemovalDue { id: NotificationId },
    /// Typing cadence timer fired.
    TypingTick,
    /// Frame callback carrying a monotonic timestamp.
    FrameTick { now_ms: u64 },
    /// The viewport scrolled to a new vertical offset.
    Scrolled { y: i64 },
    /// Pointer moved over the hero region.
    PointerMoved {
        x: i64,
        y: i64,
        viewport_w: i64,
        viewport_h: i64,
    },
    /// A navigation link pointing at a section was activated.
    NavLinkClicked { section: ElementId },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
