use crate::state::{ElementId, NotificationId, NotificationKind};
use crate::validate::Field;

/// Everything the host needs to render the page, derived from [`AppState`].
///
/// [`AppState`]: crate::AppState
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageViewModel {
    pub nav: NavView,
    pub hero: HeroView,
    /// Absent when the document carries no contact form.
    pub form: Option<FormView>,
    pub notifications: Vec<NotificationView>,
    /// Ids of all elements (parents and stagger children) in revealed state.
    pub revealed: Vec<ElementId>,
    /// Counter display values; cards never triggered are omitted and keep
    /// their initial text.
    pub counters: Vec<CounterView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavView {
    /// True once the viewport scrolled past the navbar threshold.
    pub scrolled: bool,
    pub active_section: Option<ElementId>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HeroView {
    /// The typed-so-far subtitle prefix; `None` when the hero has none.
    pub subtitle: Option<String>,
    pub particle_offset_y: f64,
    pub pointer_shift: Option<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormView {
    pub fields: Vec<FieldView>,
    /// True exactly while a submission is pending; the submit affordance is
    /// disabled and relabelled during this window.
    pub sending: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub field: Field,
    pub value: String,
    pub error: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationView {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
    /// True during the exit transition.
    pub exiting: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterView {
    pub id: ElementId,
    /// The formatted display value, `+` suffix included when the initial
    /// text carried one.
    pub text: String,
}
