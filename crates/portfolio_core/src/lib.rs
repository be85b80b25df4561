//! Portfolio core: pure state machine and view-model helpers.
mod effect;
mod motion;
mod msg;
mod state;
mod update;
mod validate;
mod view_model;
mod visibility;

pub use effect::{Effect, ObserverKind};
pub use motion::{card_tilt, counter_value, parallax_offset, parse_stat_target, pointer_shift};
pub use msg::Msg;
pub use state::{
    AppState, ContactData, ElementId, NotificationId, NotificationKind, PageConfig, PageLayout,
    RevealTarget, SectionGeometry, StatCard,
};
pub use update::update;
pub use validate::{validate, Field, ValidationResult};
pub use view_model::{
    CounterView, FieldView, FormView, HeroView, NavView, NotificationView, PageViewModel,
};
pub use visibility::{visible_fraction, ObserverConfig};
