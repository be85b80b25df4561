use std::collections::BTreeMap;

use crate::validate::{Field, ValidationResult};
use crate::view_model::{
    CounterView, FieldView, FormView, HeroView, NavView, NotificationView, PageViewModel,
};
use crate::motion;

/// Identifier of an element in the host document.
pub type ElementId = String;

/// Identifier of a live notification instance.
pub type NotificationId = u64;

/// Timing and threshold knobs. Defaults match the original page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub submit_latency_ms: u64,
    pub notification_display_ms: u64,
    pub notification_exit_ms: u64,
    pub max_visible_notifications: usize,
    pub stagger_interval_ms: u64,
    pub counter_duration_ms: u64,
    pub typing_start_delay_ms: u64,
    pub typing_speed_ms: u64,
    pub reveal_threshold: f64,
    pub reveal_bottom_margin_px: i64,
    pub counter_threshold: f64,
    pub navbar_scroll_threshold: i64,
    pub active_section_bias_px: i64,
    pub smooth_scroll_offset_px: i64,
    pub parallax_factor: f64,
    pub pointer_shift_px: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            submit_latency_ms: 2000,
            notification_display_ms: 5000,
            notification_exit_ms: 300,
            max_visible_notifications: 3,
            stagger_interval_ms: 100,
            counter_duration_ms: 2000,
            typing_start_delay_ms: 1000,
            typing_speed_ms: 50,
            reveal_threshold: 0.1,
            reveal_bottom_margin_px: 50,
            counter_threshold: 0.5,
            navbar_scroll_threshold: 100,
            active_section_bias_px: 200,
            smooth_scroll_offset_px: 70,
            parallax_factor: 0.5,
            pointer_shift_px: 20.0,
        }
    }
}

/// Structure of the host document, declared once when it is ready.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageLayout {
    pub sections: Vec<SectionGeometry>,
    pub reveal_targets: Vec<RevealTarget>,
    pub stat_cards: Vec<StatCard>,
    pub hero_subtitle: Option<String>,
    pub has_contact_form: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionGeometry {
    pub id: ElementId,
    pub top: i64,
    pub height: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealTarget {
    pub id: ElementId,
    /// Children revealed sequentially after the parent, in document order.
    pub stagger_children: Vec<ElementId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub id: ElementId,
    /// The number node's initial display text, e.g. "150", "50+" or "Top 5".
    pub display_text: String,
}

/// The contact form's payload at submit time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactData {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Visual category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Notification {
    id: NotificationId,
    message: String,
    kind: NotificationKind,
    exiting: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct FormState {
    present: bool,
    values: BTreeMap<Field, String>,
    errors: BTreeMap<Field, &'static str>,
    pending: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RevealEntry {
    revealed: bool,
    stagger_children: Vec<ElementId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum CounterPhase {
    Waiting,
    Running { started_at_ms: Option<u64> },
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CounterState {
    target: u64,
    plus_suffix: bool,
    shown: u64,
    phase: CounterPhase,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct TypingState {
    full: String,
    shown_chars: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct PointerPos {
    x: i64,
    y: i64,
    viewport_w: i64,
    viewport_h: i64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    config: PageConfig,
    sections: Vec<SectionGeometry>,
    reveals: BTreeMap<ElementId, RevealEntry>,
    /// Stagger children, mapped back to their one-way revealed flag.
    children: BTreeMap<ElementId, bool>,
    /// All stat cards, mapped to their one-way revealed flag. Non-numeric
    /// cards reveal too; only numeric ones also get a counter.
    stat_cards: BTreeMap<ElementId, bool>,
    counters: BTreeMap<ElementId, CounterState>,
    notifications: Vec<Notification>,
    next_notification_id: NotificationId,
    form: FormState,
    typing: Option<TypingState>,
    scroll_y: i64,
    pointer: Option<PointerPos>,
    dirty: bool,
}

impl AppState {
    pub fn new(config: PageConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// True when the state changed since the last call; clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn apply_layout(&mut self, layout: PageLayout) {
        self.sections = layout.sections;
        for target in layout.reveal_targets {
            for child in &target.stagger_children {
                self.children.insert(child.clone(), false);
            }
            self.reveals.insert(
                target.id,
                RevealEntry {
                    revealed: false,
                    stagger_children: target.stagger_children,
                },
            );
        }
        for card in layout.stat_cards {
            self.stat_cards.insert(card.id.clone(), false);
            // Non-numeric cards ("Top 5") reveal but never animate.
            if let Some((target, plus_suffix)) = motion::parse_stat_target(&card.display_text) {
                self.counters.insert(
                    card.id,
                    CounterState {
                        target,
                        plus_suffix,
                        shown: 0,
                        phase: CounterPhase::Waiting,
                    },
                );
            }
        }
        self.typing = layout
            .hero_subtitle
            .filter(|text| !text.is_empty())
            .map(|full| TypingState {
                full,
                shown_chars: 0,
            });
        self.form.present = layout.has_contact_form;
        self.dirty = true;
    }

    pub(crate) fn has_typing(&self) -> bool {
        self.typing.is_some()
    }

    // --- contact form ---

    pub(crate) fn form_present(&self) -> bool {
        self.form.present
    }

    pub(crate) fn field_value(&self, field: Field) -> &str {
        self.form.values.get(&field).map_or("", String::as_str)
    }

    pub(crate) fn field_error(&self, field: Field) -> Option<&'static str> {
        self.form.errors.get(&field).copied()
    }

    pub(crate) fn set_field(&mut self, field: Field, value: String) {
        self.form.values.insert(field, value);
        self.dirty = true;
    }

    /// Applies a validation result to the per-field error map.
    pub(crate) fn record_validation(&mut self, result: &ValidationResult) {
        let changed = match result.error {
            Some(message) => self.form.errors.insert(result.field, message) != Some(message),
            None => self.form.errors.remove(&result.field).is_some(),
        };
        if changed {
            self.dirty = true;
        }
    }

    pub(crate) fn submission_pending(&self) -> bool {
        self.form.pending
    }

    pub(crate) fn begin_submission(&mut self) {
        self.form.pending = true;
        self.dirty = true;
    }

    pub(crate) fn finish_submission(&mut self) {
        self.form.pending = false;
        self.dirty = true;
    }

    pub(crate) fn contact_data(&self) -> ContactData {
        ContactData {
            name: self.field_value(Field::Name).to_owned(),
            email: self.field_value(Field::Email).to_owned(),
            subject: self.field_value(Field::Subject).to_owned(),
            message: self.field_value(Field::Message).to_owned(),
        }
    }

    pub(crate) fn reset_form(&mut self) {
        self.form.values.clear();
        self.form.errors.clear();
        self.dirty = true;
    }

    // --- notifications ---

    /// Adds a notification. When the visible cap is reached the oldest
    /// non-exiting instance starts its exit immediately; its id is returned so
    /// the caller can schedule the removal.
    pub(crate) fn push_notification(
        &mut self,
        message: String,
        kind: NotificationKind,
    ) -> (NotificationId, Option<NotificationId>) {
        self.next_notification_id += 1;
        let id = self.next_notification_id;

        let visible = self.notifications.iter().filter(|n| !n.exiting).count();
        let evicted = if visible >= self.config.max_visible_notifications {
            self.notifications
                .iter_mut()
                .find(|n| !n.exiting)
                .map(|oldest| {
                    oldest.exiting = true;
                    oldest.id
                })
        } else {
            None
        };

        self.notifications.push(Notification {
            id,
            message,
            kind,
            exiting: false,
        });
        self.dirty = true;
        (id, evicted)
    }

    /// Starts a notification's exit transition. Returns false when the id is
    /// unknown or the exit already started (e.g. evicted before expiry).
    pub(crate) fn begin_notification_exit(&mut self, id: NotificationId) -> bool {
        match self.notifications.iter_mut().find(|n| n.id == id) {
            Some(n) if !n.exiting => {
                n.exiting = true;
                self.dirty = true;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn remove_notification(&mut self, id: NotificationId) {
        let before = self.notifications.len();
        self.notifications.retain(|n| n.id != id);
        if self.notifications.len() != before {
            self.dirty = true;
        }
    }

    // --- reveal / stagger ---

    /// Marks a reveal target as revealed. Returns its stagger children on the
    /// first crossing, `None` when unknown or already revealed.
    pub(crate) fn mark_revealed(&mut self, id: &str) -> Option<Vec<ElementId>> {
        let entry = self.reveals.get_mut(id)?;
        if entry.revealed {
            return None;
        }
        entry.revealed = true;
        self.dirty = true;
        Some(entry.stagger_children.clone())
    }

    pub(crate) fn mark_child_revealed(&mut self, id: &str) {
        if let Some(revealed) = self.children.get_mut(id) {
            if !*revealed {
                *revealed = true;
                self.dirty = true;
            }
        }
    }

    // --- stat cards / counters ---

    /// Marks a stat card as revealed. Returns false for unknown ids and
    /// repeat sightings.
    pub(crate) fn mark_stat_revealed(&mut self, id: &str) -> bool {
        match self.stat_cards.get_mut(id) {
            Some(revealed) if !*revealed => {
                *revealed = true;
                self.dirty = true;
                true
            }
            _ => false,
        }
    }

    /// Moves a waiting counter to its running phase. Returns false for
    /// unknown ids, non-numeric cards, and repeat sightings.
    pub(crate) fn trigger_counter(&mut self, id: &str) -> bool {
        match self.counters.get_mut(id) {
            Some(counter) if counter.phase == CounterPhase::Waiting => {
                counter.phase = CounterPhase::Running {
                    started_at_ms: None,
                };
                self.dirty = true;
                true
            }
            _ => false,
        }
    }

    /// Advances all running counters to `now_ms`. Returns true while any
    /// counter still needs another frame.
    pub(crate) fn advance_counters(&mut self, now_ms: u64) -> bool {
        let duration = self.config.counter_duration_ms;
        let mut any_running = false;
        for counter in self.counters.values_mut() {
            let CounterPhase::Running { started_at_ms } = &mut counter.phase else {
                continue;
            };
            let started = *started_at_ms.get_or_insert(now_ms);
            let elapsed = now_ms.saturating_sub(started);
            let value = motion::counter_value(elapsed, duration, counter.target);
            if value != counter.shown {
                counter.shown = value;
                self.dirty = true;
            }
            if elapsed >= duration {
                counter.phase = CounterPhase::Done;
                self.dirty = true;
            } else {
                any_running = true;
            }
        }
        any_running
    }

    // --- typing ---

    /// Types one more character. Returns true while characters remain.
    pub(crate) fn typing_tick(&mut self) -> bool {
        let Some(typing) = &mut self.typing else {
            return false;
        };
        let total = typing.full.chars().count();
        if typing.shown_chars < total {
            typing.shown_chars += 1;
            self.dirty = true;
        }
        typing.shown_chars < total
    }

    // --- scroll / pointer ---

    pub(crate) fn set_scroll(&mut self, y: i64) {
        if self.scroll_y != y {
            self.scroll_y = y;
            self.dirty = true;
        }
    }

    pub(crate) fn set_pointer(&mut self, x: i64, y: i64, viewport_w: i64, viewport_h: i64) {
        self.pointer = Some(PointerPos {
            x,
            y,
            viewport_w,
            viewport_h,
        });
        self.dirty = true;
    }

    /// Smooth-scroll target for a section, offset for the fixed navbar.
    pub(crate) fn section_scroll_target(&self, id: &str) -> Option<i64> {
        self.sections
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.top - self.config.smooth_scroll_offset_px)
    }

    // --- view ---

    pub fn view(&self) -> PageViewModel {
        // The last section in document order whose top has been passed.
        let active_section = self
            .sections
            .iter()
            .rfind(|s| self.scroll_y >= s.top - self.config.active_section_bias_px)
            .map(|s| s.id.clone());

        let form = self.form.present.then(|| FormView {
            fields: Field::ALL
                .iter()
                .map(|&field| FieldView {
                    field,
                    value: self.field_value(field).to_owned(),
                    error: self.field_error(field),
                })
                .collect(),
            sending: self.form.pending,
        });

        let mut revealed: Vec<ElementId> = self
            .reveals
            .iter()
            .filter(|(_, entry)| entry.revealed)
            .map(|(id, _)| id.clone())
            .collect();
        revealed.extend(
            self.children
                .iter()
                .filter(|(_, revealed)| **revealed)
                .map(|(id, _)| id.clone()),
        );
        revealed.extend(
            self.stat_cards
                .iter()
                .filter(|(_, revealed)| **revealed)
                .map(|(id, _)| id.clone()),
        );
        revealed.sort();
        revealed.dedup();

        let counters = self
            .counters
            .iter()
            .filter(|(_, c)| c.phase != CounterPhase::Waiting)
            .map(|(id, c)| CounterView {
                id: id.clone(),
                text: if c.plus_suffix {
                    format!("{}+", c.shown)
                } else {
                    c.shown.to_string()
                },
            })
            .collect();

        PageViewModel {
            nav: NavView {
                scrolled: self.scroll_y > self.config.navbar_scroll_threshold,
                active_section,
            },
            hero: HeroView {
                subtitle: self.typing.as_ref().map(|t| {
                    t.full.chars().take(t.shown_chars).collect()
                }),
                particle_offset_y: motion::parallax_offset(
                    self.scroll_y,
                    self.config.parallax_factor,
                ),
                pointer_shift: self.pointer.map(|p| {
                    motion::pointer_shift(
                        p.x,
                        p.y,
                        p.viewport_w,
                        p.viewport_h,
                        self.config.pointer_shift_px,
                    )
                }),
            },
            form,
            notifications: self
                .notifications
                .iter()
                .map(|n| NotificationView {
                    id: n.id,
                    message: n.message.clone(),
                    kind: n.kind,
                    exiting: n.exiting,
                })
                .collect(),
            revealed,
            counters,
        }
    }
}
