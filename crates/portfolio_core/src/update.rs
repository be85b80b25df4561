use crate::validate::{validate, Field, ValidationResult};
use crate::{AppState, Effect, Msg, NotificationKind, ObserverKind};

const SUBMIT_SUCCESS_COPY: &str = "Message sent successfully! I'll get back to you soon.";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::DocumentReady(layout) => {
            state.apply_layout(layout);
            if state.has_typing() {
                vec![Effect::ScheduleTypingTick {
                    after_ms: state.config().typing_start_delay_ms,
                }]
            } else {
                // No subtitle in the document; the typing module stays off.
                Vec::new()
            }
        }
        Msg::FieldEdited { field, value } => {
            let had_error = state.field_error(field).is_some();
            let result = validate(field, &value);
            state.set_field(field, value);
            // Input events only clear an already-shown error; fresh errors
            // wait for blur or submit.
            if had_error {
                state.record_validation(&result);
            }
            Vec::new()
        }
        Msg::FieldBlurred { field } => {
            let result = validate(field, state.field_value(field));
            state.record_validation(&result);
            Vec::new()
        }
        Msg::SubmitClicked => {
            // Single-writer invariant on the pending flag: a second submit
            // while one is in flight is ignored outright.
            if !state.form_present() || state.submission_pending() {
                return (state, Vec::new());
            }
            let results: Vec<ValidationResult> = Field::ALL
                .iter()
                .map(|&field| validate(field, state.field_value(field)))
                .collect();
            for result in &results {
                state.record_validation(result);
            }
            if results.iter().all(ValidationResult::is_valid) {
                state.begin_submission();
                vec![Effect::StartSubmission {
                    data: state.contact_data(),
                }]
            } else {
                Vec::new()
            }
        }
        Msg::SubmissionSettled { result } => {
            if !state.submission_pending() {
                return (state, Vec::new());
            }
            state.finish_submission();
            match result {
                Ok(()) => {
                    state.reset_form();
                    push_notification(
                        &mut state,
                        SUBMIT_SUCCESS_COPY.to_owned(),
                        NotificationKind::Success,
                    )
                }
                Err(reason) => push_notification(
                    &mut state,
                    format!("Sending failed: {reason}. Please try again."),
                    NotificationKind::Error,
                ),
            }
        }
        Msg::ElementSeen { id } => match state.mark_revealed(&id) {
            Some(children) => {
                let interval = state.config().stagger_interval_ms;
                let mut effects = vec![Effect::Unobserve {
                    id,
                    observer: ObserverKind::Reveal,
                }];
                effects.extend(children.into_iter().enumerate().map(|(index, child)| {
                    Effect::ScheduleStagger {
                        child,
                        after_ms: index as u64 * interval,
                    }
                }));
                effects
            }
            None => Vec::new(),
        },
        Msg::StatCardSeen { id } => {
            // First sighting reveals the card; numeric ones also start their
            // counter.
            if state.mark_stat_revealed(&id) {
                let counting = state.trigger_counter(&id);
                let mut effects = vec![Effect::Unobserve {
                    id,
                    observer: ObserverKind::Stats,
                }];
                if counting {
                    effects.push(Effect::RequestFrame);
                }
                effects
            } else {
                Vec::new()
            }
        }
        Msg::StaggerElapsed { child } => {
            state.mark_child_revealed(&child);
            Vec::new()
        }
        Msg::NotificationExpired { id } | Msg::NotificationDismissed { id } => {
            if state.begin_notification_exit(id) {
                vec![Effect::ScheduleNotificationRemoval {
                    id,
                    after_ms: state.config().notification_exit_ms,
                }]
            } else {
                Vec::new()
            }
        }
        Msg::NotificationRemovalDue { id } => {
            state.remove_notification(id);
            Vec::new()
        }
        Msg::TypingTick => {
            if state.typing_tick() {
                vec![Effect::ScheduleTypingTick {
                    after_ms: state.config().typing_speed_ms,
                }]
            } else {
                Vec::new()
            }
        }
        Msg::FrameTick { now_ms } => {
            if state.advance_counters(now_ms) {
                vec![Effect::RequestFrame]
            } else {
                Vec::new()
            }
        }
        Msg::Scrolled { y } => {
            state.set_scroll(y);
            Vec::new()
        }
        Msg::PointerMoved {
            x,
            y,
            viewport_w,
            viewport_h,
        } => {
            state.set_pointer(x, y, viewport_w, viewport_h);
            Vec::new()
        }
        Msg::NavLinkClicked { section } => match state.section_scroll_target(&section) {
            Some(y) => vec![Effect::ScrollTo { y }],
            None => Vec::new(),
        },
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Adds a notification and schedules its lifecycle timers. When the visible
/// cap evicts the oldest instance, its removal timer is scheduled here as
/// well; the evicted instance's own expiry timer later fires into a no-op.
fn push_notification(
    state: &mut AppState,
    message: String,
    kind: NotificationKind,
) -> Vec<Effect> {
    let display_ms = state.config().notification_display_ms;
    let exit_ms = state.config().notification_exit_ms;
    let (id, evicted) = state.push_notification(message, kind);
    let mut effects = vec![Effect::ScheduleNotificationExpiry {
        id,
        after_ms: display_ms,
    }];
    if let Some(old) = evicted {
        effects.push(Effect::ScheduleNotificationRemoval {
            id: old,
            after_ms: exit_ms,
        });
    }
    effects
}
