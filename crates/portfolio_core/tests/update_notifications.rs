use std::sync::Once;

use portfolio_core::{
    update, AppState, Effect, Field, Msg, NotificationId, PageConfig, PageLayout,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(page_logging::initialize_for_tests);
}

fn state_with_form() -> AppState {
    let state = AppState::new(PageConfig::default());
    let layout = PageLayout {
        has_contact_form: true,
        ..PageLayout::default()
    };
    let (state, _effects) = update(state, Msg::DocumentReady(layout));
    state
}

/// Runs one full valid submission, returning the new toast's id.
fn submit_once(state: AppState) -> (AppState, NotificationId, Vec<Effect>) {
    let values = [
        (Field::Name, "Ada Lovelace"),
        (Field::Email, "ada@example.com"),
        (Field::Subject, "Engine collaboration"),
        (Field::Message, "I have some thoughts on your analytical engine."),
    ];
    let mut state = state;
    for (field, value) in values {
        let (next, _effects) = update(
            state,
            Msg::FieldEdited {
                field,
                value: value.to_string(),
            },
        );
        state = next;
    }
    let (state, _effects) = update(state, Msg::SubmitClicked);
    let (state, effects) = update(state, Msg::SubmissionSettled { result: Ok(()) });
    let id = state
        .view()
        .notifications
        .last()
        .expect("toast created")
        .id;
    (state, id, effects)
}

#[test]
fn expiry_starts_exit_then_removal_completes_it() {
    init_logging();
    let (state, id, effects) = submit_once(state_with_form());
    assert_eq!(
        effects,
        vec![Effect::ScheduleNotificationExpiry { id, after_ms: 5000 }]
    );

    let (state, effects) = update(state, Msg::NotificationExpired { id });
    assert_eq!(
        effects,
        vec![Effect::ScheduleNotificationRemoval { id, after_ms: 300 }]
    );
    assert!(state.view().notifications[0].exiting);

    let (state, effects) = update(state, Msg::NotificationRemovalDue { id });
    assert!(effects.is_empty());
    assert!(state.view().notifications.is_empty());
}

#[test]
fn manual_dismissal_short_circuits_to_exit() {
    init_logging();
    let (state, id, _effects) = submit_once(state_with_form());

    let (state, effects) = update(state, Msg::NotificationDismissed { id });

    assert_eq!(
        effects,
        vec![Effect::ScheduleNotificationRemoval { id, after_ms: 300 }]
    );
    assert!(state.view().notifications[0].exiting);

    // The display-window timer still fires later, into a no-op.
    let (state, effects) = update(state, Msg::NotificationExpired { id });
    assert!(effects.is_empty());
    assert!(state.view().notifications[0].exiting);
}

#[test]
fn concurrent_toasts_are_independent_until_the_cap() {
    init_logging();
    let (state, first, _effects) = submit_once(state_with_form());
    let (state, second, _effects) = submit_once(state);
    let (state, third, _effects) = submit_once(state);

    let view = state.view();
    assert_eq!(view.notifications.len(), 3);
    assert!(view.notifications.iter().all(|n| !n.exiting));
    assert_eq!(
        view.notifications.iter().map(|n| n.id).collect::<Vec<_>>(),
        vec![first, second, third]
    );
}

#[test]
fn pushing_past_the_cap_evicts_the_oldest() {
    init_logging();
    let (state, first, _effects) = submit_once(state_with_form());
    let (state, _second, _effects) = submit_once(state);
    let (state, _third, _effects) = submit_once(state);

    let (state, fourth, effects) = submit_once(state);

    // The new toast gets its expiry; the evicted one goes straight to removal.
    assert_eq!(
        effects,
        vec![
            Effect::ScheduleNotificationExpiry {
                id: fourth,
                after_ms: 5000,
            },
            Effect::ScheduleNotificationRemoval {
                id: first,
                after_ms: 300,
            },
        ]
    );
    let view = state.view();
    assert_eq!(view.notifications.len(), 4);
    assert!(view.notifications[0].exiting);

    // The evicted toast's original expiry timer is now a no-op.
    let (state, effects) = update(state, Msg::NotificationExpired { id: first });
    assert!(effects.is_empty());

    let (state, _effects) = update(state, Msg::NotificationRemovalDue { id: first });
    assert_eq!(state.view().notifications.len(), 3);
}

#[test]
fn unknown_notification_ids_are_ignored() {
    init_logging();
    let state = state_with_form();

    let (state, effects) = update(state, Msg::NotificationExpired { id: 42 });
    assert!(effects.is_empty());

    let (state, effects) = update(state, Msg::NotificationRemovalDue { id: 42 });
    assert!(effects.is_empty());
    assert!(state.view().notifications.is_empty());
}
