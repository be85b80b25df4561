use std::sync::Once;

use portfolio_core::{
    update, AppState, ContactData, Effect, Field, Msg, NotificationKind, PageConfig, PageLayout,
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

fn fill_valid(mut state: AppState) -> AppState {
    let values = [
        (Field::Name, "Ada Lovelace"),
        (Field::Email, "ada@example.com"),
        (Field::Subject, "Engine collaboration"),
        (Field::Message, "I have some thoughts on your analytical engine."),
    ];
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
    state
}

fn field_error(state: &AppState, field: Field) -> Option<&'static str> {
    state
        .view()
        .form
        .expect("form present")
        .fields
        .into_iter()
        .find(|f| f.field == field)
        .expect("field present")
        .error
}

#[test]
fn blur_validates_and_input_clears_incrementally() {
    init_logging();
    let state = state_with_form();

    // Blur with a too-short name shows the error.
    let (state, _effects) = update(
        state,
        Msg::FieldEdited {
            field: Field::Name,
            value: "A".to_string(),
        },
    );
    assert_eq!(field_error(&state, Field::Name), None);
    let (state, _effects) = update(state, Msg::FieldBlurred { field: Field::Name });
    assert_eq!(
        field_error(&state, Field::Name),
        Some("Name must be at least 2 characters long")
    );

    // Typing a second character clears it without waiting for blur.
    let (state, _effects) = update(
        state,
        Msg::FieldEdited {
            field: Field::Name,
            value: "Al".to_string(),
        },
    );
    assert_eq!(field_error(&state, Field::Name), None);
}

#[test]
fn input_does_not_surface_fresh_errors() {
    init_logging();
    let state = state_with_form();

    // No error yet, so an invalid input event stays silent.
    let (state, _effects) = update(
        state,
        Msg::FieldEdited {
            field: Field::Email,
            value: "not-an-email".to_string(),
        },
    );
    assert_eq!(field_error(&state, Field::Email), None);
}

#[test]
fn submit_with_one_invalid_field_blocks_and_marks_only_that_field() {
    init_logging();
    let state = fill_valid(state_with_form());
    let (state, _effects) = update(
        state,
        Msg::FieldEdited {
            field: Field::Subject,
            value: "Hey".to_string(),
        },
    );

    let (state, effects) = update(state, Msg::SubmitClicked);

    assert!(effects.is_empty());
    let form = state.view().form.expect("form present");
    assert!(!form.sending);
    assert_eq!(
        field_error(&state, Field::Subject),
        Some("Subject must be at least 5 characters long")
    );
    for field in [Field::Name, Field::Email, Field::Message] {
        assert_eq!(field_error(&state, field), None);
    }
}

#[test]
fn valid_submit_starts_exactly_one_submission() {
    init_logging();
    let state = fill_valid(state_with_form());

    let (state, effects) = update(state, Msg::SubmitClicked);

    assert_eq!(
        effects,
        vec![Effect::StartSubmission {
            data: ContactData {
                name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                subject: "Engine collaboration".to_string(),
                message: "I have some thoughts on your analytical engine.".to_string(),
            },
        }]
    );
    assert!(state.view().form.expect("form present").sending);

    // A second click while pending is ignored outright.
    let (state, effects) = update(state, Msg::SubmitClicked);
    assert!(effects.is_empty());
    assert!(state.view().form.expect("form present").sending);
}

#[test]
fn successful_settle_resets_form_and_notifies() {
    init_logging();
    let state = fill_valid(state_with_form());
    let (state, _effects) = update(state, Msg::SubmitClicked);

    let (mut state, effects) = update(state, Msg::SubmissionSettled { result: Ok(()) });

    let view = state.view();
    let form = view.form.expect("form present");
    assert!(!form.sending);
    assert!(form.fields.iter().all(|f| f.value.is_empty()));
    assert!(form.fields.iter().all(|f| f.error.is_none()));

    assert_eq!(view.notifications.len(), 1);
    let toast = &view.notifications[0];
    assert_eq!(toast.kind, NotificationKind::Success);
    assert_eq!(
        toast.message,
        "Message sent successfully! I'll get back to you soon."
    );
    assert!(!toast.exiting);
    assert_eq!(
        effects,
        vec![Effect::ScheduleNotificationExpiry {
            id: toast.id,
            after_ms: 5000,
        }]
    );
    assert!(state.consume_dirty());
}

#[test]
fn failed_settle_keeps_values_and_surfaces_an_error() {
    init_logging();
    let state = fill_valid(state_with_form());
    let (state, _effects) = update(state, Msg::SubmitClicked);

    let (state, _effects) = update(
        state,
        Msg::SubmissionSettled {
            result: Err("submission timed out".to_string()),
        },
    );

    let view = state.view();
    let form = view.form.expect("form present");
    assert!(!form.sending);
    // The user's draft survives a failure.
    assert!(form
        .fields
        .iter()
        .any(|f| f.field == Field::Message && !f.value.is_empty()));
    assert_eq!(view.notifications.len(), 1);
    assert_eq!(view.notifications[0].kind, NotificationKind::Error);
    assert_eq!(
        view.notifications[0].message,
        "Sending failed: submission timed out. Please try again."
    );
}

#[test]
fn stray_settle_without_pending_submission_is_ignored() {
    init_logging();
    let state = state_with_form();
    let before = state.view();

    let (state, effects) = update(state, Msg::SubmissionSettled { result: Ok(()) });

    assert!(effects.is_empty());
    assert_eq!(state.view(), before);
}

#[test]
fn submit_without_form_is_a_noop() {
    init_logging();
    let state = AppState::new(PageConfig::default());
    let (state, _effects) = update(state, Msg::DocumentReady(PageLayout::default()));

    let (state, effects) = update(state, Msg::SubmitClicked);

    assert!(effects.is_empty());
    assert_eq!(state.view().form, None);
}
