use std::sync::Once;

use portfolio_core::{
    update, AppState, CounterView, Effect, Msg, ObserverKind, PageConfig, PageLayout, StatCard,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(page_logging::initialize_for_tests);
}

fn state_with_stats() -> AppState {
    let state = AppState::new(PageConfig::default());
    let layout = PageLayout {
        stat_cards: vec![
            StatCard {
                id: "stat-projects".to_string(),
                display_text: "150".to_string(),
            },
            StatCard {
                id: "stat-clients".to_string(),
                display_text: "50+".to_string(),
            },
            StatCard {
                id: "stat-rank".to_string(),
                display_text: "Top 5".to_string(),
            },
        ],
        ..PageLayout::default()
    };
    let (state, _effects) = update(state, Msg::DocumentReady(layout));
    state
}

fn counter_text(state: &AppState, id: &str) -> Option<String> {
    state
        .view()
        .counters
        .into_iter()
        .find(|c: &CounterView| c.id == id)
        .map(|c| c.text)
}

#[test]
fn numeric_card_triggers_once_and_unobserves() {
    init_logging();
    let state = state_with_stats();

    let (state, effects) = update(
        state,
        Msg::StatCardSeen {
            id: "stat-projects".to_string(),
        },
    );

    assert_eq!(
        effects,
        vec![
            Effect::Unobserve {
                id: "stat-projects".to_string(),
                observer: ObserverKind::Stats,
            },
            Effect::RequestFrame,
        ]
    );

    // Repeat sightings are inert.
    let (_state, effects) = update(
        state,
        Msg::StatCardSeen {
            id: "stat-projects".to_string(),
        },
    );
    assert!(effects.is_empty());
}

#[test]
fn seen_stat_card_joins_the_revealed_set() {
    init_logging();
    let state = state_with_stats();

    let (state, _effects) = update(
        state,
        Msg::StatCardSeen {
            id: "stat-projects".to_string(),
        },
    );
    let (state, _effects) = update(state, Msg::FrameTick { now_ms: 0 });
    let (state, _effects) = update(state, Msg::FrameTick { now_ms: 2000 });

    // The entrance animation applies alongside the counter.
    assert!(state.view().revealed.contains(&"stat-projects".to_string()));
    assert_eq!(
        counter_text(&state, "stat-projects"),
        Some("150".to_string())
    );
}

#[test]
fn non_numeric_card_reveals_without_a_counter() {
    init_logging();
    let state = state_with_stats();

    let (state, effects) = update(
        state,
        Msg::StatCardSeen {
            id: "stat-rank".to_string(),
        },
    );

    assert_eq!(
        effects,
        vec![Effect::Unobserve {
            id: "stat-rank".to_string(),
            observer: ObserverKind::Stats,
        }]
    );
    assert!(state.view().revealed.contains(&"stat-rank".to_string()));
    // The display text is never overridden.
    assert_eq!(counter_text(&state, "stat-rank"), None);

    // Repeat sightings are inert.
    let (_state, effects) = update(
        state,
        Msg::StatCardSeen {
            id: "stat-rank".to_string(),
        },
    );
    assert!(effects.is_empty());
}

#[test]
fn unknown_stat_card_is_ignored() {
    init_logging();
    let state = state_with_stats();

    let (state, effects) = update(
        state,
        Msg::StatCardSeen {
            id: "stat-missing".to_string(),
        },
    );

    assert!(effects.is_empty());
    assert!(state.view().revealed.is_empty());
}

#[test]
fn counter_animates_monotonically_to_target() {
    init_logging();
    let state = state_with_stats();
    let (state, _effects) = update(
        state,
        Msg::StatCardSeen {
            id: "stat-projects".to_string(),
        },
    );

    // First frame establishes the start timestamp; value is 0.
    let (state, effects) = update(state, Msg::FrameTick { now_ms: 10_000 });
    assert_eq!(effects, vec![Effect::RequestFrame]);
    assert_eq!(counter_text(&state, "stat-projects"), Some("0".to_string()));

    let mut state = state;
    let mut previous = 0u64;
    for now_ms in [10_250, 10_500, 11_000, 11_500, 11_999] {
        let (next, effects) = update(state, Msg::FrameTick { now_ms });
        assert_eq!(effects, vec![Effect::RequestFrame]);
        let shown: u64 = counter_text(&next, "stat-projects")
            .expect("counter running")
            .parse()
            .expect("numeric text");
        assert!(shown >= previous, "display must be non-decreasing");
        assert!(shown <= 150);
        previous = shown;
        state = next;
    }
    // The final frame lands on the target and stops requesting frames.
    let (state, effects) = update(state, Msg::FrameTick { now_ms: 12_000 });
    assert!(effects.is_empty());
    assert_eq!(
        counter_text(&state, "stat-projects"),
        Some("150".to_string())
    );
}

#[test]
fn midpoint_frame_shows_floor_of_progress_times_target() {
    init_logging();
    let state = state_with_stats();
    let (state, _effects) = update(
        state,
        Msg::StatCardSeen {
            id: "stat-projects".to_string(),
        },
    );
    let (state, _effects) = update(state, Msg::FrameTick { now_ms: 0 });

    let (state, _effects) = update(state, Msg::FrameTick { now_ms: 500 });
    // floor(0.25 * 150) = 37
    assert_eq!(counter_text(&state, "stat-projects"), Some("37".to_string()));

    let (state, _effects) = update(state, Msg::FrameTick { now_ms: 1000 });
    assert_eq!(counter_text(&state, "stat-projects"), Some("75".to_string()));
}

#[test]
fn plus_suffix_is_preserved_through_every_frame() {
    init_logging();
    let state = state_with_stats();
    let (state, _effects) = update(
        state,
        Msg::StatCardSeen {
            id: "stat-clients".to_string(),
        },
    );

    let (state, _effects) = update(state, Msg::FrameTick { now_ms: 0 });
    assert_eq!(counter_text(&state, "stat-clients"), Some("0+".to_string()));

    let (state, _effects) = update(state, Msg::FrameTick { now_ms: 1000 });
    assert_eq!(counter_text(&state, "stat-clients"), Some("25+".to_string()));

    let (state, _effects) = update(state, Msg::FrameTick { now_ms: 2000 });
    assert_eq!(counter_text(&state, "stat-clients"), Some("50+".to_string()));
}

#[test]
fn untriggered_counter_stays_out_of_the_view() {
    init_logging();
    let state = state_with_stats();

    // Until a card is seen its initial text is not overridden.
    assert_eq!(counter_text(&state, "stat-projects"), None);
    assert_eq!(counter_text(&state, "stat-clients"), None);
}
