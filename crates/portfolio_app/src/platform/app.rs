use std::collections::BTreeMap;
use std::path::Path;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use page_logging::{page_debug, page_info};
use portfolio_core::{
    update, AppState, Effect, Field, Msg, ObserverConfig, ObserverKind, PageViewModel,
};

use super::config;
use super::document::Document;
use super::effects::EffectRunner;
use super::logging;
use super::page::{build_demo_page, Rect};
use super::presenter::Presenter;

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(logging::LogDestination::from_env());

    let (page_config, runtime_config) = config::load_config(Path::new("."));
    // Long enough for the submission round trip plus a toast's full lifetime.
    let shutdown_grace = Duration::from_millis(
        page_config.submit_latency_ms
            + page_config.notification_display_ms
            + page_config.notification_exit_ms
            + 500,
    );

    let demo = build_demo_page();
    let presenter = Presenter::new(demo.layout.sections.iter().map(|s| s.id.clone()).collect());

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(msg_tx.clone(), runtime_config);

    let mut host = Host::new(demo.document, 1000, &page_config, demo.reveal_rects, demo.stat_rects);
    presenter.seed_animation_delays(&mut host.document, &demo.card_order);

    let mut state = AppState::new(page_config);
    let _ = msg_tx.send(Msg::DocumentReady(demo.layout));

    let mut script = demo_script().into_iter();
    let mut last_activity = Instant::now();

    loop {
        match msg_rx.recv_timeout(Duration::from_millis(50)) {
            Ok(msg) => {
                last_activity = Instant::now();
                let (next, effects) = update(state, msg);
                state = next;
                for effect in runner.enqueue(effects) {
                    match effect {
                        Effect::Unobserve { id, observer } => host.unobserve(&id, observer),
                        Effect::ScrollTo { y } => host.scroll_to(y, &msg_tx),
                        _ => {}
                    }
                }
                if state.consume_dirty() {
                    let view = state.view();
                    presenter.render(&mut host.document, &view);
                    log_view(&view);
                }
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {
                if let Some(step) = script.next() {
                    play_step(step, &mut host, &presenter, &msg_tx);
                } else if last_activity.elapsed() > shutdown_grace {
                    break;
                }
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    let view = state.view();
    page_info!(
        "session complete: {} elements revealed, {} counters settled, stat-projects reads {:?}",
        view.revealed.len(),
        view.counters.len(),
        host.document.text("stat-projects")
    );
    Ok(())
}

fn log_view(view: &PageViewModel) {
    page_debug!(
        "render: active={:?} revealed={} toasts={} sending={}",
        view.nav.active_section,
        view.revealed.len(),
        view.notifications.len(),
        view.form.as_ref().is_some_and(|f| f.sending)
    );
}

/// The simulated browser side: document, viewport, and the two observers.
struct Host {
    document: Document,
    scroll_y: i64,
    viewport_h: i64,
    viewport_w: i64,
    reveal_observer: ObserverConfig,
    stats_observer: ObserverConfig,
    reveal_rects: BTreeMap<String, Rect>,
    stat_rects: BTreeMap<String, Rect>,
}

impl Host {
    fn new(
        document: Document,
        viewport_h: i64,
        config: &portfolio_core::PageConfig,
        reveal_rects: Vec<(String, Rect)>,
        stat_rects: Vec<(String, Rect)>,
    ) -> Self {
        Self {
            document,
            scroll_y: 0,
            viewport_h,
            viewport_w: 1600,
            reveal_observer: ObserverConfig {
                threshold: config.reveal_threshold,
                bottom_margin_px: config.reveal_bottom_margin_px,
            },
            stats_observer: ObserverConfig {
                threshold: config.counter_threshold,
                bottom_margin_px: 0,
            },
            reveal_rects: reveal_rects.into_iter().collect(),
            stat_rects: stat_rects.into_iter().collect(),
        }
    }

    fn scroll_to(&mut self, y: i64, msg_tx: &mpsc::Sender<Msg>) {
        self.scroll_y = y.max(0);
        let _ = msg_tx.send(Msg::Scrolled { y: self.scroll_y });
        self.check_observers(msg_tx);
    }

    /// Reports every element currently past its observer's threshold. The
    /// core deduplicates repeats; `unobserve` stops them at the source.
    fn check_observers(&self, msg_tx: &mpsc::Sender<Msg>) {
        for (id, rect) in &self.reveal_rects {
            if self
                .reveal_observer
                .is_crossed(self.scroll_y, self.viewport_h, rect.top, rect.height)
            {
                let _ = msg_tx.send(Msg::ElementSeen { id: id.clone() });
            }
        }
        for (id, rect) in &self.stat_rects {
            if self
                .stats_observer
                .is_crossed(self.scroll_y, self.viewport_h, rect.top, rect.height)
            {
                let _ = msg_tx.send(Msg::StatCardSeen { id: id.clone() });
            }
        }
    }

    fn unobserve(&mut self, id: &str, observer: ObserverKind) {
        match observer {
            ObserverKind::Reveal => self.reveal_rects.remove(id),
            ObserverKind::Stats => self.stat_rects.remove(id),
        };
    }
}

enum ScriptStep {
    Scroll { y: i64 },
    Pointer { x: i64, y: i64 },
    HoverCard { id: &'static str, x: f64, y: f64 },
    LeaveCard { id: &'static str },
    HoverTag { id: &'static str, entered: bool },
    Edit { field: Field, value: &'static str },
    Blur { field: Field },
    ClickNav { section: &'static str },
    Submit,
}

fn play_step(
    step: ScriptStep,
    host: &mut Host,
    presenter: &Presenter,
    msg_tx: &mpsc::Sender<Msg>,
) {
    match step {
        ScriptStep::Scroll { y } => host.scroll_to(y, msg_tx),
        ScriptStep::Pointer { x, y } => {
            let _ = msg_tx.send(Msg::PointerMoved {
                x,
                y,
                viewport_w: host.viewport_w,
                viewport_h: host.viewport_h,
            });
        }
        ScriptStep::HoverCard { id, x, y } => {
            presenter.apply_card_tilt(&mut host.document, id, 300.0, 200.0, x, y);
        }
        ScriptStep::LeaveCard { id } => presenter.clear_card_tilt(&mut host.document, id),
        ScriptStep::HoverTag { id, entered } => {
            presenter.apply_tag_hover(&mut host.document, id, entered);
        }
        ScriptStep::Edit { field, value } => {
            let _ = msg_tx.send(Msg::FieldEdited {
                field,
                value: value.to_string(),
            });
        }
        ScriptStep::Blur { field } => {
            let _ = msg_tx.send(Msg::FieldBlurred { field });
        }
        ScriptStep::ClickNav { section } => {
            let _ = msg_tx.send(Msg::NavLinkClicked {
                section: section.to_string(),
            });
        }
        ScriptStep::Submit => {
            let _ = msg_tx.send(Msg::SubmitClicked);
        }
    }
}

/// One end-to-end pass over the page: browse, hover, misfill the form, fix
/// it, and submit.
fn demo_script() -> Vec<ScriptStep> {
    vec![
        ScriptStep::Pointer { x: 1200, y: 400 },
        ScriptStep::Scroll { y: 150 },
        ScriptStep::Scroll { y: 700 },
        ScriptStep::Scroll { y: 1300 },
        ScriptStep::HoverCard {
            id: "achievement-card-1",
            x: 220.0,
            y: 60.0,
        },
        ScriptStep::LeaveCard {
            id: "achievement-card-1",
        },
        ScriptStep::HoverTag {
            id: "tech-tag-1",
            entered: true,
        },
        ScriptStep::HoverTag {
            id: "tech-tag-1",
            entered: false,
        },
        ScriptStep::Scroll { y: 2000 },
        ScriptStep::ClickNav { section: "contact" },
        ScriptStep::Edit {
            field: Field::Name,
            value: "A",
        },
        ScriptStep::Blur { field: Field::Name },
        ScriptStep::Edit {
            field: Field::Name,
            value: "Ada Lovelace",
        },
        ScriptStep::Edit {
            field: Field::Email,
            value: "ada@example.com",
        },
        ScriptStep::Edit {
            field: Field::Subject,
            value: "Engine collaboration",
        },
        ScriptStep::Edit {
            field: Field::Message,
            value: "Shall we build something reliable together?",
        },
        ScriptStep::Submit,
    ]
}
