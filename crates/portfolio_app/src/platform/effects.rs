use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use page_logging::page_info;
use portfolio_core::{ContactData, Effect, Msg};
use portfolio_runtime::{
    RuntimeCommander, RuntimeConfig, RuntimeEvent, RuntimeHandle, SubmissionData, TimerKind,
};

/// Bridges core effects to the runtime and runtime events back to messages.
pub struct EffectRunner {
    commander: RuntimeCommander,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<Msg>, config: RuntimeConfig) -> Self {
        let handle = RuntimeHandle::new(config);
        let commander = handle.commander();
        spawn_event_loop(handle, msg_tx);
        Self { commander }
    }

    /// Forwards runtime-bound effects. Host-bound effects (observer lifetime,
    /// viewport scrolling) are returned for the caller to apply.
    pub fn enqueue(&self, effects: Vec<Effect>) -> Vec<Effect> {
        let mut host_effects = Vec::new();
        for effect in effects {
            match effect {
                Effect::StartSubmission { data } => {
                    page_info!("StartSubmission from <{}>", data.email);
                    self.commander.submit(map_data(data));
                }
                Effect::ScheduleStagger { child, after_ms } => {
                    self.commander.schedule(
                        TimerKind::StaggerChild { child },
                        Duration::from_millis(after_ms),
                    );
                }
                Effect::ScheduleNotificationExpiry { id, after_ms } => {
                    self.commander.schedule(
                        TimerKind::NotificationExpiry { id },
                        Duration::from_millis(after_ms),
                    );
                }
                Effect::ScheduleNotificationRemoval { id, after_ms } => {
                    self.commander.schedule(
                        TimerKind::NotificationRemoval { id },
                        Duration::from_millis(after_ms),
                    );
                }
                Effect::ScheduleTypingTick { after_ms } => {
                    self.commander
                        .schedule(TimerKind::TypingTick, Duration::from_millis(after_ms));
                }
                Effect::RequestFrame => self.commander.request_frame(),
                other @ (Effect::Unobserve { .. } | Effect::ScrollTo { .. }) => {
                    host_effects.push(other);
                }
            }
        }
        host_effects
    }
}

fn spawn_event_loop(handle: RuntimeHandle, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || loop {
        if let Some(event) = handle.try_recv() {
            if msg_tx.send(map_event(event)).is_err() {
                break;
            }
        } else {
            thread::sleep(Duration::from_millis(5));
        }
    });
}

fn map_event(event: RuntimeEvent) -> Msg {
    match event {
        RuntimeEvent::SubmissionSettled { result } => Msg::SubmissionSettled {
            result: result.map_err(|failure| failure.to_string()),
        },
        RuntimeEvent::TimerFired { kind } => match kind {
            TimerKind::StaggerChild { child } => Msg::StaggerElapsed { child },
            TimerKind::NotificationExpiry { id } => Msg::NotificationExpired { id },
            TimerKind::NotificationRemoval { id } => Msg::NotificationRemovalDue { id },
            TimerKind::TypingTick => Msg::TypingTick,
        },
        RuntimeEvent::Frame { now_ms } => Msg::FrameTick { now_ms },
    }
}

fn map_data(data: ContactData) -> SubmissionData {
    SubmissionData {
        name: data.name,
        email: data.email,
        subject: data.subject,
        message: data.message,
    }
}
