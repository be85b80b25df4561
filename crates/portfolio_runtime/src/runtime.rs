use std::sync::{mpsc, Arc};
use std::thread;
use std::time::{Duration, Instant};

use page_logging::page_debug;

use crate::submit::{SimulatedSubmitter, Submitter};
use crate::{RuntimeEvent, SubmissionData, TimerKind};

enum RuntimeCommand {
    Submit { data: SubmissionData },
    Schedule { kind: TimerKind, delay: Duration },
    RequestFrame,
}

/// Clock configuration for the runtime.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Latency of the simulated submission round trip.
    pub submit_latency: Duration,
    /// Spacing of animation-frame callbacks.
    pub frame_interval: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            submit_latency: Duration::from_millis(2000),
            frame_interval: Duration::from_millis(16),
        }
    }
}

pub struct RuntimeHandle {
    cmd_tx: mpsc::Sender<RuntimeCommand>,
    event_rx: mpsc::Receiver<RuntimeEvent>,
}

/// Clonable command side of the runtime, for effect runners that hand the
/// event receiver to a forwarding thread.
#[derive(Clone)]
pub struct RuntimeCommander {
    cmd_tx: mpsc::Sender<RuntimeCommand>,
}

impl RuntimeCommander {
    pub fn submit(&self, data: SubmissionData) {
        let _ = self.cmd_tx.send(RuntimeCommand::Submit { data });
    }

    pub fn schedule(&self, kind: TimerKind, delay: Duration) {
        let _ = self.cmd_tx.send(RuntimeCommand::Schedule { kind, delay });
    }

    /// Requests one animation-frame callback.
    pub fn request_frame(&self) {
        let _ = self.cmd_tx.send(RuntimeCommand::RequestFrame);
    }
}

impl RuntimeHandle {
    pub fn new(config: RuntimeConfig) -> Self {
        let submitter = Arc::new(SimulatedSubmitter::new(config.submit_latency));
        Self::with_submitter(submitter, config)
    }

    /// Builds a runtime around a custom submission backend.
    pub fn with_submitter(submitter: Arc<dyn Submitter>, config: RuntimeConfig) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let started = Instant::now();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let submitter = submitter.clone();
                let event_tx = event_tx.clone();
                let frame_interval = config.frame_interval;
                runtime.spawn(async move {
                    handle_command(submitter.as_ref(), command, frame_interval, started, event_tx)
                        .await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    /// A clonable handle that can issue commands but not receive events.
    pub fn commander(&self) -> RuntimeCommander {
        RuntimeCommander {
            cmd_tx: self.cmd_tx.clone(),
        }
    }

    pub fn submit(&self, data: SubmissionData) {
        let _ = self.cmd_tx.send(RuntimeCommand::Submit { data });
    }

    pub fn schedule(&self, kind: TimerKind, delay: Duration) {
        let _ = self.cmd_tx.send(RuntimeCommand::Schedule { kind, delay });
    }

    /// Requests one animation-frame callback.
    pub fn request_frame(&self) {
        let _ = self.cmd_tx.send(RuntimeCommand::RequestFrame);
    }

    pub fn try_recv(&self) -> Option<RuntimeEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocks until the next event or the timeout elapses.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<RuntimeEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    submitter: &dyn Submitter,
    command: RuntimeCommand,
    frame_interval: Duration,
    started: Instant,
    event_tx: mpsc::Sender<RuntimeEvent>,
) {
    match command {
        RuntimeCommand::Submit { data } => {
            page_debug!("submission in flight for <{}>", data.email);
            let result = submitter.submit(&data).await;
            let _ = event_tx.send(RuntimeEvent::SubmissionSettled { result });
        }
        RuntimeCommand::Schedule { kind, delay } => {
            tokio::time::sleep(delay).await;
            let _ = event_tx.send(RuntimeEvent::TimerFired { kind });
        }
        RuntimeCommand::RequestFrame => {
            tokio::time::sleep(frame_interval).await;
            let now_ms = started.elapsed().as_millis() as u64;
            let _ = event_tx.send(RuntimeEvent::Frame { now_ms });
        }
    }
}
