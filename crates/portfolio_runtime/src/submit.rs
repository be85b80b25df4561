use std::time::Duration;

use async_trait::async_trait;
use page_logging::page_debug;

use crate::{SubmissionData, SubmitFailure};

/// The asynchronous submission seam.
///
/// The page only ever observes the settle event, so a real backend client can
/// replace the simulator without touching the submission state machine.
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, data: &SubmissionData) -> Result<(), SubmitFailure>;
}

/// Stand-in for a network round trip: waits out the configured latency and
/// always succeeds.
pub struct SimulatedSubmitter {
    latency: Duration,
}

impl SimulatedSubmitter {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl Submitter for SimulatedSubmitter {
    async fn submit(&self, data: &SubmissionData) -> Result<(), SubmitFailure> {
        page_debug!(
            "simulating submission from {} <{}>",
            data.name,
            data.email
        );
        tokio::time::sleep(self.latency).await;
        Ok(())
    }
}
