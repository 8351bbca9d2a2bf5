use crate::blockchain::indexer::BlockIndexer;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

/// Handle to a running polling loop.
pub struct PollingHandle {
    shutdown: CancellationToken,
    task: JoinHandle<()>,
}

impl PollingHandle {
    /// Token that stops the loop when cancelled.
    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Signal the loop to stop and wait for it to exit.
    ///
    /// A remote call already in flight is allowed to finish first.
    pub async fn stop(self) {
        self.shutdown.cancel();
        if let Err(e) = self.task.await {
            error!("Polling task ended abnormally: {}", e);
        }
    }
}

pub fn start_polling(indexer: Arc<BlockIndexer>, poll_interval: Duration) -> PollingHandle {
    let shutdown = CancellationToken::new();
    let task = tokio::spawn(run_polling(indexer, poll_interval, shutdown.clone()));
    PollingHandle { shutdown, task }
}

/// Run polling cycles every `poll_interval` until `shutdown` is cancelled.
///
/// A failed cycle is logged and the loop carries on with the next tick.
pub async fn run_polling(
    indexer: Arc<BlockIndexer>,
    poll_interval: Duration,
    shutdown: CancellationToken,
) {
    info!("Starting blockchain polling every {:?}", poll_interval);

    let mut ticker = interval(poll_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            _ = shutdown.cancelled() => {
                info!("Shutting down blockchain polling service");
                break;
            }
            _ = ticker.tick() => {
                match indexer.poll_cycle(&shutdown).await {
                    Ok(outcome) => debug!(
                        "Polling cycle done: height {}, indexed through {}",
                        outcome.height, outcome.current_block
                    ),
                    Err(e) => error!("Polling cycle failed: {}", e),
                }
            }
        }
    }
}
