use crate::blockchain::client::{ChainClient, ClientError};
use crate::blockchain::index::IndexState;
use crate::blockchain::polling::{start_polling, PollingHandle};
use crate::models::Transaction;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// The read/write surface the HTTP layer is built on.
pub trait Indexer: Send + Sync {
    /// Highest block fully indexed so far, 0 before the first block.
    fn current_block(&self) -> u64;

    /// Start tracking an address. Returns `false` if it was already tracked.
    fn subscribe(&self, address: &str) -> bool;

    /// Transactions recorded for an address, oldest first.
    fn transactions(&self, address: &str) -> Vec<Transaction>;
}

#[derive(Error, Debug)]
pub enum PollError {
    #[error("Failed to fetch current height: {0}")]
    Height(#[source] ClientError),

    #[error("Failed to fetch block {number}: {source}")]
    Block {
        number: u64,
        #[source]
        source: ClientError,
    },
}

/// Result of a polling cycle that reached the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollOutcome {
    pub height: u64,
    pub current_block: u64,
}

/// Polls a chain client block by block and indexes transactions touching
/// subscribed addresses.
pub struct BlockIndexer {
    client: Arc<dyn ChainClient>,
    state: Mutex<IndexState>,
    // Serializes cycles so a manual poll never races the background loop.
    cycle: tokio::sync::Mutex<()>,
}

impl BlockIndexer {
    pub fn new(client: Arc<dyn ChainClient>) -> Self {
        Self {
            client,
            state: Mutex::new(IndexState::new()),
            cycle: tokio::sync::Mutex::new(()),
        }
    }

    /// Spawn the background polling loop on the current tokio runtime.
    pub fn start(self: &Arc<Self>, poll_interval: Duration) -> PollingHandle {
        start_polling(Arc::clone(self), poll_interval)
    }

    /// Run a single polling cycle to completion.
    pub async fn poll_once(&self) -> Result<PollOutcome, PollError> {
        self.poll_cycle(&CancellationToken::new()).await
    }

    /// Catch up from the cursor to the provider's current height.
    ///
    /// The cursor moves one block at a time, in the same critical section as
    /// that block's index writes. A failed block ends the cycle with the
    /// cursor on the block before it; the next cycle starts from there. The
    /// shutdown token is checked between blocks.
    pub async fn poll_cycle(&self, shutdown: &CancellationToken) -> Result<PollOutcome, PollError> {
        let _cycle = self.cycle.lock().await;

        let height = self
            .client
            .current_height()
            .await
            .map_err(PollError::Height)?;

        let start = self.state().current_block();
        if height <= start {
            debug!("No new blocks (height {}, indexed through {})", height, start);
            return Ok(PollOutcome {
                height,
                current_block: start,
            });
        }

        debug!("Indexing blocks {}..={}", start + 1, height);

        for number in start + 1..=height {
            if shutdown.is_cancelled() {
                info!("Stop requested, leaving cursor at block {}", number - 1);
                return Ok(PollOutcome {
                    height,
                    current_block: number - 1,
                });
            }

            let transactions = self
                .client
                .block_transactions(number)
                .await
                .map_err(|source| PollError::Block { number, source })?;

            let appended = self.state().apply_block(number, &transactions);
            debug!(
                "Indexed block {}: {} transactions, {} matched",
                number,
                transactions.len(),
                appended
            );
        }

        Ok(PollOutcome {
            height,
            current_block: height,
        })
    }

    pub fn subscriber_count(&self) -> usize {
        self.state().subscriber_count()
    }

    fn state(&self) -> MutexGuard<'_, IndexState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Indexer for BlockIndexer {
    fn current_block(&self) -> u64 {
        self.state().current_block()
    }

    fn subscribe(&self, address: &str) -> bool {
        let added = self.state().subscribe(address);
        if added {
            info!("Subscribed address {}", address);
        }
        added
    }

    fn transactions(&self, address: &str) -> Vec<Transaction> {
        self.state().transactions(address)
    }
}
