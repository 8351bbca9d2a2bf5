//! Shared fixtures for the crate's async tests.

mod client_tests;

use crate::blockchain::{ChainClient, ClientError};
use crate::models::Transaction;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// In-process chain with scriptable height, block contents and failures.
#[derive(Default)]
pub struct MockChain {
    inner: Mutex<MockChainState>,
}

#[derive(Default)]
struct MockChainState {
    height: u64,
    height_fails: bool,
    blocks: HashMap<u64, Vec<Transaction>>,
    failing: HashSet<u64>,
    fetched: Vec<u64>,
}

impl MockChain {
    pub fn with_height(height: u64) -> Self {
        let chain = Self::default();
        chain.set_height(height);
        chain
    }

    pub fn set_height(&self, height: u64) {
        self.inner.lock().unwrap().height = height;
    }

    pub fn set_height_fails(&self, fails: bool) {
        self.inner.lock().unwrap().height_fails = fails;
    }

    pub fn add_block(&self, number: u64, transactions: Vec<Transaction>) {
        self.inner.lock().unwrap().blocks.insert(number, transactions);
    }

    pub fn fail_block(&self, number: u64) {
        self.inner.lock().unwrap().failing.insert(number);
    }

    pub fn heal_block(&self, number: u64) {
        self.inner.lock().unwrap().failing.remove(&number);
    }

    /// Block numbers requested so far, in request order.
    pub fn fetched(&self) -> Vec<u64> {
        self.inner.lock().unwrap().fetched.clone()
    }
}

#[async_trait]
impl ChainClient for MockChain {
    async fn current_height(&self) -> Result<u64, ClientError> {
        let state = self.inner.lock().unwrap();
        if state.height_fails {
            return Err(ClientError::Format("not-a-number".to_string()));
        }
        Ok(state.height)
    }

    async fn block_transactions(&self, number: u64) -> Result<Vec<Transaction>, ClientError> {
        let mut state = self.inner.lock().unwrap();
        state.fetched.push(number);
        if state.failing.contains(&number) {
            return Err(ClientError::MissingBlock(number));
        }
        Ok(state.blocks.get(&number).cloned().unwrap_or_default())
    }
}

pub fn tx(hash: &str, from: &str, to: &str, value: &str) -> Transaction {
    Transaction::new(hash, from, to, value)
}
