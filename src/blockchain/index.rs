//! The indexer's shared mutable state: cursor, subscriber set and
//! per-address transaction lists.
//!
//! All three live in one struct so a single lock keeps them consistent.

use crate::models::{normalize_address, Transaction};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Default)]
pub struct IndexState {
    current_block: u64,
    subscribers: HashSet<String>,
    transactions: HashMap<String, Vec<Transaction>>,
}

impl IndexState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_block(&self) -> u64 {
        self.current_block
    }

    /// Returns `true` if the address was not yet subscribed.
    pub fn subscribe(&mut self, address: &str) -> bool {
        self.subscribers.insert(normalize_address(address))
    }

    pub fn is_subscribed(&self, address: &str) -> bool {
        self.subscribers.contains(&normalize_address(address))
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Owned copy of the transactions recorded for an address.
    pub fn transactions(&self, address: &str) -> Vec<Transaction> {
        self.transactions
            .get(&normalize_address(address))
            .cloned()
            .unwrap_or_default()
    }

    /// Index one block's transactions and move the cursor to `number`.
    ///
    /// Blocks must be applied in ascending order, each exactly once. Returns
    /// the number of entries appended.
    pub fn apply_block(&mut self, number: u64, transactions: &[Transaction]) -> usize {
        debug_assert!(number > self.current_block, "block {number} applied twice");

        let mut appended = 0;
        for tx in transactions {
            let from = normalize_address(&tx.from);
            let to = normalize_address(&tx.to);

            if self.subscribers.contains(&from) {
                self.transactions.entry(from).or_default().push(tx.clone());
                appended += 1;
            }
            if self.subscribers.contains(&to) {
                self.transactions.entry(to).or_default().push(tx.clone());
                appended += 1;
            }
        }

        self.current_block = number;
        appended
    }
}
