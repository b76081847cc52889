use std::path::{Path, PathBuf};

use crate::contracts::types::StoreWarning;
use crate::model::Transaction;
use crate::state::{
    ensure_store_directory, load_transactions, resolve_store_home, save_transactions,
    storage_file_path,
};
use crate::{StoreError, StoreResult};

/// The three mutating commands accepted from the boundary layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(Transaction),
    Remove(String),
    Clear,
}

/// Pure state transition. Validation and persistence live in the shell;
/// this function only rewrites the sequence.
pub fn apply(state: Vec<Transaction>, command: Command) -> Vec<Transaction> {
    match command {
        Command::Add(transaction) => {
            let mut next = state;
            next.push(transaction);
            next
        }
        Command::Remove(id) => state
            .into_iter()
            .filter(|transaction| transaction.id != id)
            .collect(),
        Command::Clear => Vec::new(),
    }
}

/// Outcome of a mutating command. The in-memory sequence is always the
/// session source of truth; a failed durable write is reported here as a
/// warning instead of rolling the mutation back.
#[derive(Debug, Clone)]
pub struct MutationOutcome {
    pub removed: bool,
    pub cleared_count: usize,
    pub persist_warning: Option<StoreWarning>,
}

/// The authoritative ordered sequence of transactions plus its durable
/// mirror. Constructed explicitly at application start; loading the
/// durable file is part of construction, saving is a side effect of every
/// mutation.
#[derive(Debug)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    storage_path: PathBuf,
    load_warning: Option<StoreWarning>,
}

impl TransactionStore {
    pub fn open_default() -> StoreResult<Self> {
        Self::open_with_home_override(None)
    }

    pub fn open_at(home: &Path) -> StoreResult<Self> {
        Self::open_with_home_override(Some(home))
    }

    pub fn open_with(home_override: Option<&Path>) -> StoreResult<Self> {
        Self::open_with_home_override(home_override)
    }

    fn open_with_home_override(home_override: Option<&Path>) -> StoreResult<Self> {
        let store_home = resolve_store_home(home_override)?;
        ensure_store_directory(&store_home)?;

        let storage_path = storage_file_path(&store_home);
        let (transactions, decode_failure) = load_transactions(&storage_path)?;

        let load_warning = decode_failure.map(|detail| StoreWarning {
            code: "stale_state_discarded".to_string(),
            message: format!(
                "Saved transactions at `{}` could not be decoded and were discarded: {detail}",
                storage_path.display()
            ),
        });

        Ok(Self {
            transactions,
            storage_path,
            load_warning,
        })
    }

    pub fn storage_path(&self) -> &Path {
        &self.storage_path
    }

    /// Warning raised when the durable file existed but failed to decode
    /// during construction. The store started from an empty sequence.
    pub fn load_warning(&self) -> Option<&StoreWarning> {
        self.load_warning.as_ref()
    }

    /// Read-only view of the current sequence, in insertion order.
    pub fn snapshot(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Validates and appends one transaction, then persists the full
    /// sequence. Any invariant violation leaves the store untouched.
    pub fn add(&mut self, transaction: Transaction) -> StoreResult<MutationOutcome> {
        let issues = transaction.validate();
        if !issues.is_empty() {
            return Err(StoreError::validation_failed(issues));
        }

        if self
            .transactions
            .iter()
            .any(|existing| existing.id == transaction.id)
        {
            return Err(StoreError::duplicate_transaction_id(&transaction.id));
        }

        self.mutate(Command::Add(transaction))
    }

    /// Removes the transaction with the matching id. Unknown ids are a
    /// no-op, not an error; `removed` reports which case occurred.
    pub fn remove(&mut self, id: &str) -> StoreResult<MutationOutcome> {
        let present = self.transactions.iter().any(|existing| existing.id == id);
        if !present {
            return Ok(MutationOutcome {
                removed: false,
                cleared_count: 0,
                persist_warning: None,
            });
        }

        let mut outcome = self.mutate(Command::Remove(id.to_string()))?;
        outcome.removed = true;
        Ok(outcome)
    }

    /// Empties the sequence unconditionally. Confirmation prompts belong
    /// to the boundary layer, not here.
    pub fn clear(&mut self) -> StoreResult<MutationOutcome> {
        let prior_count = self.transactions.len();
        let mut outcome = self.mutate(Command::Clear)?;
        outcome.cleared_count = prior_count;
        Ok(outcome)
    }

    fn mutate(&mut self, command: Command) -> StoreResult<MutationOutcome> {
        let state = std::mem::take(&mut self.transactions);
        self.transactions = apply(state, command);

        let persist_warning = match save_transactions(&self.storage_path, &self.transactions) {
            Ok(()) => None,
            Err(error) if error.code == "persist_failed" => Some(StoreWarning {
                code: error.code.clone(),
                message: error.message.clone(),
            }),
            Err(error) => return Err(error),
        };

        Ok(MutationOutcome {
            removed: false,
            cleared_count: 0,
            persist_warning,
        })
    }
}
