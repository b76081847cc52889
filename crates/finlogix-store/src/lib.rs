pub mod commands;
pub mod contracts;
pub mod error;
pub mod export;
pub mod format;
pub mod model;
pub mod search;
pub mod state;
pub mod store;
pub mod totals;

pub use contracts::envelope::{FailureEnvelope, SuccessEnvelope};
pub use error::{StoreError, StoreResult};
pub use model::{Transaction, TransactionKind};
pub use store::TransactionStore;

pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");
