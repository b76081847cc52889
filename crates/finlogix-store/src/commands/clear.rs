use std::path::Path;

use crate::StoreResult;
use crate::TransactionStore;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::ClearData;

use super::collect_warnings;

/// Clears unconditionally. The "are you sure" step belongs to the caller;
/// by the time this runs, the decision has been made.
pub fn run() -> StoreResult<SuccessEnvelope> {
    run_with_home_override(None)
}

#[doc(hidden)]
pub fn run_with_home_override(home_override: Option<&Path>) -> StoreResult<SuccessEnvelope> {
    let mut store = TransactionStore::open_with(home_override)?;
    let outcome = store.clear()?;

    let data = ClearData {
        cleared_count: outcome.cleared_count,
        warnings: collect_warnings(&store, Some(&outcome)),
    };

    success("clear", data)
}
