use std::path::Path;

use crate::StoreResult;
use crate::TransactionStore;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::RemoveData;

use super::collect_warnings;

pub fn run(id: &str) -> StoreResult<SuccessEnvelope> {
    run_with_home_override(id, None)
}

#[doc(hidden)]
pub fn run_with_home_override(id: &str, home_override: Option<&Path>) -> StoreResult<SuccessEnvelope> {
    let mut store = TransactionStore::open_with(home_override)?;
    let outcome = store.remove(id)?;

    let data = RemoveData {
        id: id.to_string(),
        removed: outcome.removed,
        count: store.snapshot().len(),
        warnings: collect_warnings(&store, Some(&outcome)),
    };

    success("remove", data)
}
