use std::path::Path;

use crate::StoreResult;
use crate::TransactionStore;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::SummaryData;
use crate::totals::summarize;

use super::collect_warnings;

pub fn run() -> StoreResult<SuccessEnvelope> {
    run_with_home_override(None)
}

#[doc(hidden)]
pub fn run_with_home_override(home_override: Option<&Path>) -> StoreResult<SuccessEnvelope> {
    let store = TransactionStore::open_with(home_override)?;
    let snapshot = store.snapshot();

    let data = SummaryData {
        count: snapshot.len(),
        totals: summarize(snapshot),
        warnings: collect_warnings(&store, None),
    };

    success("summary", data)
}
