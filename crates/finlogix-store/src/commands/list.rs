use std::path::Path;

use crate::StoreResult;
use crate::TransactionStore;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::ListData;
use crate::search::filter_by_title;

use super::collect_warnings;

pub fn run(query: Option<&str>) -> StoreResult<SuccessEnvelope> {
    run_with_home_override(query, None)
}

#[doc(hidden)]
pub fn run_with_home_override(
    query: Option<&str>,
    home_override: Option<&Path>,
) -> StoreResult<SuccessEnvelope> {
    let store = TransactionStore::open_with(home_override)?;
    let snapshot = store.snapshot();
    let rows = filter_by_title(snapshot, query.unwrap_or(""));

    let data = ListData {
        query: query.map(str::to_string),
        total: snapshot.len(),
        matched: rows.len(),
        rows,
        warnings: collect_warnings(&store, None),
    };

    success("list", data)
}
