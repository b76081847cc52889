pub mod add;
pub mod clear;
pub mod export;
pub mod list;
pub mod remove;
pub mod summary;

use crate::TransactionStore;
use crate::contracts::types::StoreWarning;
use crate::store::MutationOutcome;

/// Collects the warnings a command should surface: a discarded stale
/// durable file from construction, then any failed persist from the
/// mutation itself.
pub(crate) fn collect_warnings(
    store: &TransactionStore,
    outcome: Option<&MutationOutcome>,
) -> Vec<StoreWarning> {
    let mut warnings = Vec::new();
    if let Some(load_warning) = store.load_warning() {
        warnings.push(load_warning.clone());
    }
    if let Some(mutation) = outcome
        && let Some(persist_warning) = &mutation.persist_warning
    {
        warnings.push(persist_warning.clone());
    }
    warnings
}
