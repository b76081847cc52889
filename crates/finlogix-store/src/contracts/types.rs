use serde::Serialize;

use crate::model::Transaction;
use crate::totals::Totals;

#[derive(Debug, Clone, Serialize)]
pub struct ValidationIssue {
    pub field: String,
    pub code: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StoreWarning {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AddData {
    pub transaction: Transaction,
    pub count: usize,
    pub warnings: Vec<StoreWarning>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RemoveData {
    pub id: String,
    pub removed: bool,
    pub count: usize,
    pub warnings: Vec<StoreWarning>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClearData {
    pub cleared_count: usize,
    pub warnings: Vec<StoreWarning>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    pub total: usize,
    pub matched: usize,
    pub rows: Vec<Transaction>,
    pub warnings: Vec<StoreWarning>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub count: usize,
    pub totals: Totals,
    pub warnings: Vec<StoreWarning>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportData {
    pub format: String,
    pub file_name: String,
    pub path: String,
    pub rows_exported: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    pub warnings: Vec<StoreWarning>,
}
