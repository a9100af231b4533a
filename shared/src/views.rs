//! # List Views
//!
//! Snapshot models behind the `#expenses` and `#statistics` tables. Each
//! refresh replaces every row at once; row order is the backend's order.
//! A failed refresh keeps the previous rows and records the error.

use tracing::info;

use crate::format::format_cost;
use crate::gateway::{ExpenseApi, GatewayError, RequestGateway};
use crate::{ExpenseRecord, ReportingPeriod, StatisticsRow};

/// One rendered row of the expenses table
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseRow {
    pub date: String,
    pub name: String,
    pub category: String,
    pub cost: String,
    pub tags: Vec<String>,
}

impl From<&ExpenseRecord> for ExpenseRow {
    fn from(record: &ExpenseRecord) -> Self {
        Self {
            date: record.date.clone(),
            name: record.name.clone(),
            category: record.category_label().to_string(),
            cost: format_cost(record.cost),
            tags: record.tags.iter().map(|tag| tag.name.clone()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpensesView {
    pub rows: Vec<ExpenseRow>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ExpensesView {
    pub fn render_rows(records: &[ExpenseRecord]) -> Vec<ExpenseRow> {
        records.iter().map(ExpenseRow::from).collect()
    }

    /// Fetch the `limit` most recent expenses and render them
    pub async fn fetch<G: RequestGateway>(
        api: &ExpenseApi<G>,
        limit: u32,
    ) -> Result<Vec<ExpenseRow>, GatewayError> {
        let records = api.recent_expenses(limit).await?;
        info!(count = records.len(), limit, "expenses refreshed");
        Ok(Self::render_rows(&records))
    }

    /// Mark a refresh as started
    pub fn start_loading(&mut self) {
        self.loading = true;
    }

    /// Replace the rows on success; keep them and record the error otherwise
    pub fn apply(&mut self, result: Result<Vec<ExpenseRow>, GatewayError>) {
        self.loading = false;
        match result {
            Ok(rows) => {
                self.rows = rows;
                self.error = None;
            }
            Err(e) => self.error = Some(format!("Failed to load expenses: {}", e)),
        }
    }
}

/// One rendered row of the statistics table
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsLine {
    pub category: String,
    pub total: String,
    pub month: Option<String>,
}

/// Rendered statistics rows and the client-side grand total
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsTable {
    pub lines: Vec<StatisticsLine>,
    pub total: String,
}

impl StatisticsTable {
    pub fn from_rows(rows: &[StatisticsRow]) -> Self {
        let lines = rows
            .iter()
            .map(|row| StatisticsLine {
                category: row.category.name.clone(),
                total: format_cost(row.total),
                month: row.month.clone(),
            })
            .collect();
        let total = rows.iter().fold(0.0, |acc, row| acc + row.total);

        Self {
            lines,
            total: format_cost(total),
        }
    }
}

impl Default for StatisticsTable {
    fn default() -> Self {
        Self::from_rows(&[])
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatisticsView {
    pub table: StatisticsTable,
    pub period: Option<ReportingPeriod>,
    pub loading: bool,
    pub error: Option<String>,
}

impl StatisticsView {
    /// Fetch per-category totals for `period`
    pub async fn fetch<G: RequestGateway>(
        api: &ExpenseApi<G>,
        period: ReportingPeriod,
    ) -> Result<(ReportingPeriod, StatisticsTable), GatewayError> {
        let rows = api.statistics(&period).await?;
        let table = StatisticsTable::from_rows(&rows);
        info!(categories = rows.len(), total = %table.total, "statistics refreshed");
        Ok((period, table))
    }

    pub fn start_loading(&mut self) {
        self.loading = true;
    }

    pub fn apply(&mut self, result: Result<(ReportingPeriod, StatisticsTable), GatewayError>) {
        self.loading = false;
        match result {
            Ok((period, table)) => {
                self.period = Some(period);
                self.table = table;
                self.error = None;
            }
            Err(e) => self.error = Some(format!("Failed to load statistics: {}", e)),
        }
    }
}
