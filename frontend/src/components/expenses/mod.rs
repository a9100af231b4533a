pub mod expenses_table;
pub mod statistics_panel;

pub use expenses_table::ExpensesTable;
pub use statistics_panel::StatisticsPanel;
