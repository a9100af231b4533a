pub mod add_expense_form;

pub use add_expense_form::AddExpenseForm;
