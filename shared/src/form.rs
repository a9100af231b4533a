//! # Expense Form
//!
//! State of the `add-expense` form: field values plus a two-state
//! [`FormStatus`]. Every field and the submit control are disabled while
//! the form is [`FormStatus::Submitting`]; both success and failure return
//! the form to [`FormStatus::Idle`].

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::dashboard::SubmissionError;
use crate::format::format_date;
use crate::{Category, NewExpense, Tag};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Submitting,
}

/// Input fields of the `add-expense` form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    CategoryId,
    Cost,
    Name,
    PurchaseDate,
    Tags,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::CategoryId,
        FormField::Cost,
        FormField::Name,
        FormField::PurchaseDate,
        FormField::Tags,
    ];

    /// The `name` attribute of the input element
    pub fn name(&self) -> &'static str {
        match self {
            FormField::CategoryId => "category_id",
            FormField::Cost => "cost",
            FormField::Name => "name",
            FormField::PurchaseDate => "purchase_date",
            FormField::Tags => "tags",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormFields {
    pub name: String,
    pub category_id: String,
    /// `YYYY-MM-DD`
    pub purchase_date: String,
    pub cost: String,
    /// Comma-separated tag names
    pub tags: String,
}

impl FormFields {
    /// Empty fields with the purchase date set to `today`
    pub fn with_defaults(today: NaiveDate) -> Self {
        Self {
            purchase_date: format_date(today),
            ..Self::default()
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::CategoryId => &self.category_id,
            FormField::Cost => &self.cost,
            FormField::Name => &self.name,
            FormField::PurchaseDate => &self.purchase_date,
            FormField::Tags => &self.tags,
        }
    }

    fn slot(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::CategoryId => &mut self.category_id,
            FormField::Cost => &mut self.cost,
            FormField::Name => &mut self.name,
            FormField::PurchaseDate => &mut self.purchase_date,
            FormField::Tags => &mut self.tags,
        }
    }

    /// Build the `POST /expense` payload. The raw category id is replaced by
    /// the resolved category.
    pub fn into_expense(self, category: Category) -> NewExpense {
        NewExpense {
            tags: Tag::parse_list(&self.tags),
            name: self.name,
            category,
            purchase_date: self.purchase_date,
            cost: self.cost,
        }
    }
}

/// Field snapshot taken when a submission starts
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSubmission {
    pub fields: FormFields,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseForm {
    fields: FormFields,
    status: FormStatus,
    error: Option<String>,
    focus_requests: u32,
}

impl ExpenseForm {
    /// Initialise with defaults, enabled, and request focus on the name field
    pub fn new(today: NaiveDate) -> Self {
        Self {
            fields: FormFields::with_defaults(today),
            status: FormStatus::Idle,
            error: None,
            focus_requests: 1,
        }
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// Whether every field and the submit control are disabled
    pub fn is_disabled(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Incremented whenever the name field should receive input focus
    pub fn focus_requests(&self) -> u32 {
        self.focus_requests
    }

    /// Update a field from user input. Ignored while submitting.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) -> bool {
        if self.is_disabled() {
            debug!(field = field.name(), "ignoring edit while submitting");
            return false;
        }
        *self.fields.slot(field) = value.into();
        self.error = None;
        true
    }

    /// Disable the form and snapshot its fields.
    ///
    /// Must be called before the first request of a submission is issued.
    pub fn begin_submit(&mut self) -> Result<PendingSubmission, SubmissionError> {
        if self.is_disabled() {
            warn!("submission already in flight");
            return Err(SubmissionError::AlreadySubmitting);
        }
        self.status = FormStatus::Submitting;
        self.error = None;
        info!(name = %self.fields.name, category_id = %self.fields.category_id, "submitting expense");
        Ok(PendingSubmission {
            fields: self.fields.clone(),
        })
    }

    /// Reset to defaults, re-enable and move focus to the name field
    pub fn complete_success(&mut self, today: NaiveDate) {
        self.fields = FormFields::with_defaults(today);
        self.status = FormStatus::Idle;
        self.error = None;
        self.focus_requests = self.focus_requests.wrapping_add(1);
    }

    /// Re-enable with the entered values intact and a visible error
    pub fn complete_failure(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!(error = %message, "expense submission failed");
        self.status = FormStatus::Idle;
        self.error = Some(message);
    }

    /// Apply the outcome of a submission pipeline
    pub fn finish<T>(&mut self, outcome: &Result<T, SubmissionError>, today: NaiveDate) {
        match outcome {
            Ok(_) => self.complete_success(today),
            Err(SubmissionError::AlreadySubmitting) => {}
            Err(e) => self.complete_failure(e.to_string()),
        }
    }
}
