//! # Dashboard
//!
//! Orchestrates the submission pipeline and the list refreshes:
//!
//! 1. `GET /categories` and resolve the selected category
//! 2. `POST /expense` with the resolved category
//! 3. refresh the expenses list, then the statistics list
//!
//! Each stage only starts after the previous one succeeded; the first failure
//! ends the pipeline with a [`SubmissionError`] naming the stage.

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::ClientConfig;
use crate::form::PendingSubmission;
use crate::gateway::{ExpenseApi, GatewayError, RequestGateway};
use crate::views::{ExpenseRow, ExpensesView, StatisticsTable, StatisticsView};
use crate::{Category, NewExpense, ReportingPeriod};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmissionError {
    #[error("An expense is already being saved")]
    AlreadySubmitting,
    #[error("Failed to load categories: {0}")]
    CategoryLookup(#[source] GatewayError),
    #[error("Unknown category {0:?}, please choose a category from the list")]
    UnknownCategory(String),
    #[error("Failed to save expense: {0}")]
    Create(#[source] GatewayError),
}

/// Outcome of refreshing both list views
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshedViews {
    pub expenses: Result<Vec<ExpenseRow>, GatewayError>,
    pub statistics: Result<(ReportingPeriod, StatisticsTable), GatewayError>,
}

#[derive(Clone)]
pub struct Dashboard<G> {
    api: ExpenseApi<G>,
    config: ClientConfig,
}

impl<G: RequestGateway> Dashboard<G> {
    pub fn new(gateway: G, config: ClientConfig) -> Self {
        Self {
            api: ExpenseApi::new(gateway),
            config,
        }
    }

    /// Options for the category select
    pub async fn load_categories(&self) -> Result<Vec<Category>, GatewayError> {
        self.api.categories().await
    }

    /// Look up the full category for the selected id
    pub async fn resolve_category(&self, category_id: &str) -> Result<Category, SubmissionError> {
        let categories = self
            .api
            .categories()
            .await
            .map_err(SubmissionError::CategoryLookup)?;

        categories
            .into_iter()
            .find(|category| category.id == category_id)
            .ok_or_else(|| {
                warn!(category_id, "selected category not returned by backend");
                SubmissionError::UnknownCategory(category_id.to_string())
            })
    }

    /// Resolve the category and create the expense
    pub async fn submit(&self, pending: PendingSubmission) -> Result<NewExpense, SubmissionError> {
        let category = self.resolve_category(&pending.fields.category_id).await?;
        let expense = pending.fields.into_expense(category);

        self.api
            .create_expense(&expense)
            .await
            .map_err(SubmissionError::Create)?;

        info!(name = %expense.name, category = %expense.category.name, "expense created");
        Ok(expense)
    }

    pub async fn refresh_expenses(&self) -> Result<Vec<ExpenseRow>, GatewayError> {
        ExpensesView::fetch(&self.api, self.config.expenses_limit).await
    }

    pub async fn refresh_statistics(
        &self,
        today: NaiveDate,
    ) -> Result<(ReportingPeriod, StatisticsTable), GatewayError> {
        let period = self.config.statistics_window.period(today);
        StatisticsView::fetch(&self.api, period).await
    }

    /// Refresh the expenses list, then the statistics list
    pub async fn refresh_all(&self, today: NaiveDate) -> RefreshedViews {
        let expenses = self.refresh_expenses().await;
        let statistics = self.refresh_statistics(today).await;
        RefreshedViews { expenses, statistics }
    }

    /// Full pipeline: submit, then refresh both views. Views are only
    /// refreshed when the expense was created.
    pub async fn submit_and_refresh(
        &self,
        pending: PendingSubmission,
        today: NaiveDate,
    ) -> Result<(NewExpense, RefreshedViews), SubmissionError> {
        let expense = self.submit(pending).await?;
        let refreshed = self.refresh_all(today).await;
        Ok((expense, refreshed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{ExpenseForm, FormField, FormStatus};
    use crate::test_utils::{FakeGateway, CATEGORIES_JSON, STATISTICS_JSON};
    use futures::executor::block_on;

    const EXPENSES_JSON: &str = r#"{"results": [
        {"date": "2024-03-05", "name": "Flat", "category": {"id": "2", "name": "Rent"}, "cost": 800}
    ]}"#;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    fn healthy_backend() -> FakeGateway {
        FakeGateway::new()
            .respond("GET /categories", CATEGORIES_JSON)
            .respond("POST /expense", "")
            .respond("GET /expenses/30", EXPENSES_JSON)
            .respond("GET /statistics/1709251200/1711929599", STATISTICS_JSON)
    }

    fn filled_form(category_id: &str) -> ExpenseForm {
        let mut form = ExpenseForm::new(today());
        form.set_field(FormField::Name, "Flat");
        form.set_field(FormField::CategoryId, category_id);
        form.set_field(FormField::Cost, "800");
        form
    }

    #[test]
    fn test_resolves_selected_category() {
        let gateway = healthy_backend();
        let dashboard = Dashboard::new(&gateway, ClientConfig::default());

        let category = block_on(dashboard.resolve_category("2")).unwrap();
        assert_eq!(category.name, "Rent");
    }

    #[test]
    fn test_successful_submission_runs_stages_in_order() {
        let gateway = healthy_backend();
        let dashboard = Dashboard::new(&gateway, ClientConfig::default());
        let mut form = filled_form("2");

        let pending = form.begin_submit().unwrap();
        assert!(form.is_disabled());
        assert!(gateway.requests().is_empty());

        let outcome = block_on(dashboard.submit_and_refresh(pending, today()));
        form.finish(&outcome, today());

        let (expense, refreshed) = outcome.unwrap();
        assert_eq!(expense.category.name, "Rent");
        assert_eq!(
            gateway.request_lines(),
            vec![
                "GET /categories",
                "POST /expense",
                "GET /expenses/30",
                "GET /statistics/1709251200/1711929599",
            ]
        );
        assert_eq!(refreshed.expenses.unwrap()[0].cost, "800.00");
        assert_eq!(refreshed.statistics.unwrap().1.total, "812.50");

        assert_eq!(form.status(), FormStatus::Idle);
        assert_eq!(form.fields().name, "");
        assert_eq!(form.fields().category_id, "");
        assert_eq!(form.fields().purchase_date, "2024-03-05");
    }

    #[test]
    fn test_posted_payload_carries_category_object() {
        let gateway = healthy_backend();
        let dashboard = Dashboard::new(&gateway, ClientConfig::default());
        let pending = filled_form("2").begin_submit().unwrap();

        block_on(dashboard.submit(pending)).unwrap();

        let post = gateway
            .requests()
            .into_iter()
            .find(|request| request.path == "/expense")
            .unwrap();
        let body: serde_json::Value = serde_json::from_str(post.payload.as_deref().unwrap()).unwrap();
        assert_eq!(body["category"], serde_json::json!({"id": "2", "name": "Rent"}));
        assert!(body.get("category_id").is_none());
    }

    #[test]
    fn test_unknown_category_blocks_submission() {
        let gateway = healthy_backend();
        let dashboard = Dashboard::new(&gateway, ClientConfig::default());
        let mut form = filled_form("7");
        let pending = form.begin_submit().unwrap();

        let outcome = block_on(dashboard.submit_and_refresh(pending, today()));
        form.finish(&outcome, today());

        assert_eq!(outcome.unwrap_err(), SubmissionError::UnknownCategory("7".to_string()));
        assert_eq!(gateway.request_lines(), vec!["GET /categories"]);
        assert_eq!(form.status(), FormStatus::Idle);
        assert!(form.error().unwrap().contains("Unknown category"));
    }

    #[test]
    fn test_create_failure_skips_refresh_and_reenables_form() {
        let gateway = healthy_backend().fail(
            "POST /expense",
            GatewayError::Status {
                status: 400,
                body: "invalid cost".to_string(),
            },
        );
        let dashboard = Dashboard::new(&gateway, ClientConfig::default());
        let mut form = filled_form("1");
        let pending = form.begin_submit().unwrap();

        let outcome = block_on(dashboard.submit_and_refresh(pending, today()));
        form.finish(&outcome, today());

        assert!(matches!(outcome, Err(SubmissionError::Create(_))));
        assert_eq!(gateway.request_lines(), vec!["GET /categories", "POST /expense"]);
        assert!(!form.is_disabled());
        assert_eq!(form.fields().name, "Flat");
        assert_eq!(
            form.error(),
            Some("Failed to save expense: Server responded with status 400: invalid cost")
        );
    }

    #[test]
    fn test_network_failure_during_lookup() {
        let gateway = healthy_backend().fail("GET /categories", GatewayError::Network("offline".to_string()));
        let dashboard = Dashboard::new(&gateway, ClientConfig::default());
        let pending = filled_form("1").begin_submit().unwrap();

        let outcome = block_on(dashboard.submit(pending));

        assert_eq!(
            outcome.unwrap_err(),
            SubmissionError::CategoryLookup(GatewayError::Network("offline".to_string()))
        );
        assert_eq!(gateway.request_lines(), vec!["GET /categories"]);
    }

    #[test]
    fn test_refresh_all_reports_each_view() {
        let gateway = healthy_backend().fail("GET /expenses/30", GatewayError::Network("offline".to_string()));
        let dashboard = Dashboard::new(&gateway, ClientConfig::default());

        let refreshed = block_on(dashboard.refresh_all(today()));

        assert!(refreshed.expenses.is_err());
        assert_eq!(refreshed.statistics.unwrap().1.total, "812.50");
    }

    #[test]
    fn test_configured_limit_and_window() {
        let gateway = FakeGateway::new()
            .respond("GET /expenses/10", r#"{"results": []}"#)
            .respond("GET /statistics/1707091200/1709683199", "[]");
        let config = ClientConfig {
            expenses_limit: 10,
            statistics_window: crate::StatisticsWindow::TrailingDays(30),
            ..ClientConfig::default()
        };
        let dashboard = Dashboard::new(&gateway, config);

        let refreshed = block_on(dashboard.refresh_all(today()));

        assert!(refreshed.expenses.unwrap().is_empty());
        assert!(refreshed.statistics.is_ok());
    }
}
