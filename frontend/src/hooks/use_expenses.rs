use std::rc::Rc;

use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use shared::{Dashboard, ExpenseRow, ExpensesView, GatewayError};
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq, Default)]
pub struct ExpensesState {
    pub view: ExpensesView,
}

pub enum ExpensesAction {
    Loading,
    Loaded(Result<Vec<ExpenseRow>, GatewayError>),
}

impl Reducible for ExpensesState {
    type Action = ExpensesAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ExpensesAction::Loading => next.view.start_loading(),
            ExpensesAction::Loaded(result) => {
                if let Err(e) = &result {
                    Logger::error_with_component("expenses-list", &e.to_string());
                }
                next.view.apply(result);
            }
        }
        Rc::new(next)
    }
}

pub struct UseExpensesResult {
    pub state: ExpensesView,
    pub actions: UseExpensesActions,
}

#[derive(Clone)]
pub struct UseExpensesActions {
    /// Fetch the latest expenses and replace every row
    pub update_rows: Callback<()>,
    /// Replace rows with an already fetched snapshot
    pub apply: Callback<Result<Vec<ExpenseRow>, GatewayError>>,
}

#[hook]
pub fn use_expenses(dashboard: &Dashboard<ApiClient>) -> UseExpensesResult {
    let expenses = use_reducer(ExpensesState::default);

    let update_rows = {
        let dashboard = dashboard.clone();
        let dispatcher = expenses.dispatcher();

        use_callback((), move |_: (), _| {
            let dashboard = dashboard.clone();
            let dispatcher = dispatcher.clone();

            dispatcher.dispatch(ExpensesAction::Loading);
            spawn_local(async move {
                let result = dashboard.refresh_expenses().await;
                dispatcher.dispatch(ExpensesAction::Loaded(result));
            });
        })
    };

    let apply = {
        let dispatcher = expenses.dispatcher();
        use_callback((), move |result: Result<Vec<ExpenseRow>, GatewayError>, _| {
            dispatcher.dispatch(ExpensesAction::Loaded(result));
        })
    };

    // Initial fetch on page load
    use_effect_with((), {
        let update_rows = update_rows.clone();
        move |_| {
            update_rows.emit(());
            || ()
        }
    });

    UseExpensesResult {
        state: expenses.view.clone(),
        actions: UseExpensesActions { update_rows, apply },
    }
}
