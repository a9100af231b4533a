use std::rc::Rc;

use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use shared::{Dashboard, GatewayError, ReportingPeriod, StatisticsTable, StatisticsView};
use crate::services::api::ApiClient;
use crate::services::date_utils::current_date;
use crate::services::logging::Logger;

type StatisticsResult = Result<(ReportingPeriod, StatisticsTable), GatewayError>;

#[derive(Clone, PartialEq, Default)]
pub struct StatisticsState {
    pub view: StatisticsView,
}

pub enum StatisticsAction {
    Loading,
    Loaded(StatisticsResult),
}

impl Reducible for StatisticsState {
    type Action = StatisticsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            StatisticsAction::Loading => next.view.start_loading(),
            StatisticsAction::Loaded(result) => {
                if let Err(e) = &result {
                    Logger::error_with_component("statistics-list", &e.to_string());
                }
                next.view.apply(result);
            }
        }
        Rc::new(next)
    }
}

pub struct UseStatisticsResult {
    pub state: StatisticsView,
    pub actions: UseStatisticsActions,
}

#[derive(Clone)]
pub struct UseStatisticsActions {
    pub update_rows: Callback<()>,
    pub apply: Callback<StatisticsResult>,
}

#[hook]
pub fn use_statistics(dashboard: &Dashboard<ApiClient>) -> UseStatisticsResult {
    let statistics = use_reducer(StatisticsState::default);

    let update_rows = {
        let dashboard = dashboard.clone();
        let dispatcher = statistics.dispatcher();

        use_callback((), move |_: (), _| {
            let dashboard = dashboard.clone();
            let dispatcher = dispatcher.clone();

            dispatcher.dispatch(StatisticsAction::Loading);
            spawn_local(async move {
                let result = dashboard.refresh_statistics(current_date()).await;
                dispatcher.dispatch(StatisticsAction::Loaded(result));
            });
        })
    };

    let apply = {
        let dispatcher = statistics.dispatcher();
        use_callback((), move |result: StatisticsResult, _| {
            dispatcher.dispatch(StatisticsAction::Loaded(result));
        })
    };

    use_effect_with((), {
        let update_rows = update_rows.clone();
        move |_| {
            update_rows.emit(());
            || ()
        }
    });

    UseStatisticsResult {
        state: statistics.view.clone(),
        actions: UseStatisticsActions { update_rows, apply },
    }
}
