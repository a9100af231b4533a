use yew::prelude::*;
use shared::{Dashboard, RefreshedViews};

mod components;
mod hooks;
mod services;

use components::expenses::{ExpensesTable, StatisticsPanel};
use components::forms::AddExpenseForm;
use components::Header;
use hooks::use_categories::use_categories;
use hooks::use_expense_form::use_expense_form;
use hooks::use_expenses::use_expenses;
use hooks::use_statistics::use_statistics;
use services::api::ApiClient;
use services::config::load_config;

#[function_component(App)]
fn app() -> Html {
    let dashboard = use_memo((), |_| {
        let config = load_config();
        Dashboard::new(ApiClient::from_config(config.clone()), config)
    });

    let categories = use_categories(&dashboard);
    let expenses = use_expenses(&dashboard);
    let statistics = use_statistics(&dashboard);

    // Both list views take the snapshots fetched right after a save
    let on_saved = {
        let apply_expenses = expenses.actions.apply.clone();
        let apply_statistics = statistics.actions.apply.clone();
        use_callback((), move |refreshed: RefreshedViews, _| {
            apply_expenses.emit(refreshed.expenses);
            apply_statistics.emit(refreshed.statistics);
        })
    };

    let expense_form = use_expense_form(&dashboard, on_saved);
    let form = &expense_form.form;

    html! {
        <>
            <Header
                period_total={statistics.state.table.total.clone()}
                loading={statistics.state.loading}
            />

            <main class="main">
                <div class="container">
                    <AddExpenseForm
                        fields={form.fields().clone()}
                        disabled={form.is_disabled()}
                        form_error={form.error().map(str::to_string)}
                        categories={categories.categories.clone()}
                        categories_loading={categories.loading}
                        categories_error={categories.error.clone()}
                        name_ref={expense_form.name_ref.clone()}
                        on_field_change={expense_form.actions.on_field_change.clone()}
                        on_submit={expense_form.actions.on_submit.clone()}
                    />

                    <ExpensesTable
                        rows={expenses.state.rows.clone()}
                        loading={expenses.state.loading}
                        error={expenses.state.error.clone()}
                        on_refresh={expenses.actions.update_rows.clone()}
                    />

                    <StatisticsPanel
                        view={statistics.state.clone()}
                        on_refresh={statistics.actions.update_rows.clone()}
                    />
                </div>
            </main>
        </>
    }
}

fn main() {
    services::logging::init(tracing::Level::INFO);
    yew::Renderer::<App>::new().render();
}
