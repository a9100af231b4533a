use yew::prelude::*;
use shared::format::format_date;
use shared::StatisticsView;

#[derive(Properties, PartialEq)]
pub struct StatisticsPanelProps {
    pub view: StatisticsView,
    pub on_refresh: Callback<()>,
}

#[function_component(StatisticsPanel)]
pub fn statistics_panel(props: &StatisticsPanelProps) -> Html {
    let view = &props.view;

    html! {
        <section class="statistics-section">
            <div class="section-header">
                <h2>{"Spending by Category"}</h2>
                <button
                    class="btn btn-secondary refresh-btn"
                    disabled={view.loading}
                    onclick={props.on_refresh.reform(|_: MouseEvent| ())}
                >
                    {"Refresh"}
                </button>
            </div>

            {if let Some(period) = view.period.as_ref() {
                html! {
                    <p class="statistics-period">
                        {format!("{} to {}", format_date(period.start), format_date(period.end))}
                    </p>
                }
            } else { html! {} }}

            {if let Some(error) = view.error.as_ref() {
                html! { <div class="form-message error">{error}</div> }
            } else { html! {} }}

            {if view.loading && view.table.lines.is_empty() {
                html! { <div class="loading">{"Loading statistics..."}</div> }
            } else { html! {} }}

            <div class="table-container">
                <table id="statistics" class="statistics-table">
                    <thead>
                        <tr>
                            <th>{"Category"}</th>
                            <th>{"Total"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for view.table.lines.iter().map(|line| {
                            html! {
                                <tr>
                                    <td class="category" title={line.month.clone()}>{&line.category}</td>
                                    <td class="amount">{&line.total}</td>
                                </tr>
                            }
                        })}
                    </tbody>
                    <tfoot>
                        <tr>
                            <th>{"Total"}</th>
                            <th id="statistics_total" class="amount">{&view.table.total}</th>
                        </tr>
                    </tfoot>
                </table>
            </div>
        </section>
    }
}
