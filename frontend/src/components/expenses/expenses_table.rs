use yew::prelude::*;
use shared::ExpenseRow;

#[derive(Properties, PartialEq)]
pub struct ExpensesTableProps {
    pub rows: Vec<ExpenseRow>,
    pub loading: bool,
    pub error: Option<String>,
    pub on_refresh: Callback<()>,
}

#[function_component(ExpensesTable)]
pub fn expenses_table(props: &ExpensesTableProps) -> Html {
    html! {
        <section class="expenses-section">
            <div class="section-header">
                <h2>{"Recent Expenses"}</h2>
                <button
                    class="btn btn-secondary refresh-btn"
                    disabled={props.loading}
                    onclick={props.on_refresh.reform(|_: MouseEvent| ())}
                >
                    {"Refresh"}
                </button>
            </div>

            {if let Some(error) = props.error.as_ref() {
                html! { <div class="form-message error">{error}</div> }
            } else { html! {} }}

            {if props.loading && props.rows.is_empty() {
                html! { <div class="loading">{"Loading expenses..."}</div> }
            } else { html! {} }}

            <div class="table-container">
                <table id="expenses" class="expenses-table">
                    <thead>
                        <tr>
                            <th>{"Date"}</th>
                            <th>{"Name"}</th>
                            <th>{"Category"}</th>
                            <th>{"Cost"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for props.rows.iter().map(|row| {
                            let tags = (!row.tags.is_empty()).then(|| row.tags.join(", "));
                            html! {
                                <tr>
                                    <td class="date">{&row.date}</td>
                                    <td class="name" title={tags}>{&row.name}</td>
                                    <td class="category">{&row.category}</td>
                                    <td class="amount">{&row.cost}</td>
                                </tr>
                            }
                        })}
                    </tbody>
                </table>
            </div>
        </section>
    }
}
