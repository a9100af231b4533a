use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    /// Grand total of the statistics period, already formatted
    pub period_total: String,
    pub loading: bool,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="header">
            <div class="container">
                <h1>{"Expenses Tracker"}</h1>
                <div class="header-right">
                    <div class="balance-display">
                        <span class="balance-label">{"Spent this period:"}</span>
                        <span class="balance-amount">
                            {if props.loading {
                                "Loading...".to_string()
                            } else {
                                props.period_total.clone()
                            }}
                        </span>
                    </div>
                </div>
            </div>
        </header>
    }
}
