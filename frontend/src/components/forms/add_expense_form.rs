use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use shared::{Category, FormField, FormFields};

#[derive(Properties, PartialEq)]
pub struct AddExpenseFormProps {
    // Form state
    pub fields: FormFields,
    pub disabled: bool,
    pub form_error: Option<String>,
    pub categories: Vec<Category>,
    pub categories_loading: bool,
    pub categories_error: Option<String>,
    pub name_ref: NodeRef,

    // Event handlers
    pub on_field_change: Callback<(FormField, String)>,
    pub on_submit: Callback<()>,
}

fn text_input_handler(on_field_change: &Callback<(FormField, String)>, field: FormField) -> Callback<InputEvent> {
    let on_field_change = on_field_change.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_field_change.emit((field, input.value()));
    })
}

#[function_component(AddExpenseForm)]
pub fn add_expense_form(props: &AddExpenseFormProps) -> Html {
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            e.stop_propagation();
            on_submit.emit(());
        })
    };

    let on_category_change = {
        let on_field_change = props.on_field_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_field_change.emit((FormField::CategoryId, select.value()));
        })
    };

    html! {
        <section class="add-expense-section">
            <h2>{"Add Expense"}</h2>

            {if let Some(error) = props.form_error.as_ref() {
                html! {
                    <div class="form-message error">
                        {error}
                    </div>
                }
            } else { html! {} }}

            {if let Some(error) = props.categories_error.as_ref() {
                html! {
                    <div class="form-message error">
                        {error}
                    </div>
                }
            } else { html! {} }}

            <form name="add-expense" class="add-expense-form" {onsubmit}>
                <div class="form-group">
                    <label for="name">{"Name"}</label>
                    <input
                        type="text"
                        id="name"
                        name={FormField::Name.name()}
                        ref={props.name_ref.clone()}
                        required={true}
                        value={props.fields.name.clone()}
                        oninput={text_input_handler(&props.on_field_change, FormField::Name)}
                        disabled={props.disabled}
                    />
                </div>

                <div class="form-group">
                    <label for="category_id">{"Category"}</label>
                    <select
                        id="category_id"
                        name={FormField::CategoryId.name()}
                        required={true}
                        onchange={on_category_change}
                        disabled={props.disabled}
                    >
                        <option value="" selected={props.fields.category_id.is_empty()}>
                            {if props.categories_loading { "Loading categories..." } else { "Choose a category" }}
                        </option>
                        {for props.categories.iter().map(|category| {
                            html! {
                                <option
                                    value={category.id.clone()}
                                    selected={category.id == props.fields.category_id}
                                >
                                    {&category.name}
                                </option>
                            }
                        })}
                    </select>
                </div>

                <div class="form-group">
                    <label for="purchase_date">{"Purchase date"}</label>
                    <input
                        type="date"
                        id="purchase_date"
                        name={FormField::PurchaseDate.name()}
                        required={true}
                        value={props.fields.purchase_date.clone()}
                        oninput={text_input_handler(&props.on_field_change, FormField::PurchaseDate)}
                        disabled={props.disabled}
                    />
                </div>

                <div class="form-group">
                    <label for="cost">{"Cost"}</label>
                    <input
                        type="number"
                        id="cost"
                        name={FormField::Cost.name()}
                        placeholder="0.00"
                        step="0.01"
                        min="0"
                        required={true}
                        value={props.fields.cost.clone()}
                        oninput={text_input_handler(&props.on_field_change, FormField::Cost)}
                        disabled={props.disabled}
                    />
                </div>

                <div class="form-group">
                    <label for="tags">{"Tags"}</label>
                    <input
                        type="text"
                        id="tags"
                        name={FormField::Tags.name()}
                        placeholder="groceries, weekly"
                        value={props.fields.tags.clone()}
                        oninput={text_input_handler(&props.on_field_change, FormField::Tags)}
                        disabled={props.disabled}
                    />
                </div>

                <button
                    type="submit"
                    name="submit"
                    class="btn btn-primary add-expense-btn"
                    disabled={props.disabled}
                >
                    {if props.disabled {
                        "Saving..."
                    } else {
                        "Add Expense"
                    }}
                </button>
            </form>
        </section>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;
    use chrono::NaiveDate;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, Event};

    wasm_bindgen_test_configure!(run_in_browser);

    fn props(disabled: bool, on_submit: Callback<()>) -> AddExpenseFormProps {
        let today = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        AddExpenseFormProps {
            fields: FormFields::with_defaults(today),
            disabled,
            form_error: None,
            categories: vec![Category {
                id: "1".to_string(),
                name: "Food".to_string(),
            }],
            categories_loading: false,
            categories_error: None,
            name_ref: NodeRef::default(),
            on_field_change: Callback::noop(),
            on_submit,
        }
    }

    async fn render(props: AddExpenseFormProps) -> Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        yew::Renderer::<AddExpenseForm>::with_root_and_props(root.clone(), props).render();
        yew::platform::time::sleep(Duration::ZERO).await;
        root
    }

    fn controls(root: &Element) -> Vec<Element> {
        let nodes = root
            .query_selector_all("form[name=\"add-expense\"] input, form[name=\"add-expense\"] select, form[name=\"add-expense\"] button[name=\"submit\"]")
            .unwrap();
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .map(|node| node.dyn_into::<Element>().unwrap())
            .collect()
    }

    #[wasm_bindgen_test]
    async fn test_every_control_disabled_while_submitting() {
        let root = render(props(true, Callback::noop())).await;
        let controls = controls(&root);

        let names: Vec<String> = controls
            .iter()
            .filter_map(|control| control.get_attribute("name"))
            .collect();
        assert_eq!(names, vec!["name", "category_id", "purchase_date", "cost", "tags", "submit"]);
        assert!(controls.iter().all(|control| control.has_attribute("disabled")));
    }

    #[wasm_bindgen_test]
    async fn test_controls_enabled_when_idle() {
        let root = render(props(false, Callback::noop())).await;

        assert!(controls(&root).iter().all(|control| !control.has_attribute("disabled")));
        let date = root.query_selector("input[name=\"purchase_date\"]").unwrap().unwrap();
        assert_eq!(date.dyn_into::<HtmlInputElement>().unwrap().value(), "2024-03-05");
    }

    #[wasm_bindgen_test]
    async fn test_submit_prevents_default_and_notifies() {
        let submitted = Rc::new(Cell::new(0));
        let on_submit = {
            let submitted = submitted.clone();
            Callback::from(move |_: ()| submitted.set(submitted.get() + 1))
        };
        let root = render(props(false, on_submit)).await;
        let form = root.query_selector("form[name=\"add-expense\"]").unwrap().unwrap();

        let event = Event::new("submit").unwrap();
        event.init_event_with_bubbles_and_cancelable("submit", true, true);
        let not_cancelled = form.dispatch_event(&event).unwrap();

        assert!(!not_cancelled);
        assert!(event.default_prevented());
        assert_eq!(submitted.get(), 1);
    }
}
