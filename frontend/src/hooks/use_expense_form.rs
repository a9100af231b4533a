use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use shared::{Dashboard, ExpenseForm, FormField, RefreshedViews};
use crate::services::api::ApiClient;
use crate::services::date_utils::current_date;
use crate::services::logging::Logger;

pub struct UseExpenseFormResult {
    /// Snapshot of the form for rendering
    pub form: ExpenseForm,
    /// Attached to the name input; receives focus after each reset
    pub name_ref: NodeRef,
    pub actions: UseExpenseFormActions,
}

#[derive(Clone)]
pub struct UseExpenseFormActions {
    pub on_field_change: Callback<(FormField, String)>,
    pub on_submit: Callback<()>,
}

/// Owns the `add-expense` form and runs the submission pipeline.
///
/// `on_saved` receives the refreshed list snapshots once the expense has
/// been created.
#[hook]
pub fn use_expense_form(
    dashboard: &Dashboard<ApiClient>,
    on_saved: Callback<RefreshedViews>,
) -> UseExpenseFormResult {
    // The form lives in a RefCell so the async pipeline always sees the
    // latest state; borrows never span an await.
    let form = use_mut_ref(|| ExpenseForm::new(current_date()));
    let rerender = use_force_update();
    let name_ref = use_node_ref();

    let on_field_change = {
        let form = form.clone();
        let rerender = rerender.clone();
        use_callback((), move |(field, value): (FormField, String), _| {
            if form.borrow_mut().set_field(field, value) {
                rerender.force_update();
            }
        })
    };

    let on_submit = {
        let dashboard = dashboard.clone();
        let form = form.clone();
        let rerender = rerender.clone();

        use_callback(on_saved, move |_: (), on_saved: &Callback<RefreshedViews>| {
            let pending = match form.borrow_mut().begin_submit() {
                Ok(pending) => pending,
                Err(e) => {
                    Logger::warn_with_component("expense-form", &e.to_string());
                    return;
                }
            };
            // Disabled before the first request goes out
            rerender.force_update();

            let dashboard = dashboard.clone();
            let form = form.clone();
            let rerender = rerender.clone();
            let on_saved = on_saved.clone();

            spawn_local(async move {
                let outcome = dashboard.submit_and_refresh(pending, current_date()).await;
                form.borrow_mut().finish(&outcome, current_date());
                rerender.force_update();

                match outcome {
                    Ok((expense, refreshed)) => {
                        Logger::info_with_component(
                            "expense-form",
                            &format!("Saved {} ({})", expense.name, expense.category.name),
                        );
                        on_saved.emit(refreshed);
                    }
                    Err(e) => {
                        Logger::error_with_component("expense-form", &e.to_string());
                    }
                }
            });
        })
    };

    let snapshot = form.borrow().clone();

    // Move focus to the name field on load and after every successful reset
    use_effect_with(snapshot.focus_requests(), {
        let name_ref = name_ref.clone();
        move |_| {
            if let Some(input) = name_ref.cast::<HtmlInputElement>() {
                let _ = input.focus();
            }
            || ()
        }
    });

    UseExpenseFormResult {
        form: snapshot,
        name_ref,
        actions: UseExpenseFormActions {
            on_field_change,
            on_submit,
        },
    }
}
