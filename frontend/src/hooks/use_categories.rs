use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use shared::{Category, Dashboard};
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
pub struct CategoriesState {
    pub categories: Vec<Category>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for CategoriesState {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

/// Options for the category select, fetched once on mount
#[hook]
pub fn use_categories(dashboard: &Dashboard<ApiClient>) -> UseStateHandle<CategoriesState> {
    let categories_state = use_state(CategoriesState::default);

    use_effect_with((), {
        let categories_state = categories_state.clone();
        let dashboard = dashboard.clone();

        move |_| {
            spawn_local(async move {
                match dashboard.load_categories().await {
                    Ok(categories) => {
                        categories_state.set(CategoriesState {
                            categories,
                            loading: false,
                            error: None,
                        });
                    }
                    Err(e) => {
                        Logger::error_with_component("categories", &e.to_string());
                        categories_state.set(CategoriesState {
                            categories: Vec::new(),
                            loading: false,
                            error: Some(format!("Failed to load categories: {}", e)),
                        });
                    }
                }
            });

            || ()
        }
    });

    categories_state
}
