// ============================================================================
// USE FILTERED LIST - Yew wiring for the list controller
// ============================================================================
// One instance per list view. Raw search input is debounced here with a
// gloo timer; only the quiet-period value reaches the controller.
// ============================================================================

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::state::list::{DebouncedSearch, ListController, PageFetcher};
use crate::utils::constants::SEARCH_DEBOUNCE_MS;

pub struct UseFilteredListHandle<T> {
    pub controller: ListController<T>,
    pub raw_search: UseStateHandle<String>,
    pub on_search_input: Callback<InputEvent>,
    pub on_filter_change: Callback<(String, Option<String>)>,
    pub on_prev_page: Callback<MouseEvent>,
    pub on_next_page: Callback<MouseEvent>,
}

impl<T> Clone for UseFilteredListHandle<T> {
    fn clone(&self) -> Self {
        Self {
            controller: self.controller.clone(),
            raw_search: self.raw_search.clone(),
            on_search_input: self.on_search_input.clone(),
            on_filter_change: self.on_filter_change.clone(),
            on_prev_page: self.on_prev_page.clone(),
            on_next_page: self.on_next_page.clone(),
        }
    }
}

#[hook]
pub fn use_filtered_list<T: Clone + 'static>(
    fetcher: Rc<dyn PageFetcher<T>>,
    page_size: u32,
) -> UseFilteredListHandle<T> {
    let update = use_force_update();
    let controller_ref = use_mut_ref(move || ListController::new(fetcher, page_size));
    let controller = controller_ref.borrow().clone();
    let raw_search = use_state(String::new);
    let debouncer = use_mut_ref(DebouncedSearch::new);
    let timer = use_mut_ref(|| None::<Timeout>);

    // Initial fetch + re-render subscription, once on mount
    {
        let controller = controller.clone();
        use_effect_with((), move |_| {
            controller.set_on_change(move || update.force_update());
            let controller = controller.clone();
            wasm_bindgen_futures::spawn_local(async move {
                controller.load().await;
            });
            || ()
        });
    }

    let on_search_input = {
        let raw_search = raw_search.clone();
        let debouncer = debouncer.clone();
        let timer = timer.clone();
        let controller = controller.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            raw_search.set(value.clone());
            debouncer.borrow().input(&value);

            // Re-arm the quiet-period timer; dropping the old one cancels it
            let deb = debouncer.borrow().clone();
            let controller = controller.clone();
            *timer.borrow_mut() = Some(Timeout::new(SEARCH_DEBOUNCE_MS, move || {
                if let Some(term) = deb.take_pending() {
                    let controller = controller.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        controller.commit_search(&term).await;
                    });
                }
            }));
        })
    };

    let on_filter_change = {
        let controller = controller.clone();
        Callback::from(move |(key, value): (String, Option<String>)| {
            let controller = controller.clone();
            wasm_bindgen_futures::spawn_local(async move {
                controller.set_filter(&key, value).await;
            });
        })
    };

    let on_prev_page = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| {
            let page = controller.page();
            if page > 1 {
                let controller = controller.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    controller.set_page(page - 1).await;
                });
            }
        })
    };

    let on_next_page = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| {
            if controller.has_more() {
                let page = controller.page();
                let controller = controller.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    controller.set_page(page + 1).await;
                });
            }
        })
    };

    UseFilteredListHandle {
        controller,
        raw_search,
        on_search_input,
        on_filter_change,
        on_prev_page,
        on_next_page,
    }
}
