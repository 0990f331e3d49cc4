use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub page: u32,
    pub has_more: bool,
    /// Exact total where the backend provides one (member directory)
    #[prop_or_default]
    pub total: Option<u64>,
    pub on_prev: Callback<MouseEvent>,
    pub on_next: Callback<MouseEvent>,
}

/// Always rendered, even while filtering: correctness is driven by
/// has_more, which is recomputed for the active filter/search context.
#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    html! {
        <nav class="pagination">
            <button
                class="pagination-prev"
                disabled={props.page == 1}
                onclick={props.on_prev.clone()}
            >
                {"Previous"}
            </button>
            <span class="pagination-page">
                { format!("Page {}", props.page) }
                {
                    match props.total {
                        Some(total) => html! { <span class="pagination-total">{ format!(" · {} results", total) }</span> },
                        None => html! {},
                    }
                }
            </span>
            <button
                class="pagination-next"
                disabled={!props.has_more}
                onclick={props.on_next.clone()}
            >
                {"Next"}
            </button>
        </nav>
    }
}
