use std::rc::Rc;

use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::{ErrorBanner, LoadingIndicator, Pagination};
use crate::hooks::use_filtered_list;
use crate::models::Publication;
use crate::services::{CmsClient, PublicationsFetcher};
use crate::state::list::{ListPhase, PageFetcher};
use crate::utils::constants::PUBLICATIONS_PAGE_SIZE;

const CATEGORY_OPTIONS: [&str; 3] = ["journal", "guideline", "position-paper"];

#[function_component(PublicationsView)]
pub fn publications_view() -> Html {
    let fetcher = PublicationsFetcher::new(CmsClient::new()) as Rc<dyn PageFetcher<Publication>>;
    let list = use_filtered_list(fetcher, PUBLICATIONS_PAGE_SIZE);

    let on_category_change = {
        let on_filter_change = list.on_filter_change.clone();
        Callback::from(move |e: web_sys::Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            let value = if value.is_empty() { None } else { Some(value) };
            on_filter_change.emit(("category".to_string(), value));
        })
    };

    let items = list.controller.items();
    let body = if list.controller.loading() && items.is_empty() {
        html! { <LoadingIndicator /> }
    } else if list.controller.phase() == ListPhase::Empty {
        html! { <p class="list-empty">{"No publications match your search."}</p> }
    } else {
        html! {
            <ul class="publication-list">
                { for items.iter().map(|publication| html! {
                    <li class="publication-row" key={publication.id.clone()}>
                        <h3>{ publication.title.clone() }</h3>
                        <p class="publication-meta">
                            { publication.author_line() }
                            { " · " }
                            { publication.published_at.format("%B %Y").to_string() }
                        </p>
                        {
                            match &publication.download_url {
                                Some(url) => html! {
                                    <a class="button-link" href={url.clone()}>{"Download"}</a>
                                },
                                None => html! {},
                            }
                        }
                    </li>
                }) }
            </ul>
        }
    };

    html! {
        <section class="list-page publications-page">
            <h1>{"Publications"}</h1>
            <div class="list-toolbar">
                <input
                    type="search"
                    placeholder="Search publications..."
                    value={(*list.raw_search).clone()}
                    oninput={list.on_search_input.clone()}
                />
                <select onchange={on_category_change}>
                    <option value="" selected={list.controller.filter("category").is_none()}>{"All categories"}</option>
                    { for CATEGORY_OPTIONS.iter().map(|category| html! {
                        <option
                            value={*category}
                            selected={list.controller.filter("category").as_deref() == Some(*category)}
                        >
                            { *category }
                        </option>
                    }) }
                </select>
            </div>
            <ErrorBanner message={list.controller.error()} />
            { body }
            <Pagination
                page={list.controller.page()}
                has_more={list.controller.has_more()}
                on_prev={list.on_prev_page.clone()}
                on_next={list.on_next_page.clone()}
            />
        </section>
    }
}
