use std::rc::Rc;

use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::{ErrorBanner, LoadingIndicator, Pagination};
use crate::hooks::use_filtered_list;
use crate::models::ResourceItem;
use crate::services::{CmsClient, ResourcesFetcher};
use crate::state::list::{ListPhase, PageFetcher};
use crate::utils::constants::RESOURCES_PAGE_SIZE;

const CATEGORY_OPTIONS: [&str; 3] = ["clinical", "training", "forms"];

#[function_component(ResourcesView)]
pub fn resources_view() -> Html {
    let fetcher = ResourcesFetcher::new(CmsClient::new()) as Rc<dyn PageFetcher<ResourceItem>>;
    let list = use_filtered_list(fetcher, RESOURCES_PAGE_SIZE);

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
        html! { <p class="list-empty">{"No resources match your search."}</p> }
    } else {
        html! {
            <div class="card-grid">
                { for items.iter().map(|resource| html! {
                    <article class="card resource-card" key={resource.id.clone()}>
                        <h3>{ resource.title.clone() }</h3>
                        <p class="resource-category">{ resource.category.clone() }</p>
                        <p>{ resource.description.clone() }</p>
                        {
                            match &resource.link {
                                Some(link) => html! {
                                    <a class="button-link" href={link.clone()}>{"Open"}</a>
                                },
                                None => html! {},
                            }
                        }
                    </article>
                }) }
            </div>
        }
    };

    html! {
        <section class="list-page resources-page">
            <h1>{"Resources"}</h1>
            <div class="list-toolbar">
                <input
                    type="search"
                    placeholder="Search resources..."
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
