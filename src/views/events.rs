use std::rc::Rc;

use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::{ErrorBanner, LoadingIndicator, Pagination};
use crate::hooks::use_filtered_list;
use crate::models::Event;
use crate::services::{CmsClient, EventsFetcher};
use crate::state::list::{ListPhase, PageFetcher};
use crate::utils::constants::EVENTS_PAGE_SIZE;

const YEAR_OPTIONS: [&str; 4] = ["2023", "2024", "2025", "2026"];

#[function_component(EventsView)]
pub fn events_view() -> Html {
    let fetcher = EventsFetcher::new(CmsClient::new()) as Rc<dyn PageFetcher<Event>>;
    let list = use_filtered_list(fetcher, EVENTS_PAGE_SIZE);

    let on_year_change = {
        let on_filter_change = list.on_filter_change.clone();
        Callback::from(move |e: web_sys::Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            let value = if value.is_empty() { None } else { Some(value) };
            on_filter_change.emit(("year".to_string(), value));
        })
    };

    let items = list.controller.items();
    let body = if list.controller.loading() && items.is_empty() {
        html! { <LoadingIndicator /> }
    } else if list.controller.phase() == ListPhase::Empty {
        html! { <p class="list-empty">{"No events match your search."}</p> }
    } else {
        html! {
            <div class="card-grid">
                { for items.iter().map(|event| html! {
                    <article class="card event-card" key={event.id.clone()}>
                        <h3>{ event.title.clone() }</h3>
                        <p class="event-date">{ event.date_label() }</p>
                        <p class="event-location">{ event.location.clone() }</p>
                        <p>{ event.summary.clone() }</p>
                        {
                            match &event.registration_url {
                                Some(url) => html! {
                                    <a class="button" href={url.clone()}>{"Register"}</a>
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
        <section class="list-page events-page">
            <h1>{"Events"}</h1>
            <div class="list-toolbar">
                <input
                    type="search"
                    placeholder="Search events..."
                    value={(*list.raw_search).clone()}
                    oninput={list.on_search_input.clone()}
                />
                <select onchange={on_year_change}>
                    <option value="" selected={list.controller.filter("year").is_none()}>{"All years"}</option>
                    { for YEAR_OPTIONS.iter().map(|year| html! {
                        <option
                            value={*year}
                            selected={list.controller.filter("year").as_deref() == Some(*year)}
                        >
                            { *year }
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
