use std::rc::Rc;

use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::{ErrorBanner, LoadingIndicator, Pagination};
use crate::hooks::{use_filtered_list, use_session};
use crate::models::MemberRecord;
use crate::services::{ApiClient, DirectoryFetcher};
use crate::state::list::{ListPhase, PageFetcher};
use crate::utils::constants::MEMBERS_PAGE_SIZE;

const ROLE_OPTIONS: [&str; 3] = ["member", "consultant", "trainee"];

/// Member directory - members only (the router wraps this in
/// ProtectedRoute). The backend returns an exact total, shown next to the
/// page controls; enablement still runs off has_more.
#[function_component(MembersView)]
pub fn members_view() -> Html {
    let ctx = use_session();
    let fetcher =
        DirectoryFetcher::new(ApiClient::new(), ctx.session.clone()) as Rc<dyn PageFetcher<MemberRecord>>;
    let list = use_filtered_list(fetcher, MEMBERS_PAGE_SIZE);

    let on_role_change = {
        let on_filter_change = list.on_filter_change.clone();
        Callback::from(move |e: web_sys::Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            let value = if value.is_empty() { None } else { Some(value) };
            on_filter_change.emit(("role".to_string(), value));
        })
    };

    let items = list.controller.items();
    let body = if list.controller.loading() && items.is_empty() {
        html! { <LoadingIndicator /> }
    } else if list.controller.phase() == ListPhase::Empty {
        html! { <p class="list-empty">{"No members match your search."}</p> }
    } else {
        html! {
            <table class="member-table">
                <thead>
                    <tr>
                        <th>{"Name"}</th>
                        <th>{"Role"}</th>
                        <th>{"Specialty"}</th>
                        <th>{"City"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for items.iter().map(|member| html! {
                        <tr key={member.id.clone()}>
                            <td>{ member.full_name.clone() }</td>
                            <td>{ member.role.label() }</td>
                            <td>{ member.specialty.clone() }</td>
                            <td>{ member.city.clone().unwrap_or_default() }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        }
    };

    html! {
        <section class="list-page members-page">
            <h1>{"Member directory"}</h1>
            <div class="list-toolbar">
                <input
                    type="search"
                    placeholder="Search by name..."
                    value={(*list.raw_search).clone()}
                    oninput={list.on_search_input.clone()}
                />
                <select onchange={on_role_change}>
                    <option value="" selected={list.controller.filter("role").is_none()}>{"All roles"}</option>
                    { for ROLE_OPTIONS.iter().map(|role| html! {
                        <option
                            value={*role}
                            selected={list.controller.filter("role").as_deref() == Some(*role)}
                        >
                            { *role }
                        </option>
                    }) }
                </select>
            </div>
            <ErrorBanner message={list.controller.error()} />
            { body }
            <Pagination
                page={list.controller.page()}
                has_more={list.controller.has_more()}
                total={list.controller.total()}
                on_prev={list.on_prev_page.clone()}
                on_next={list.on_next_page.clone()}
            />
        </section>
    }
}
