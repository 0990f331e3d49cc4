use yew::prelude::*;

use crate::components::loading_indicator::LoadingIndicator;
use crate::hooks::use_session;
use crate::models::{ApplicationSummary, Payment};
use crate::services::{api_client::ApiClient, application_service, payment_service};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DashboardTab {
    Profile,
    Applications,
    Payments,
    Settings,
}

impl DashboardTab {
    fn label(&self) -> &'static str {
        match self {
            DashboardTab::Profile => "Profile",
            DashboardTab::Applications => "Applications",
            DashboardTab::Payments => "Payments",
            DashboardTab::Settings => "Settings",
        }
    }
}

/// Remote data for one dashboard tab
enum Remote<T> {
    Loading,
    Ready(T),
    Failed(String),
}

fn applications_table(applications: &[ApplicationSummary]) -> Html {
    if applications.is_empty() {
        return html! { <p class="empty-message">{"You have no applications on record."}</p> };
    }
    html! {
        <table class="dashboard-table">
            <thead>
                <tr>
                    <th>{"Reference"}</th>
                    <th>{"Submitted"}</th>
                    <th>{"Status"}</th>
                </tr>
            </thead>
            <tbody>
                { for applications.iter().map(|application| html! {
                    <tr key={application.id.clone()}>
                        <td>{ application.id.clone() }</td>
                        <td>{ application.submitted_at.format("%-d %B %Y").to_string() }</td>
                        <td>{ application.status.label() }</td>
                    </tr>
                })}
            </tbody>
        </table>
    }
}

fn payments_table(payments: &[Payment]) -> Html {
    if payments.is_empty() {
        return html! { <p class="empty-message">{"No payments on record."}</p> };
    }
    html! {
        <table class="dashboard-table">
            <thead>
                <tr>
                    <th>{"Reference"}</th>
                    <th>{"Description"}</th>
                    <th>{"Amount"}</th>
                    <th>{"Status"}</th>
                </tr>
            </thead>
            <tbody>
                { for payments.iter().map(|payment| html! {
                    <tr key={payment.id.clone()}>
                        <td>{ payment.reference.clone() }</td>
                        <td>{ payment.description.clone() }</td>
                        <td>{ payment.amount_label() }</td>
                        <td>{ payment.status.label() }</td>
                    </tr>
                })}
            </tbody>
        </table>
    }
}

/// Member dashboard. Both remote tabs load once on mount with the session
/// token; a 401 on either call discards the session and sends the member
/// back to the sign-in page.
#[function_component(DashboardView)]
pub fn dashboard_view() -> Html {
    let context = use_session();
    let tab = use_state(|| DashboardTab::Profile);
    let applications = use_state(|| None::<Remote<Vec<ApplicationSummary>>>);
    let payments = use_state(|| None::<Remote<Vec<Payment>>>);

    {
        let session = context.session.clone();
        let applications = applications.clone();
        let payments = payments.clone();
        use_effect_with((), move |_| {
            let Some(token) = session.token() else {
                return;
            };
            applications.set(Some(Remote::Loading));
            payments.set(Some(Remote::Loading));

            {
                let session = session.clone();
                let token = token.clone();
                let applications = applications.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let api = ApiClient::new();
                    match application_service::my_applications(&api, &token).await {
                        Ok(list) => applications.set(Some(Remote::Ready(list))),
                        Err(e) if e.is_auth() => session.invalidate(),
                        Err(e) => applications.set(Some(Remote::Failed(e.to_string()))),
                    }
                });
            }
            {
                let payments = payments.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let api = ApiClient::new();
                    match payment_service::my_payments(&api, &token).await {
                        Ok(list) => payments.set(Some(Remote::Ready(list))),
                        Err(e) if e.is_auth() => session.invalidate(),
                        Err(e) => payments.set(Some(Remote::Failed(e.to_string()))),
                    }
                });
            }
        });
    }

    let Some(user) = context.session.user() else {
        // The route guard redirects before this renders for long
        return html! { <LoadingIndicator /> };
    };

    let tab_button = |target: DashboardTab| {
        let tab = tab.clone();
        let active = *tab == target;
        let onclick = Callback::from(move |_: MouseEvent| tab.set(target));
        html! {
            <button
                class={classes!("tab-button", active.then_some("active"))}
                {onclick}
            >
                { target.label() }
            </button>
        }
    };

    let body = match *tab {
        DashboardTab::Profile => html! {
            <dl class="profile-details">
                <div><dt>{"Name"}</dt><dd>{ user.display_name() }</dd></div>
                <div><dt>{"Role"}</dt><dd>{ user.role.label() }</dd></div>
                {
                    match &user.email {
                        Some(email) => html! { <div><dt>{"Email"}</dt><dd>{ email.clone() }</dd></div> },
                        None => html! {},
                    }
                }
            </dl>
        },
        DashboardTab::Applications => match &*applications {
            None | Some(Remote::Loading) => html! { <LoadingIndicator /> },
            Some(Remote::Failed(message)) => {
                html! { <p class="form-error" role="alert">{ message.clone() }</p> }
            }
            Some(Remote::Ready(list)) => applications_table(list),
        },
        DashboardTab::Payments => match &*payments {
            None | Some(Remote::Loading) => html! { <LoadingIndicator /> },
            Some(Remote::Failed(message)) => {
                html! { <p class="form-error" role="alert">{ message.clone() }</p> }
            }
            Some(Remote::Ready(list)) => payments_table(list),
        },
        DashboardTab::Settings => {
            let on_sign_out = {
                let session = context.session.clone();
                Callback::from(move |_: MouseEvent| session.logout())
            };
            html! {
                <div class="settings-panel">
                    <p>
                        {"Profile changes and communication preferences are managed \
                          by the membership office. Contact "}
                        <a href="mailto:membership@scm-society.org">{"membership@scm-society.org"}</a>
                        {" to update your record."}
                    </p>
                    <button class="button-secondary" onclick={on_sign_out}>
                        {"Sign out of this device"}
                    </button>
                </div>
            }
        }
    };

    html! {
        <section class="dashboard-page">
            <h1>{ format!("Welcome back, {}", user.display_name()) }</h1>
            <nav class="dashboard-tabs">
                { tab_button(DashboardTab::Profile) }
                { tab_button(DashboardTab::Applications) }
                { tab_button(DashboardTab::Payments) }
                { tab_button(DashboardTab::Settings) }
            </nav>
            <div class="dashboard-body">
                { body }
            </div>
        </section>
    }
}
