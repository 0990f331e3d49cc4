use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::nav_bar::NavLink;
use crate::hooks::use_session;
use crate::routes::Route;
use crate::services::{api_client::ApiClient, auth_service};
use crate::state::browser::BrowserNavigator;
use crate::state::session::Navigator;
use crate::utils::constants::ROUTE_DASHBOARD;
use crate::utils::validation::{is_email, is_required};

#[function_component(LoginView)]
pub fn login_view() -> Html {
    let ctx = use_session();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let session = ctx.session.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let email_value = (*email).clone();
            let password_value = (*password).clone();
            if !is_email(&email_value) {
                error.set(Some("Please enter a valid email address".to_string()));
                return;
            }
            if !is_required(&password_value) {
                error.set(Some("Please enter your password".to_string()));
                return;
            }

            error.set(None);
            submitting.set(true);
            let error = error.clone();
            let submitting = submitting.clone();
            let session = session.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                match auth_service::login(&api, &email_value, &password_value).await {
                    Ok(response) => {
                        session.login(response.user, &response.token);
                        BrowserNavigator.navigate(ROUTE_DASHBOARD);
                    }
                    Err(e) => {
                        log::error!("❌ Login failed: {}", e);
                        error.set(Some(e.to_string()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <section class="auth-page login-page">
            <div class="auth-card">
                <h1>{"Member sign in"}</h1>
                {
                    match &*error {
                        Some(message) => html! { <p class="form-error" role="alert">{ message.clone() }</p> },
                        None => html! {},
                    }
                }
                <form onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="you@example.org"
                            value={(*email).clone()}
                            oninput={on_email_change}
                            required=true
                        />
                    </div>
                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input
                            type="password"
                            id="password"
                            value={(*password).clone()}
                            oninput={on_password_change}
                            required=true
                        />
                    </div>
                    <button type="submit" class="button" disabled={*submitting}>
                        { if *submitting { "Signing in..." } else { "Sign in" } }
                    </button>
                </form>
                <p class="auth-footer">
                    {"Not a member yet? "}
                    <NavLink to={Route::Apply} label="Apply to join" />
                </p>
            </div>
        </section>
    }
}
