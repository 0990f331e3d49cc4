use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::hooks::{use_membership_form, WizardStep};
use crate::services::{api_client::ApiClient, application_service};

fn text_field(
    label: &'static str,
    field: &'static str,
    value: String,
    on_field_change: &Callback<(&'static str, String)>,
) -> Html {
    let oninput = {
        let on_field_change = on_field_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_field_change.emit((field, input.value()));
        })
    };
    html! {
        <div class="form-group">
            <label for={field}>{ label }</label>
            <input type="text" id={field} {value} {oninput} />
        </div>
    }
}

fn review_row(label: &'static str, value: &str) -> Html {
    html! {
        <div class="review-row">
            <dt>{ label }</dt>
            <dd>{ value.to_string() }</dd>
        </div>
    }
}

/// Three-step membership application wizard. Structural validation runs
/// client-side per step; the server's rejection message is shown verbatim.
#[function_component(ApplyView)]
pub fn apply_view() -> Html {
    let form = use_membership_form();
    let upload_status = use_state(|| None::<String>);

    // Post-submission: confirmation + optional supporting document upload
    if let Some(response) = &*form.submitted {
        let application_id = response.id.clone();
        let on_file_change = {
            let upload_status = upload_status.clone();
            Callback::from(move |e: web_sys::Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                let Some(file) = input.files().and_then(|files| files.get(0)) else {
                    return;
                };
                let application_id = application_id.clone();
                let upload_status = upload_status.clone();
                upload_status.set(Some("Uploading...".to_string()));
                wasm_bindgen_futures::spawn_local(async move {
                    let api = ApiClient::new();
                    match application_service::upload_document(&api, &application_id, file, None).await
                    {
                        Ok(_) => upload_status.set(Some("Document uploaded".to_string())),
                        Err(e) => upload_status.set(Some(e.to_string())),
                    }
                });
            })
        };

        return html! {
            <section class="auth-page apply-page">
                <div class="auth-card">
                    <h1>{"Application received"}</h1>
                    <p>
                        {"Thank you. Your application reference is "}
                        <strong>{ response.id.clone() }</strong>
                        {". The membership committee will review it and contact you by email."}
                    </p>
                    <div class="form-group">
                        <label for="document">{"Attach a qualification certificate (optional)"}</label>
                        <input type="file" id="document" onchange={on_file_change} />
                        {
                            match &*upload_status {
                                Some(status) => html! { <p class="upload-status">{ status.clone() }</p> },
                                None => html! {},
                            }
                        }
                    </div>
                </div>
            </section>
        };
    }

    let draft = (*form.draft).clone();
    let on_motivation_input = {
        let on_field_change = form.on_field_change.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            on_field_change.emit(("motivation", area.value()));
        })
    };

    let step_body = match *form.step {
        WizardStep::Personal => html! {
            <>
                { text_field("Full name", "full_name", draft.full_name.clone(), &form.on_field_change) }
                { text_field("Email", "email", draft.email.clone(), &form.on_field_change) }
                { text_field("Phone", "phone", draft.phone.clone(), &form.on_field_change) }
            </>
        },
        WizardStep::Professional => html! {
            <>
                { text_field("Specialty", "specialty", draft.specialty.clone(), &form.on_field_change) }
                { text_field("Primary qualification", "qualification", draft.qualification.clone(), &form.on_field_change) }
                { text_field("Registration number", "registration_number", draft.registration_number.clone(), &form.on_field_change) }
                { text_field("Current workplace", "workplace", draft.workplace.clone(), &form.on_field_change) }
                { text_field("Years of practice", "years_of_practice", draft.years_of_practice.clone(), &form.on_field_change) }
            </>
        },
        WizardStep::Review => html! {
            <>
                <dl class="review-list">
                    { review_row("Full name", &draft.full_name) }
                    { review_row("Email", &draft.email) }
                    { review_row("Phone", &draft.phone) }
                    { review_row("Specialty", &draft.specialty) }
                    { review_row("Qualification", &draft.qualification) }
                    { review_row("Registration number", &draft.registration_number) }
                    { review_row("Workplace", &draft.workplace) }
                    { review_row("Years of practice", &draft.years_of_practice) }
                </dl>
                <div class="form-group">
                    <label for="motivation">{"Anything you would like the committee to know (optional)"}</label>
                    <textarea id="motivation" value={draft.motivation.clone()} oninput={on_motivation_input} />
                </div>
            </>
        },
    };

    let controls = match *form.step {
        WizardStep::Personal => html! {
            <button class="button" onclick={form.on_next.clone()}>{"Continue"}</button>
        },
        WizardStep::Professional => html! {
            <>
                <button class="button-secondary" onclick={form.on_back.clone()}>{"Back"}</button>
                <button class="button" onclick={form.on_next.clone()}>{"Continue"}</button>
            </>
        },
        WizardStep::Review => html! {
            <>
                <button class="button-secondary" onclick={form.on_back.clone()}>{"Back"}</button>
                <button class="button" onclick={form.on_submit.clone()} disabled={*form.submitting}>
                    { if *form.submitting { "Submitting..." } else { "Submit application" } }
                </button>
            </>
        },
    };

    html! {
        <section class="auth-page apply-page">
            <div class="auth-card wizard">
                <h1>{"Apply for membership"}</h1>
                <p class="wizard-step-label">
                    { format!("Step {} of 3 · {}", form.step.number(), form.step.title()) }
                </p>
                {
                    if form.errors.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <ul class="form-errors" role="alert">
                                { for form.errors.iter().map(|message| html! { <li>{ message.clone() }</li> }) }
                            </ul>
                        }
                    }
                }
                {
                    match &*form.server_error {
                        Some(message) => html! { <p class="form-error" role="alert">{ message.clone() }</p> },
                        None => html! {},
                    }
                }
                { step_body }
                <div class="wizard-controls">{ controls }</div>
            </div>
        </section>
    }
}
