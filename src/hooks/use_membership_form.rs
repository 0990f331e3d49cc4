// ============================================================================
// MEMBERSHIP APPLICATION WIZARD - step state + validation + submission
// ============================================================================

use yew::prelude::*;

use crate::models::{ApplicationDraft, SubmitApplicationResponse};
use crate::services::{api_client::ApiClient, application_service};
use crate::utils::validation::{has_min_length, is_email, is_required};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Personal,
    Professional,
    Review,
}

impl WizardStep {
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Personal => 1,
            WizardStep::Professional => 2,
            WizardStep::Review => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Personal => "Personal details",
            WizardStep::Professional => "Professional details",
            WizardStep::Review => "Review and submit",
        }
    }
}

/// Structural checks for step 1. Server-side rules come back verbatim on
/// submission.
pub fn validate_personal(draft: &ApplicationDraft) -> Vec<String> {
    let mut errors = Vec::new();
    if !is_required(&draft.full_name) {
        errors.push("Full name is required".to_string());
    }
    if !is_email(&draft.email) {
        errors.push("A valid email address is required".to_string());
    }
    if !is_required(&draft.phone) {
        errors.push("A contact phone number is required".to_string());
    }
    errors
}

pub fn validate_professional(draft: &ApplicationDraft) -> Vec<String> {
    let mut errors = Vec::new();
    if !is_required(&draft.specialty) {
        errors.push("Specialty is required".to_string());
    }
    if !is_required(&draft.qualification) {
        errors.push("Primary qualification is required".to_string());
    }
    if !has_min_length(&draft.registration_number, 4) {
        errors.push("Registration number must be at least 4 characters".to_string());
    }
    if !is_required(&draft.workplace) {
        errors.push("Current workplace is required".to_string());
    }
    errors
}

pub fn validate_all(draft: &ApplicationDraft) -> Vec<String> {
    let mut errors = validate_personal(draft);
    errors.extend(validate_professional(draft));
    errors
}

/// Apply one field edit to a draft, by field name
pub fn apply_field(draft: &ApplicationDraft, field: &str, value: String) -> ApplicationDraft {
    let mut next = draft.clone();
    match field {
        "full_name" => next.full_name = value,
        "email" => next.email = value,
        "phone" => next.phone = value,
        "specialty" => next.specialty = value,
        "qualification" => next.qualification = value,
        "registration_number" => next.registration_number = value,
        "workplace" => next.workplace = value,
        "years_of_practice" => next.years_of_practice = value,
        "motivation" => next.motivation = value,
        other => log::warn!("⚠️ Unknown application field: {}", other),
    }
    next
}

pub struct UseMembershipFormHandle {
    pub draft: UseStateHandle<ApplicationDraft>,
    pub step: UseStateHandle<WizardStep>,
    pub errors: UseStateHandle<Vec<String>>,
    pub submitting: UseStateHandle<bool>,
    pub server_error: UseStateHandle<Option<String>>,
    pub submitted: UseStateHandle<Option<SubmitApplicationResponse>>,
    pub on_field_change: Callback<(&'static str, String)>,
    pub on_next: Callback<MouseEvent>,
    pub on_back: Callback<MouseEvent>,
    pub on_submit: Callback<MouseEvent>,
}

#[hook]
pub fn use_membership_form() -> UseMembershipFormHandle {
    let draft = use_state(ApplicationDraft::new);
    let step = use_state(|| WizardStep::Personal);
    let errors = use_state(Vec::<String>::new);
    let submitting = use_state(|| false);
    let server_error = use_state(|| None::<String>);
    let submitted = use_state(|| None::<SubmitApplicationResponse>);

    let on_field_change = {
        let draft = draft.clone();
        Callback::from(move |(field, value): (&'static str, String)| {
            draft.set(apply_field(&draft, field, value));
        })
    };

    let on_next = {
        let draft = draft.clone();
        let step = step.clone();
        let errors = errors.clone();
        Callback::from(move |_: MouseEvent| {
            let step_errors = match *step {
                WizardStep::Personal => validate_personal(&draft),
                WizardStep::Professional => validate_professional(&draft),
                WizardStep::Review => Vec::new(),
            };
            if !step_errors.is_empty() {
                errors.set(step_errors);
                return;
            }
            errors.set(Vec::new());
            match *step {
                WizardStep::Personal => step.set(WizardStep::Professional),
                WizardStep::Professional => step.set(WizardStep::Review),
                WizardStep::Review => {}
            }
        })
    };

    let on_back = {
        let step = step.clone();
        let errors = errors.clone();
        Callback::from(move |_: MouseEvent| {
            errors.set(Vec::new());
            match *step {
                WizardStep::Personal => {}
                WizardStep::Professional => step.set(WizardStep::Personal),
                WizardStep::Review => step.set(WizardStep::Professional),
            }
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let errors = errors.clone();
        let submitting = submitting.clone();
        let server_error = server_error.clone();
        let submitted = submitted.clone();
        Callback::from(move |_: MouseEvent| {
            if *submitting {
                return;
            }
            let all_errors = validate_all(&draft);
            if !all_errors.is_empty() {
                errors.set(all_errors);
                return;
            }
            errors.set(Vec::new());
            server_error.set(None);
            submitting.set(true);

            let draft_value = (*draft).clone();
            let submitting = submitting.clone();
            let server_error = server_error.clone();
            let submitted = submitted.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                match application_service::submit_application(&api, &draft_value).await {
                    Ok(response) => {
                        log::info!("✅ Application {} accepted", response.id);
                        submitted.set(Some(response));
                    }
                    Err(e) => {
                        log::error!("❌ Application submission failed: {}", e);
                        // The server's own message, verbatim
                        server_error.set(Some(e.to_string()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    UseMembershipFormHandle {
        draft,
        step,
        errors,
        submitting,
        server_error,
        submitted,
        on_field_change,
        on_next,
        on_back,
        on_submit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> ApplicationDraft {
        let mut draft = ApplicationDraft::new();
        draft.full_name = "Dr A Example".to_string();
        draft.email = "a.example@hospital.org".to_string();
        draft.phone = "+44 20 7946 0000".to_string();
        draft.specialty = "Cardiology".to_string();
        draft.qualification = "MBBS".to_string();
        draft.registration_number = "GMC-1234567".to_string();
        draft.workplace = "St Elsewhere".to_string();
        draft
    }

    #[test]
    fn complete_draft_passes_all_checks() {
        assert!(validate_all(&complete_draft()).is_empty());
    }

    #[test]
    fn personal_step_flags_bad_email() {
        let mut draft = complete_draft();
        draft.email = "not-an-email".to_string();
        let errors = validate_personal(&draft);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("email"));
    }

    #[test]
    fn professional_step_requires_registration_number_length() {
        let mut draft = complete_draft();
        draft.registration_number = "123".to_string();
        assert!(!validate_professional(&draft).is_empty());
    }

    #[test]
    fn apply_field_only_touches_the_named_field() {
        let draft = complete_draft();
        let next = apply_field(&draft, "specialty", "Oncology".to_string());
        assert_eq!(next.specialty, "Oncology");
        assert_eq!(next.full_name, draft.full_name);
        assert_eq!(next.id, draft.id);
    }
}
