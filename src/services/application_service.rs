use web_sys::{File, FormData};

use crate::models::{ApplicationDraft, ApplicationSummary, SubmitApplicationResponse};
use crate::services::api_client::ApiClient;
use crate::services::error::ApiError;

/// Submit a completed membership application. The draft id was generated
/// client-side, so re-submitting after a flaky response is idempotent.
pub async fn submit_application(
    api: &ApiClient,
    draft: &ApplicationDraft,
) -> Result<SubmitApplicationResponse, ApiError> {
    log::info!("📨 Submitting membership application {}", draft.id);
    api.post_json("/v1/applications", draft, None).await
}

/// Attach a supporting document (qualification certificate, registration
/// proof) to a submitted application.
pub async fn upload_document(
    api: &ApiClient,
    application_id: &str,
    file: File,
    token: Option<&str>,
) -> Result<SubmitApplicationResponse, ApiError> {
    let form = FormData::new()
        .map_err(|_| ApiError::Network("could not build form data".to_string()))?;
    form.append_with_blob_and_filename("document", &file, &file.name())
        .map_err(|_| ApiError::Network("could not attach file".to_string()))?;

    log::info!("📎 Uploading {} for application {}", file.name(), application_id);
    api.post_form(
        &format!("/v1/applications/{}/documents", application_id),
        form,
        token,
    )
    .await
}

/// The signed-in member's own applications (dashboard)
pub async fn my_applications(
    api: &ApiClient,
    token: &str,
) -> Result<Vec<ApplicationSummary>, ApiError> {
    api.get_json("/v1/applications/mine", Some(token)).await
}
