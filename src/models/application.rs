use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Client-side draft of a membership application, filled in across the
/// wizard steps. The id is generated locally so a retried submission is
/// idempotent on the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDraft {
    pub id: String,
    // Step 1 - personal details
    pub full_name: String,
    pub email: String,
    pub phone: String,
    // Step 2 - professional details
    pub specialty: String,
    pub qualification: String,
    pub registration_number: String,
    pub workplace: String,
    pub years_of_practice: String,
    // Step 3 - review
    pub motivation: String,
}

impl ApplicationDraft {
    pub fn new() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            specialty: String::new(),
            qualification: String::new(),
            registration_number: String::new(),
            workplace: String::new(),
            years_of_practice: String::new(),
            motivation: String::new(),
        }
    }
}

impl Default for ApplicationDraft {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Submitted,
    Review,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::Submitted => "Submitted",
            ApplicationStatus::Review => "Under review",
            ApplicationStatus::Approved => "Approved",
            ApplicationStatus::Rejected => "Rejected",
        }
    }
}

/// Application as listed on the dashboard
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSummary {
    pub id: String,
    pub status: ApplicationStatus,
    pub submitted_at: DateTime<Utc>,
    #[serde(default)]
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitApplicationResponse {
    pub id: String,
    pub status: ApplicationStatus,
}
