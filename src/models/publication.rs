use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// CMS publication record (journal issues, position papers, guidelines)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub authors: Vec<String>,
    pub published_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
}

impl Publication {
    pub fn author_line(&self) -> String {
        self.authors.join(", ")
    }
}
