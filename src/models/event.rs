use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// CMS event record (conferences, CPD sessions, AGMs)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub location: String,
    pub starts_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_url: Option<String>,
}

impl Event {
    pub fn year(&self) -> i32 {
        self.starts_at.year()
    }

    pub fn date_label(&self) -> String {
        self.starts_at.format("%-d %B %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_is_derived_from_start_date() {
        let event: Event = serde_json::from_str(
            r#"{"id":"e-1","title":"Annual Congress","startsAt":"2024-06-14T09:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(event.year(), 2024);
        assert_eq!(event.summary, "");
    }
}
