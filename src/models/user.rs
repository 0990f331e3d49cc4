use serde::{Deserialize, Serialize};

/// Coarse authorization role of a signed-in principal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Member,
    Consultant,
    Trainee,
    Admin,
}

impl UserRole {
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Member => "Member",
            UserRole::Consultant => "Consultant",
            UserRole::Trainee => "Trainee",
            UserRole::Admin => "Administrator",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    Active,
    Pending,
    Lapsed,
}

/// Identity of the signed-in principal. Persisted to localStorage as the
/// session snapshot, so the shape must stay backward compatible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MemberStatus>,
}

impl User {
    pub fn display_name(&self) -> String {
        self.full_name
            .clone()
            .or_else(|| self.email.clone())
            .unwrap_or_else(|| self.id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_round_trips_through_json() {
        let user = User {
            id: "u-100".to_string(),
            role: UserRole::Consultant,
            email: Some("j.doe@example.org".to_string()),
            full_name: Some("Dr J Doe".to_string()),
            status: Some(MemberStatus::Active),
        };
        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let user: User = serde_json::from_str(r#"{"id":"u-1","role":"member"}"#).unwrap();
        assert_eq!(user.role, UserRole::Member);
        assert!(user.email.is_none());
        assert_eq!(user.display_name(), "u-1");
    }
}
