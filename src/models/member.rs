use serde::{Deserialize, Serialize};

use super::user::UserRole;

/// Public directory entry for a member. Only fields a member consented to
/// publish are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRecord {
    pub id: String,
    pub full_name: String,
    pub role: UserRole,
    #[serde(default)]
    pub specialty: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

/// Directory page from the REST backend. Unlike the CMS lists, the backend
/// returns an exact total for the directory.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryResponse {
    pub members: Vec<MemberRecord>,
    #[serde(default)]
    pub total: Option<u64>,
}
