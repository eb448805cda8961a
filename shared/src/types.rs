use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity returned by the authentication endpoint.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct SessionUser {
    pub client_id: String,
    pub sl_token: String,
    pub email: String,
}

/// Session persisted in browser storage after a successful login.
///
/// The field names on the wire are the ones earlier versions of the web client
/// wrote, so sessions stored by them are still restored.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    #[serde(rename = "time")]
    pub captured_at: DateTime<Utc>,
    #[serde(rename = "userDetails")]
    pub user: SessionUser,
}

impl SessionRecord {
    pub fn new(user: SessionUser) -> Self {
        Self {
            captured_at: Utc::now(),
            user,
        }
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct AuthRequest {
    pub client_id: String,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthResponse {
    pub data: SessionUser,
}
