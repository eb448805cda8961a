//! Collaborators of the login screen and the controller that drives them.

use futures::future::LocalBoxFuture;

use shared::types::{SessionRecord, SessionUser};

use crate::types::{Credentials, User};

pub mod controller;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("no session record stored")]
    Missing,
    #[error("session record cannot be decoded: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("session record cannot be encoded: {0}")]
    Encode(serde_json::Error),
    #[error("session record cannot be written: {0}")]
    Write(String),
}

/// Any failure of the authentication call. The screen shows the same message for all of them.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("unexpected response status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Payload(String),
}

/// Slot holding the persisted session record.
pub trait SessionStorage {
    fn read(&self) -> Result<SessionRecord, StorageError>;
    fn write(&self, record: &SessionRecord) -> Result<(), StorageError>;
}

pub trait AuthClient {
    fn authenticate(&self, credentials: Credentials) -> LocalBoxFuture<'static, Result<SessionUser, AuthError>>;
}

pub trait UserStore {
    fn set_current_user(&self, user: User);
}

pub trait Navigator {
    fn go_to(&self, path: &str);
}
