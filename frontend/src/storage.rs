use web_sys::Storage;

use shared::types::SessionRecord;

use crate::login::{SessionStorage, StorageError};

fn local_storage() -> Result<Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .ok_or(StorageError::Unavailable)
}

pub fn decode_record(value: &str) -> Result<SessionRecord, StorageError> {
    Ok(serde_json::from_str(value)?)
}

pub fn encode_record(record: &SessionRecord) -> Result<String, StorageError> {
    serde_json::to_string(record).map_err(StorageError::Encode)
}

/// Session record slot in the browser's `localStorage`.
pub struct LocalSessionStorage {
    key: &'static str,
}

impl LocalSessionStorage {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }
}

impl SessionStorage for LocalSessionStorage {
    fn read(&self) -> Result<SessionRecord, StorageError> {
        let value = local_storage()?
            .get_item(self.key)
            .map_err(|_| StorageError::Unavailable)?
            .ok_or(StorageError::Missing)?;
        decode_record(&value)
    }

    fn write(&self, record: &SessionRecord) -> Result<(), StorageError> {
        let value = encode_record(record)?;
        local_storage()?
            .set_item(self.key, &value)
            .map_err(|err| StorageError::Write(format!("{err:?}")))
    }
}

#[cfg(test)]
mod tests {
    use shared::types::SessionUser;

    use super::*;

    #[test]
    fn encoded_record_decodes_to_same_user() {
        let record = SessionRecord::new(SessionUser {
            client_id: "c1".to_string(),
            sl_token: "t1".to_string(),
            email: "e1".to_string(),
        });
        let value = encode_record(&record).unwrap();

        assert!(value.contains(r#""userDetails":{"client_id":"c1","sl_token":"t1","email":"e1"}"#));
        assert_eq!(decode_record(&value).unwrap(), record);
    }

    #[test]
    fn garbage_is_a_decode_error() {
        assert!(matches!(decode_record("undefined"), Err(StorageError::Decode(_))));
        assert!(matches!(decode_record(r#"{"time":"yesterday","userDetails":{}}"#), Err(StorageError::Decode(_))));
    }
}
