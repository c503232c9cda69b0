pub mod blob;
pub mod sqlite;

#[derive(Debug)]
pub enum PersistError {
    Sqlite(rusqlite::Error),
    Serde(serde_json::Error),
    Message(String),
}

impl From<rusqlite::Error> for PersistError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}

pub type PersistResult<T> = Result<T, PersistError>;

/// Flat key-value storage for opaque blobs. The seam the logbook
/// persists through; one durable slot per key.
pub trait KvStore {
    fn read(&self, key: &str) -> PersistResult<Option<Vec<u8>>>;
    fn write(&mut self, key: &str, value: &[u8]) -> PersistResult<()>;
    fn delete(&mut self, key: &str) -> PersistResult<()>;
}
