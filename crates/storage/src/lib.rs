#![forbid(unsafe_code)]

pub mod codec;
pub mod records;
pub mod repository;
pub mod sqlite;

pub use codec::{DecodeError, Record};
pub use records::QuizHistory;
pub use repository::{InMemoryStore, KeyValueStore, Storage, StorageError};
pub use sqlite::{SqliteInitError, SqliteStore};
