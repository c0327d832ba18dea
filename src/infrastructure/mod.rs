//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod remote;
pub mod repository;
pub mod storage;

pub use config::Config;
pub use remote::{HttpRemote, OfflineRemote, RemoteSource};
pub use repository::{FileSystemRepository, QuotebookRepository};
pub use storage::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
