//! Application layer - Use cases and orchestration

pub mod add_quote;
pub mod init;
pub mod manage_config;
pub mod quote_store;
pub mod session;
pub mod sync;
pub mod transfer;

pub use add_quote::add_quote;
pub use quote_store::QuoteStore;
pub use session::Session;
pub use sync::{Notification, SyncReconciler, SyncReport};
pub use transfer::{export_to_file, import_from_file, ImportReport};
