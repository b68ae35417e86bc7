pub mod error;
pub mod memory;
pub mod sqlite;
pub mod store;

pub use error::{Result, ViewStoreError};
pub use memory::InMemoryViewStore;
pub use sqlite::SqliteViewStore;
pub use store::ViewStore;
