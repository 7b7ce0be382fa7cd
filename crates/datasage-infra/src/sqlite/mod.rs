//! SQLite persistence: split reader/writer pool and the message store.

pub mod pool;
pub mod turns;

pub use pool::DatabasePool;
pub use turns::SqliteMessageStore;
