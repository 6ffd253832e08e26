pub mod models;
pub mod store;

pub use models::{Owner, Record, RecordEntry};
pub use store::{load_entries, load_records, save_entries};
