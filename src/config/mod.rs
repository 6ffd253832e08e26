pub mod loader;
pub mod models;

pub use loader::{ConfigLoader, Overrides};
pub use models::{Credentials, FileConfig, Settings};
