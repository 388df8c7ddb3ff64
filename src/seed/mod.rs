pub mod error;
pub mod loader;
pub mod phase;
pub mod report;
pub mod resolver;
#[cfg(test)]
pub mod snapshot;
pub mod soft_delete;
pub mod verify;

pub use loader::{LoadOptions, Loader};
