pub mod cli;
pub mod entity;
pub mod error;
pub mod report;
pub mod scoring;
pub mod seed;
pub mod snapshot;
pub mod storage;

pub use error::{Result, SpotdeskError};
pub use storage::JsonStore;
