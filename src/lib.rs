pub mod archive;
pub mod config;
pub mod error;
pub mod registry;
pub mod relay;
pub mod server;

pub use error::{Error, Result};
