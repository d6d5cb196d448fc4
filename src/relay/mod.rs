pub mod client;
mod service;
pub mod types;

pub use client::*;
pub use service::Relay;
pub use types::*;
