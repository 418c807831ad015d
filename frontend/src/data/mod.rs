pub mod client;
pub mod fixtures;
pub mod types;

pub use client::*;
pub use types::*;
