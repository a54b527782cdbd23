mod client;
mod types;

pub use client::{HttpUpstreamClient, UpstreamClient};
pub use types::*;
