pub mod client;
pub mod config;
pub mod error;
pub mod server;
pub mod upstream;

pub use error::{Error, Result};
