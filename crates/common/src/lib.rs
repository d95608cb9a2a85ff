//! Common types for the social login gateway

mod secret;
mod error;

pub use secret::Secret;
pub use error::{Error, Result};
