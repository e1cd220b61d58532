//! Consumer and access credentials exchanged with the OAuth 1.0a client.

pub mod credentials;
pub mod secret;

pub use credentials::*;
pub use secret::*;
