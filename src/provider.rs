//! Flickr provider: fixed defaults (`options`), profile normalization (`profile`), and the
//! strategy adapter wiring both into a generic OAuth 1.0a client (`strategy`).

pub mod options;
pub mod profile;
pub mod strategy;

pub use options::*;
pub use profile::*;
pub use strategy::*;

/// Name the strategy registers under and the `provider` field of every profile.
pub const PROVIDER_NAME: &str = "flickr";
