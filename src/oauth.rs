//! Contract between the Flickr strategy and a generic OAuth 1.0a client.
//!
//! The client owns the whole handshake: request-token acquisition, the user redirect,
//! the access-token exchange, request signing, and session storage of intermediate
//! tokens under [`OAuth1Config::session_key`]. The strategy only supplies a completed
//! [`OAuth1Config`] and the [`StrategyHooks`] the client calls once it holds an access
//! token and the raw [`TokenParams`].

pub mod config;
pub mod hooks;
pub mod params;

pub use config::*;
pub use hooks::*;
pub use params::*;

// self
use crate::_prelude::*;

/// Generic OAuth 1.0a client driven by a provider strategy.
///
/// Implementations are constructed exactly once per strategy through [`OAuth1Client::build`]
/// and must call [`StrategyHooks::resolve_user`] (or the two hooks in the same order) after
/// the access-token exchange. Construction failures should be wrapped with
/// [`Error::client`].
pub trait OAuth1Client
where
	Self: 'static + Send + Sync + Sized,
{
	/// Application user type produced by the verify callback.
	type User;

	/// Builds the client from a completed configuration and the strategy hooks.
	fn build(config: OAuth1Config, hooks: StrategyHooks<Self::User>) -> Result<Self>;
}
