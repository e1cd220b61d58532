//! Flickr strategy for OAuth 1.0a clients—provider defaults, redacted credentials, and
//! normalized user profiles without tying applications to a particular OAuth stack.
//!
//! The crate never signs requests or talks HTTP itself. A generic OAuth 1.0a client
//! implements [`oauth::OAuth1Client`]; [`provider::FlickrStrategy`] completes the
//! configuration with Flickr's endpoints, hands the client its profile hook, and maps
//! the access-token response into a [`provider::Profile`].

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod error;
pub mod oauth;
pub mod obs;
pub mod provider;

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		sync::Arc,
	};

	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use url;
#[cfg(test)] use color_eyre as _;
