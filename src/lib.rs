//! OAuth 2.0 Authorization Code and Client Credentials flows for eBay's identity service.
//!
//! Build an [`OAuth2Client`](flows::OAuth2Client) from a [`ClientConfig`](config::ClientConfig)
//! and an HTTP transport, then spawn a flow per attempt:
//!
//! - [`AuthorizationCodeFlow`](flows::AuthorizationCodeFlow) produces the consent URL,
//!   validates the redirect callback, and exchanges the code for an access token.
//! - [`ClientCredentialsFlow`](flows::ClientCredentialsFlow) requests an application token
//!   directly.
//!
//! Every exchange is a single POST to the token endpoint authenticated with HTTP Basic.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod config;
pub mod error;
pub mod flows;
pub mod http;
pub mod oauth;
pub mod obs;

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use oauth2;
#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _, parking_lot as _, tokio as _};
