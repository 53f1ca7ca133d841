//! Auth-domain models: grant types, redacted secrets, and issued access tokens.

/// Grant type identifiers.
pub mod grant;
/// Redacting secret wrapper.
pub mod secret;
/// Token endpoint responses.
pub mod token;

pub use grant::*;
pub use secret::*;
pub use token::*;
