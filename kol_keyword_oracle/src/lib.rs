//! Checks whether a social media account recently posted any of some
//! keywords, using the Mainline API, and encodes the answer as a `uint256`
//! for an oracle callback.

/// Various types used throughout.
mod types;
pub use types::*;

/// Errors that stop an invocation.
pub mod error;

/// Positional argument parsing.
pub mod args;

/// API location and timeouts.
pub mod config;

/// Mainline API client.
pub mod mainline;

/// Keyword matching.
pub mod keyword_checker;

/// `uint256` encoding.
pub mod encoding;

/// Entry functions that run the whole thing.
mod entry;
pub use entry::*;

/// Name of the secret holding the Mainline API key.
pub const API_KEY_SECRET: &str = "apiKey";

/// Environment variable the API key secret is loaded from.
pub const API_KEY_ENV_VAR: &str = "MAINLINE_API_KEY";
