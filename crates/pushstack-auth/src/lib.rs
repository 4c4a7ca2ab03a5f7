//! Shared-secret HMAC request signing and channel authentication for PushStack.
//!
//! This crate is the trust core of the PushStack client: it turns
//! loosely-ordered request data into byte-exact canonical signing inputs and
//! derives HMAC-SHA256 credentials from them, so that an independent server
//! implementation re-derives identical signatures. Two kinds of actors are
//! authenticated: server-to-server REST calls (signed query parameter
//! lists) and end-users joining private or presence channels over a
//! realtime connection (one-time `appKey:signature` tokens).
//!
//! Everything here is a synchronous, pure function over its inputs: no
//! clocks, no I/O, no shared mutable state. The HTTP transport, response
//! parsing, and the pub-sub logic itself are external collaborators.
//!
//! # Usage
//!
//! ```rust
//! use pushstack_auth::{Credentials, authenticate_private_channel, build_auth_params};
//!
//! let credentials = Credentials::new("278d425bdf160c739803", "7ad3773142a6692b25b8");
//!
//! // Sign a REST call. The timestamp is caller-supplied Unix seconds.
//! let params =
//!     build_auth_params(&credentials, "POST", "/apps/3/events", &[], b"{}", 1_000_000_000);
//! assert_eq!(params[0].0, "auth_signature");
//!
//! // Issue a channel subscription token.
//! let token = authenticate_private_channel(&credentials, "1234.1234", "private-foobar");
//! assert!(token.starts_with("278d425bdf160c739803:"));
//! ```
//!
//! # Modules
//!
//! - [`canonical`] - Canonical query string and signing input construction
//! - [`channel`] - Private and presence channel token authenticators
//! - [`checksum`] - Request body MD5 checksum
//! - [`credentials`] - Application key/secret pair
//! - [`encoder`] - Pluggable presence user data encoding
//! - [`error`] - Authentication error types
//! - [`rest`] - REST query parameter signing and verification
//! - [`signature`] - The HMAC-SHA256 signing primitive

pub mod canonical;
pub mod channel;
pub mod checksum;
pub mod credentials;
pub mod encoder;
pub mod error;
pub mod rest;
pub mod signature;

pub use channel::{
    authenticate_presence_channel, authenticate_presence_channel_with,
    authenticate_private_channel,
};
pub use checksum::body_md5;
pub use credentials::{AppSecret, Credentials};
pub use encoder::{JsonEncoder, UserDataEncoder};
pub use error::AuthError;
pub use rest::{build_auth_params, verify_auth_params};
pub use signature::{sign, verify};
